/// Symbol printed on the face of a card.
/// Every symbol appears on exactly two cards of a deck.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Symbol {
    Diamond,
    PaperPlane,
    Anchor,
    Bolt,
    Cube,
    Leaf,
    Bicycle,
    Bomb,
}

impl Symbol {
    pub const ALL: [Symbol; 8] = [
        Symbol::Diamond,
        Symbol::PaperPlane,
        Symbol::Anchor,
        Symbol::Bolt,
        Symbol::Cube,
        Symbol::Leaf,
        Symbol::Bicycle,
        Symbol::Bomb,
    ];

    /// Display name for the card face
    pub const fn name(self) -> &'static str {
        match self {
            Symbol::Diamond => "Diamond",
            Symbol::PaperPlane => "Plane",
            Symbol::Anchor => "Anchor",
            Symbol::Bolt => "Bolt",
            Symbol::Cube => "Cube",
            Symbol::Leaf => "Leaf",
            Symbol::Bicycle => "Bicycle",
            Symbol::Bomb => "Bomb",
        }
    }
}

/// Where a card is in its lifecycle within one game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FaceState {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

/// A single card on the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Card {
    pub symbol: Symbol,
    pub face: FaceState,
}

impl Card {
    pub const fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            face: FaceState::Hidden,
        }
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self.face, FaceState::Hidden)
    }

    pub const fn is_matched(self) -> bool {
        matches!(self.face, FaceState::Matched)
    }

    /// Two cards form a pair when they carry the same symbol
    pub fn pairs_with(self, other: Card) -> bool {
        self.symbol == other.symbol
    }
}
