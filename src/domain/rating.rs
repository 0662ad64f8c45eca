/// Coarse score from 1 to 3 stars derived from the move count.
///
/// The rating only changes when the move count lands exactly on one of the
/// trigger values below; between triggers it keeps its previous value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StarRating(u8);

impl StarRating {
    pub const MAX: u8 = 3;
    pub const FULL: StarRating = StarRating(Self::MAX);

    /// (move count, stars) pairs that set the rating
    const TRIGGERS: [(u32, u8); 3] = [(0, 3), (9, 2), (15, 1)];

    pub const fn stars(self) -> u8 {
        self.0
    }

    /// Rating after the move count changed to `moves`
    pub fn after_moves(self, moves: u32) -> Self {
        Self::TRIGGERS
            .iter()
            .find(|&&(trigger, _)| trigger == moves)
            .map_or(self, |&(_, stars)| StarRating(stars))
    }
}

impl Default for StarRating {
    fn default() -> Self {
        Self::FULL
    }
}
