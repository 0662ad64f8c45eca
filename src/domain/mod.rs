mod card;
mod deck;
mod rating;
mod clock;

pub use card::{Card, FaceState, Symbol};
pub use deck::{Deck, DECK_SIZE, PAIR_COUNT};
pub use rating::StarRating;
pub use clock::format_elapsed;
