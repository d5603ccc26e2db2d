pub mod error;
pub mod extract;
pub mod model;
pub mod xml;

pub use error::{DocumentError, MapError};
pub use model::{
    BoardGameLink, CollectionItem, Comment, GameDetails, HotGame, PlayItem, PlayerPollResult,
    SearchResult, UNKNOWN, User,
};
pub use xml::{Document, Element};
