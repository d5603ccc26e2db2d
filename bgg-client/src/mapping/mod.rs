//! One mapping rule per response shape.
//!
//! Rules read optional fields through [`bgg_core::extract`] and never fail
//! on them. Fields that upstream always sends are read strictly; when one is
//! missing the rule returns a [`MapError`](bgg_core::MapError) and the
//! caller drops the whole response.

pub mod collection;
pub mod comments;
pub mod hot;
pub mod plays;
pub mod poll;
pub mod search;
pub mod thing;
pub mod user;

pub use collection::collection_items;
pub use comments::comments_page;
pub use hot::hot_games;
pub use plays::play_items;
pub use poll::player_poll_results;
pub use search::search_results;
pub use thing::game_details;
pub use user::user_details;

#[cfg(test)]
#[path = "../tests/mapping_tests.rs"]
mod tests;
