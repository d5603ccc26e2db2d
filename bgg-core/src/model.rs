//! Records produced from upstream responses.
//!
//! Every record is a plain value built fresh per fetch. Unknown numeric
//! fields hold [`UNKNOWN`], unknown text holds an empty string; real data
//! never uses either, so callers can tell them apart from present values.

use chrono::NaiveDate;
use serde::Serialize;

/// Sentinel for numeric fields (ratings, ranks, player counts) the response
/// did not carry or carried in an unusable form.
pub const UNKNOWN: i32 = -1;

/// One entry of a user's collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionItem {
    pub game_id: i32,
    pub name: String,
    pub owned: bool,
    pub want: bool,
    pub wish_list: bool,
    pub for_trade: bool,
    pub pre_ordered: bool,
    pub previously_owned: bool,
    pub want_to_buy: bool,
    pub want_to_play: bool,
    pub min_players: i32,
    pub max_players: i32,
    pub playing_time: i32,
    pub num_plays: i32,
    /// The collection owner's own rating, `-1.0` when unrated.
    pub rating: f64,
    pub average_rating: f64,
    pub rank: i32,
    pub is_expansion: bool,
    pub user_comment: String,
    pub image: String,
    pub thumbnail: String,
    pub year_published: i32,
}

/// One entry of the hotness list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotGame {
    pub rank: i32,
    pub game_id: i32,
    pub name: String,
    /// `0` when the entry has no year.
    pub year_published: i32,
    pub thumbnail: String,
}

/// A logged play session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayItem {
    pub game_id: i32,
    pub name: String,
    pub num_plays: i32,
    /// [`NaiveDate::MIN`] when the upstream date is not a strict `yyyy-MM-dd`.
    pub play_date: NaiveDate,
}

impl PlayItem {
    pub fn has_date(&self) -> bool {
        self.play_date != NaiveDate::MIN
    }
}

/// Full detail record for a single game, as cached by the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameDetails {
    pub game_id: i32,
    pub name: String,
    pub year_published: i32,
    pub average_rating: f64,
    /// Bayesian average used for the site-wide ranking.
    pub bgg_rating: f64,
    pub min_players: i32,
    pub max_players: i32,
    pub playing_time: i32,
    pub description: String,
    pub image: String,
    pub thumbnail: String,
    pub designers: Vec<String>,
    pub artists: Vec<String>,
    pub publishers: Vec<String>,
    pub mechanics: Vec<String>,
    pub rank: i32,
    pub is_expansion: bool,
    /// Base games this item expands. Never `Some` of an empty list.
    pub expands: Option<Vec<BoardGameLink>>,
    /// Games that expand this item. Never `Some` of an empty list.
    pub expansions: Option<Vec<BoardGameLink>>,
    pub player_poll_results: Vec<PlayerPollResult>,
}

/// Community votes for one player-count bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayerPollResult {
    pub num_players: i32,
    /// The bucket means "this many players or more" (e.g. `4+`).
    pub num_players_is_and_higher: bool,
    pub best: i32,
    pub recommended: i32,
    pub not_recommended: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub game_id: i32,
    pub name: String,
    pub year_published: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub username: String,
    pub text: String,
    /// `0.0` when the commenter left no usable rating.
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardGameLink {
    pub game_id: i32,
    pub name: String,
}
