//! Overall board game rank from a `<ranks>` block.
//!
//! ```xml
//! <ranks>
//!     <rank type="subtype" id="1" name="boardgame" value="37"/>
//!     <rank type="family" id="5497" name="strategygames" value="12"/>
//! </ranks>
//! ```

use bgg_core::{Element, UNKNOWN};

/// Category id of the site-wide "Board Game Rank".
pub const OVERALL_RANK_ID: &str = "1";

/// Overall rank, or [`UNKNOWN`] when there is no overall entry, the entry says
/// "Not Ranked", or its value is not an integer.
///
/// Upstream sends a single overall entry; if several appear, the first one in
/// document order wins.
pub fn overall_rank(ranks: Option<&Element>) -> i32 {
    let Some(ranks) = ranks else {
        return UNKNOWN;
    };

    let value = ranks
        .children_named("rank")
        .find(|r| r.attr("id") == Some(OVERALL_RANK_ID))
        .and_then(|r| r.attr("value"));

    match value {
        Some(v) if v.trim().eq_ignore_ascii_case("not ranked") => UNKNOWN,
        Some(v) => bgg_core::extract::parse_int(v).unwrap_or(UNKNOWN),
        None => UNKNOWN,
    }
}

#[cfg(test)]
#[path = "tests/rank_tests.rs"]
mod tests;
