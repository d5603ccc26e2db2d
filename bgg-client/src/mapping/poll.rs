use bgg_core::extract::{int_value, parse_int};
use bgg_core::{Element, PlayerPollResult};

const PLAYER_COUNT_POLL: &str = "suggested_numplayers";

/// Player-count poll of a `/thing` item.
///
/// Uses the `suggested_numplayers` poll, or the first poll when none carries
/// that name. Missing vote options count as zero.
pub fn player_poll_results(item: &Element) -> Vec<PlayerPollResult> {
    let poll = item
        .children_named("poll")
        .find(|p| p.attr("name") == Some(PLAYER_COUNT_POLL))
        .or_else(|| item.child("poll"));

    let Some(poll) = poll else {
        return Vec::new();
    };

    poll.children_named("results")
        .map(|results| {
            let bucket = results.attr("numplayers").unwrap_or_default();
            PlayerPollResult {
                num_players: parse_int(&bucket.replace('+', "")).unwrap_or(0),
                num_players_is_and_higher: bucket.contains('+'),
                best: vote_count(results, "Best"),
                recommended: vote_count(results, "Recommended"),
                not_recommended: vote_count(results, "Not Recommended"),
            }
        })
        .collect()
}

fn vote_count(results: &Element, option: &str) -> i32 {
    let choice = results
        .children_named("result")
        .find(|r| r.attr("value") == Some(option));
    int_value(choice, Some("numvotes"), 0)
}
