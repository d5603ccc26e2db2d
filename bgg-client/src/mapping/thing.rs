use bgg_core::extract::{
    parse_decimal, require_child, require_child_int, require_child_value, require_int,
    string_value,
};
use bgg_core::{BoardGameLink, Document, Element, GameDetails, MapError};

use crate::mapping::poll::player_poll_results;
use crate::rank::overall_rank;

const DESIGNER: &str = "boardgamedesigner";
const ARTIST: &str = "boardgameartist";
const PUBLISHER: &str = "boardgamepublisher";
const MECHANIC: &str = "boardgamemechanic";
const CATEGORY: &str = "boardgamecategory";
const EXPANSION: &str = "boardgameexpansion";

/// Category id of "Expansion for Base-game".
const EXPANSION_CATEGORY_ID: &str = "1042";

/// Map a `/thing?stats=1` response to the first item it describes.
///
/// `Ok(None)` when the response holds no item. Names, images, links and the
/// poll are lenient; the numeric headline fields, the description and link
/// ids are required.
pub fn game_details(doc: &Document) -> Result<Option<GameDetails>, MapError> {
    let Some(item) = doc
        .descendants("items")
        .first()
        .copied()
        .and_then(|items| items.child("item"))
    else {
        return Ok(None);
    };

    let ratings = item
        .path(&["statistics", "ratings"])
        .ok_or_else(|| MapError::missing_element("statistics/ratings"))?;

    Ok(Some(GameDetails {
        game_id: require_int(item, "id")?,
        name: primary_name(item),
        year_published: require_child_int(item, "yearpublished")?,
        average_rating: required_decimal(ratings, "average")?,
        bgg_rating: required_decimal(ratings, "bayesaverage")?,
        min_players: require_child_int(item, "minplayers")?,
        max_players: require_child_int(item, "maxplayers")?,
        playing_time: require_child_int(item, "playingtime")?,
        description: require_child(item, "description")?.text().to_string(),
        image: string_value(item.child("image"), None, ""),
        thumbnail: string_value(item.child("thumbnail"), None, ""),
        designers: link_names(item, DESIGNER),
        artists: link_names(item, ARTIST),
        publishers: link_names(item, PUBLISHER),
        mechanics: link_names(item, MECHANIC),
        rank: overall_rank(ratings.child("ranks")),
        is_expansion: is_expansion(item),
        expands: non_empty(expansion_links(item, true)?),
        expansions: non_empty(expansion_links(item, false)?),
        player_poll_results: player_poll_results(item),
    }))
}

fn required_decimal(ratings: &Element, name: &str) -> Result<f64, MapError> {
    let raw = require_child_value(ratings, name)?;
    parse_decimal(raw).ok_or_else(|| MapError::invalid_value(name, raw, "decimal"))
}

/// First `<name type="primary">`; empty when the item only has alternates.
fn primary_name(item: &Element) -> String {
    let primary = item
        .children_named("name")
        .find(|n| n.attr("type") == Some("primary"));
    string_value(primary, Some("value"), "")
}

fn links<'a>(item: &'a Element, kind: &'a str) -> impl Iterator<Item = &'a Element> {
    item.children_named("link")
        .filter(move |l| l.attr("type") == Some(kind))
}

fn link_names(item: &Element, kind: &str) -> Vec<String> {
    links(item, kind)
        .map(|l| string_value(Some(l), Some("value"), ""))
        .collect()
}

fn is_expansion(item: &Element) -> bool {
    links(item, CATEGORY).any(|l| l.attr("id") == Some(EXPANSION_CATEGORY_ID))
}

/// Expansion links in one direction. `inbound="true"` marks a base game this
/// item expands; any other value, or no marker, marks an expansion of this
/// item.
fn expansion_links(item: &Element, inbound: bool) -> Result<Vec<BoardGameLink>, MapError> {
    links(item, EXPANSION)
        .filter(|l| (l.attr("inbound") == Some("true")) == inbound)
        .map(|l| {
            Ok(BoardGameLink {
                game_id: require_int(l, "id")?,
                name: string_value(Some(l), Some("value"), ""),
            })
        })
        .collect()
}

fn non_empty<T>(list: Vec<T>) -> Option<Vec<T>> {
    if list.is_empty() { None } else { Some(list) }
}
