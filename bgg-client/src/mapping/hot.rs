use bgg_core::extract::{require_child_value, require_int};
use bgg_core::{Document, HotGame, MapError};

/// Map a `/hot` response.
///
/// Hot list entries are always complete upstream, so only the year may be
/// absent (mapped to `0`). Any other gap fails the whole list.
pub fn hot_games(doc: &Document) -> Result<Vec<HotGame>, MapError> {
    doc.descendants("item")
        .into_iter()
        .map(|item| {
            let year_published = match item.child("yearpublished") {
                Some(year) => require_int(year, "value")?,
                None => 0,
            };
            Ok(HotGame {
                rank: require_int(item, "rank")?,
                game_id: require_int(item, "id")?,
                name: require_child_value(item, "name")?.to_string(),
                year_published,
                thumbnail: require_child_value(item, "thumbnail")?.to_string(),
            })
        })
        .collect()
}
