use bgg_core::extract::{date_value, require_attr, require_child, require_int};
use bgg_core::{Document, MapError, PlayItem};

/// Map a `/plays` response.
///
/// Only the date is lenient: anything that is not a strict `yyyy-MM-dd`
/// becomes the minimum date.
pub fn play_items(doc: &Document) -> Result<Vec<PlayItem>, MapError> {
    doc.descendants("play")
        .into_iter()
        .map(|play| {
            let item = require_child(play, "item")?;
            Ok(PlayItem {
                game_id: require_int(item, "objectid")?,
                name: require_attr(item, "name")?.to_string(),
                num_plays: require_int(play, "quantity")?,
                play_date: date_value(require_attr(play, "date")?),
            })
        })
        .collect()
}
