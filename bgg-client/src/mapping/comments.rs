use bgg_core::extract::{decimal_value, require_attr, require_child};
use bgg_core::{Comment, Document, MapError};

/// Map one page of a `/thing?comments=1` response.
///
/// The document must be `<items><item>...`; the `<comments>` block itself
/// is optional and a page without it is simply empty.
pub fn comments_page(doc: &Document) -> Result<Vec<Comment>, MapError> {
    let root = doc.root();
    if root.name() != "items" {
        return Err(MapError::missing_element("items"));
    }
    let item = require_child(root, "item")?;
    let Some(comments) = item.child("comments") else {
        return Ok(Vec::new());
    };

    comments
        .children_named("comment")
        .map(|comment| {
            Ok(Comment {
                username: require_attr(comment, "username")?.to_string(),
                text: require_attr(comment, "value")?.to_string(),
                rating: decimal_value(Some(comment), Some("rating"), 0.0),
            })
        })
        .collect()
}
