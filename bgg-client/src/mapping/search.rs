use bgg_core::extract::{int_value, string_value};
use bgg_core::{Document, SearchResult, UNKNOWN};

pub fn search_results(doc: &Document) -> Vec<SearchResult> {
    doc.descendants("item")
        .into_iter()
        .map(|item| SearchResult {
            game_id: int_value(Some(item), Some("id"), UNKNOWN),
            name: string_value(item.child("name"), Some("value"), ""),
            year_published: int_value(item.child("yearpublished"), Some("value"), UNKNOWN),
        })
        .collect()
}
