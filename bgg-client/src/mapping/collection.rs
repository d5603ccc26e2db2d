use bgg_core::extract::{bool_value, decimal_value, descend, int_value, string_value};
use bgg_core::{CollectionItem, Document, UNKNOWN};

use crate::rank::overall_rank;

const UNRATED: f64 = -1.0;

/// Map a `/collection` response. Every field is optional.
///
/// `is_expansion` is the subset the request asked for; the response itself
/// does not repeat it in a usable form.
pub fn collection_items(doc: &Document, is_expansion: bool) -> Vec<CollectionItem> {
    doc.descendants("item")
        .into_iter()
        .map(|item| {
            let node = Some(item);
            let stats = item.child("stats");
            let rating = descend(stats, &["rating"]);
            let status = item.child("status");
            let flag = |name: &str| bool_value(status, Some(name), false);

            CollectionItem {
                game_id: int_value(node, Some("objectid"), UNKNOWN),
                name: string_value(item.child("name"), None, ""),
                owned: flag("own"),
                want: flag("want"),
                wish_list: flag("wishlist"),
                for_trade: flag("fortrade"),
                pre_ordered: flag("preordered"),
                previously_owned: flag("prevowned"),
                want_to_buy: flag("wanttobuy"),
                want_to_play: flag("wanttoplay"),
                min_players: int_value(stats, Some("minplayers"), UNKNOWN),
                max_players: int_value(stats, Some("maxplayers"), UNKNOWN),
                playing_time: int_value(stats, Some("playingtime"), UNKNOWN),
                num_plays: int_value(item.child("numplays"), None, UNKNOWN),
                rating: decimal_value(rating, Some("value"), UNRATED),
                average_rating: decimal_value(descend(rating, &["average"]), Some("value"), UNRATED),
                rank: overall_rank(descend(rating, &["ranks"])),
                is_expansion,
                user_comment: string_value(item.child("comment"), None, ""),
                image: string_value(item.child("image"), None, ""),
                thumbnail: string_value(item.child("thumbnail"), None, ""),
                year_published: int_value(item.child("yearpublished"), None, UNKNOWN),
            }
        })
        .collect()
}
