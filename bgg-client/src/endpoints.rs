use url::Url;

use crate::drivers::COMMENTS_PAGE_SIZE;
use crate::error::BggError;

/// Which half of a collection a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionSubset {
    BaseGames,
    Expansions,
}

impl CollectionSubset {
    pub fn is_expansion(self) -> bool {
        self == Self::Expansions
    }
}

/// Builds request URLs against the XML API base endpoint.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self, BggError> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(BggError::config(format!("Not a base URL: {base_url}")));
        }
        Ok(Self { base })
    }

    fn build(&self, operation: &str, params: &[(&str, &str)]) -> String {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(operation);
        }
        url.query_pairs_mut().extend_pairs(params);
        url.into()
    }

    pub fn collection(&self, username: &str, subset: CollectionSubset) -> String {
        let filter = match subset {
            CollectionSubset::BaseGames => ("excludesubtype", "boardgameexpansion"),
            CollectionSubset::Expansions => ("subtype", "boardgameexpansion"),
        };
        self.build(
            "collection",
            &[("username", username), ("stats", "1"), filter],
        )
    }

    pub fn hot(&self) -> String {
        self.build("hot", &[("type", "boardgame")])
    }

    pub fn plays(&self, username: &str) -> String {
        self.build(
            "plays",
            &[
                ("username", username),
                ("subtype", "boardgame"),
                ("excludesubtype", "videogame"),
            ],
        )
    }

    pub fn thing(&self, game_id: i32) -> String {
        let id = game_id.to_string();
        self.build("thing", &[("id", id.as_str()), ("stats", "1")])
    }

    pub fn comments(&self, game_id: i32, page: u32) -> String {
        let id = game_id.to_string();
        let page = page.to_string();
        let page_size = COMMENTS_PAGE_SIZE.to_string();
        self.build(
            "thing",
            &[
                ("id", id.as_str()),
                ("stats", "1"),
                ("comments", "1"),
                ("page", page.as_str()),
                ("pagesize", page_size.as_str()),
            ],
        )
    }

    pub fn search(&self, query: &str) -> String {
        self.build("search", &[("query", query), ("type", "boardgame")])
    }

    pub fn user(&self, username: &str) -> String {
        self.build("user", &[("name", username)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("https://boardgamegeek.com/xmlapi2").unwrap()
    }

    #[test]
    fn collection_subsets_use_opposite_filters() {
        let e = endpoints();
        assert_eq!(
            e.collection("alice", CollectionSubset::BaseGames),
            "https://boardgamegeek.com/xmlapi2/collection?username=alice&stats=1&excludesubtype=boardgameexpansion"
        );
        assert_eq!(
            e.collection("alice", CollectionSubset::Expansions),
            "https://boardgamegeek.com/xmlapi2/collection?username=alice&stats=1&subtype=boardgameexpansion"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let e = Endpoints::new("http://localhost:9000/xmlapi2/").unwrap();
        assert_eq!(e.hot(), "http://localhost:9000/xmlapi2/hot?type=boardgame");
    }

    #[test]
    fn query_text_is_encoded() {
        assert_eq!(
            endpoints().search("ticket to ride & co"),
            "https://boardgamegeek.com/xmlapi2/search?query=ticket+to+ride+%26+co&type=boardgame"
        );
    }

    #[test]
    fn comments_page_carries_page_and_size() {
        assert_eq!(
            endpoints().comments(13, 2),
            "https://boardgamegeek.com/xmlapi2/thing?id=13&stats=1&comments=1&page=2&pagesize=100"
        );
    }

    #[test]
    fn non_base_url_is_rejected() {
        assert!(Endpoints::new("mailto:someone@example.com").is_err());
        assert!(Endpoints::new("not a url").is_err());
    }
}
