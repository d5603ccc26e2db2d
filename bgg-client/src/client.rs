//! Public operations of the client.
//!
//! Every operation comes in two forms. `try_*` returns a [`BggError`] when
//! anything goes wrong, so callers can tell "nothing found" from "fetch
//! failed". The unprefixed form logs the error and returns an empty or
//! neutral value instead; it never fails and never returns partial results.

use bgg_core::{
    CollectionItem, Comment, Document, GameDetails, HotGame, PlayItem, SearchResult, User,
};
use tokio::time::Duration;

use crate::cache::{DetailCache, MemoryCache};
use crate::drivers::{COMMENTS_PAGE_SIZE, gather, paginate};
use crate::endpoints::{CollectionSubset, Endpoints};
use crate::error::BggError;
use crate::mapping;
use crate::settings::ClientSettings;
use crate::transport::{HttpTransport, Transport};

/// Collection halves, in the order their items are returned.
const COLLECTION_SUBSETS: [CollectionSubset; 2] =
    [CollectionSubset::BaseGames, CollectionSubset::Expansions];

/// Read-only client for the board game XML API.
pub struct BggClient<T = HttpTransport, C = MemoryCache> {
    transport: T,
    cache: C,
    endpoints: Endpoints,
    detail_ttl: Duration,
}

impl BggClient {
    /// Client over HTTP with an in-memory detail cache.
    pub fn new(settings: &ClientSettings) -> Result<Self, BggError> {
        Ok(Self::with_parts(
            HttpTransport::from_settings(settings)?,
            MemoryCache::new(),
            Endpoints::new(&settings.base_url)?,
            settings.detail_ttl(),
        ))
    }
}

impl<T: Transport, C: DetailCache> BggClient<T, C> {
    pub fn with_parts(transport: T, cache: C, endpoints: Endpoints, detail_ttl: Duration) -> Self {
        Self {
            transport,
            cache,
            endpoints,
            detail_ttl,
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    async fn fetch_document(&self, url: &str) -> Result<Document, BggError> {
        log::debug!("Downloading {}", url);
        let bytes = self.transport.fetch(url).await?;
        Ok(Document::from_utf8_bytes(&bytes)?)
    }

    // -- Collection ---------------------------------------------------------

    /// Base games followed by expansions, fetched concurrently.
    pub async fn try_load_collection(
        &self,
        username: &str,
    ) -> Result<Vec<CollectionItem>, BggError> {
        gather(
            COLLECTION_SUBSETS.map(move |subset| self.try_load_collection_subset(username, subset)),
        )
        .await
    }

    /// Like [`try_load_collection`](Self::try_load_collection), but a failed
    /// half contributes no items instead of failing the whole collection.
    pub async fn load_collection(&self, username: &str) -> Vec<CollectionItem> {
        let requests = COLLECTION_SUBSETS.map(move |subset| async move {
            let items = self.try_load_collection_subset(username, subset).await;
            Ok::<_, BggError>(or_neutral("collection", items))
        });
        gather(requests).await.unwrap_or_default()
    }

    pub async fn try_load_collection_subset(
        &self,
        username: &str,
        subset: CollectionSubset,
    ) -> Result<Vec<CollectionItem>, BggError> {
        let doc = self
            .fetch_document(&self.endpoints.collection(username, subset))
            .await?;
        Ok(mapping::collection_items(&doc, subset.is_expansion()))
    }

    // -- Hotness ------------------------------------------------------------

    pub async fn try_load_hotness(&self) -> Result<Vec<HotGame>, BggError> {
        let doc = self.fetch_document(&self.endpoints.hot()).await?;
        Ok(mapping::hot_games(&doc)?)
    }

    pub async fn load_hotness(&self) -> Vec<HotGame> {
        or_neutral("hotness", self.try_load_hotness().await)
    }

    // -- Plays --------------------------------------------------------------

    pub async fn try_load_last_plays(&self, username: &str) -> Result<Vec<PlayItem>, BggError> {
        let doc = self.fetch_document(&self.endpoints.plays(username)).await?;
        Ok(mapping::play_items(&doc)?)
    }

    pub async fn load_last_plays(&self, username: &str) -> Vec<PlayItem> {
        or_neutral("plays", self.try_load_last_plays(username).await)
    }

    // -- Game details -------------------------------------------------------

    /// Details for one game. With `use_cache`, a fresh cached record is
    /// returned without a fetch. Fetched records are always cached.
    pub async fn try_load_game(
        &self,
        game_id: i32,
        use_cache: bool,
    ) -> Result<Option<GameDetails>, BggError> {
        if use_cache {
            if let Some(details) = self.cache.get(game_id).await {
                log::debug!("Game {} served from cache", game_id);
                return Ok(Some(details));
            }
            log::debug!("Game {} not cached", game_id);
        }

        let doc = self.fetch_document(&self.endpoints.thing(game_id)).await?;
        let details = mapping::game_details(&doc)?;

        if let Some(ref details) = details {
            self.cache
                .put(details.game_id, details.clone(), self.detail_ttl)
                .await;
        }
        Ok(details)
    }

    pub async fn load_game(&self, game_id: i32, use_cache: bool) -> Option<GameDetails> {
        or_neutral("game details", self.try_load_game(game_id, use_cache).await)
    }

    // -- Search -------------------------------------------------------------

    pub async fn try_search(&self, query: &str) -> Result<Vec<SearchResult>, BggError> {
        let doc = self.fetch_document(&self.endpoints.search(query)).await?;
        Ok(mapping::search_results(&doc))
    }

    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        or_neutral("search", self.try_search(query).await)
    }

    // -- Users --------------------------------------------------------------

    /// `Ok(None)` when upstream knows no such user.
    pub async fn try_load_user_details(&self, username: &str) -> Result<Option<User>, BggError> {
        let doc = self.fetch_document(&self.endpoints.user(username)).await?;
        Ok(mapping::user_details(&doc, username))
    }

    /// Never absent: an unknown user or a failed fetch yields `User::default()`.
    pub async fn load_user_details(&self, username: &str) -> User {
        or_neutral("user", self.try_load_user_details(username).await).unwrap_or_default()
    }

    // -- Comments -----------------------------------------------------------

    /// Every comment of a game, fetched page by page until `total_comments`
    /// are covered.
    pub async fn try_load_all_comments(
        &self,
        game_id: i32,
        total_comments: u32,
    ) -> Result<Vec<Comment>, BggError> {
        paginate(total_comments, COMMENTS_PAGE_SIZE, move |page| {
            self.try_load_comments_page(game_id, page)
        })
        .await
    }

    pub async fn load_all_comments(&self, game_id: i32, total_comments: u32) -> Vec<Comment> {
        or_neutral(
            "comments",
            self.try_load_all_comments(game_id, total_comments).await,
        )
    }

    pub async fn try_load_comments_page(
        &self,
        game_id: i32,
        page: u32,
    ) -> Result<Vec<Comment>, BggError> {
        let doc = self
            .fetch_document(&self.endpoints.comments(game_id, page))
            .await?;
        Ok(mapping::comments_page(&doc)?)
    }
}

/// Log a failed operation and fall back to the empty value.
fn or_neutral<V: Default>(operation: &str, result: Result<V, BggError>) -> V {
    result.unwrap_or_else(|e| {
        log::warn!("Loading {} failed: {}", operation, e);
        V::default()
    })
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
