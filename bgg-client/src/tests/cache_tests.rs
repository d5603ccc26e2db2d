use super::*;

const TWELVE_HOURS: Duration = Duration::from_secs(12 * 60 * 60);

fn details(game_id: i32, name: &str) -> GameDetails {
    GameDetails {
        game_id,
        name: name.to_string(),
        year_published: 2017,
        average_rating: 8.5,
        bgg_rating: 8.3,
        min_players: 1,
        max_players: 4,
        playing_time: 120,
        description: String::new(),
        image: String::new(),
        thumbnail: String::new(),
        designers: Vec::new(),
        artists: Vec::new(),
        publishers: Vec::new(),
        mechanics: Vec::new(),
        rank: 1,
        is_expansion: false,
        expands: None,
        expansions: None,
        player_poll_results: Vec::new(),
    }
}

#[tokio::test(start_paused = true)]
async fn stored_record_is_returned_until_ttl_elapses() {
    let cache = MemoryCache::new();
    cache.put(42, details(42, "Gloomhaven"), TWELVE_HOURS).await;

    assert_eq!(cache.get(42).await, Some(details(42, "Gloomhaven")));

    tokio::time::advance(TWELVE_HOURS - Duration::from_secs(1)).await;
    assert!(cache.get(42).await.is_some());

    tokio::time::advance(Duration::from_secs(1)).await;
    assert_eq!(cache.get(42).await, None);
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn unknown_id_is_a_miss() {
    let cache = MemoryCache::new();
    cache.put(1, details(1, "Azul"), TWELVE_HOURS).await;
    assert_eq!(cache.get(2).await, None);
}

#[tokio::test(start_paused = true)]
async fn put_overwrites_and_resets_expiration() {
    let cache = MemoryCache::new();
    cache.put(7, details(7, "Old"), Duration::from_secs(10)).await;
    tokio::time::advance(Duration::from_secs(8)).await;
    cache.put(7, details(7, "New"), Duration::from_secs(10)).await;
    tokio::time::advance(Duration::from_secs(8)).await;

    assert_eq!(cache.get(7).await.map(|d| d.name), Some("New".to_string()));
    assert_eq!(cache.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn purge_removes_only_expired_entries() {
    let cache = MemoryCache::new();
    cache.put(1, details(1, "Short"), Duration::from_secs(5)).await;
    cache.put(2, details(2, "Long"), TWELVE_HOURS).await;
    tokio::time::advance(Duration::from_secs(6)).await;

    assert_eq!(cache.purge_expired().await, 1);
    assert_eq!(cache.len().await, 1);
    assert!(cache.get(2).await.is_some());
}

#[tokio::test]
async fn huge_ttl_never_expires() {
    let cache = MemoryCache::new();
    cache.put(3, details(3, "Forever"), Duration::MAX).await;
    assert!(cache.get(3).await.is_some());
}

#[tokio::test]
async fn no_cache_never_hits() {
    let cache = NoCache;
    cache.put(42, details(42, "Gloomhaven"), TWELVE_HOURS).await;
    assert_eq!(cache.get(42).await, None);
}
