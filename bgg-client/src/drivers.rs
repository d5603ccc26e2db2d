//! Request fan-out and pagination.

use std::future::Future;

use futures::future::join_all;

/// Upstream returns comments in pages of this size.
pub const COMMENTS_PAGE_SIZE: u32 = 100;

/// Run every request concurrently and concatenate their items in the order
/// the requests were given, whatever order they finish in.
///
/// All requests are awaited before anything is combined; the first error in
/// request order is returned and the other results are discarded.
pub async fn gather<I, F, T, E>(requests: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<Vec<T>, E>>,
{
    let results = join_all(requests).await;

    let mut combined = Vec::new();
    for result in results {
        combined.extend(result?);
    }
    Ok(combined)
}

/// Fetch pages `1, 2, ...` one after another until `total` items are
/// covered, i.e. while `(page - 1) * page_size < total`.
///
/// Pages are never fetched ahead of time. A short final page is fine; the
/// item count per page is not checked.
pub async fn paginate<F, Fut, T, E>(
    total: u32,
    page_size: u32,
    mut fetch_page: F,
) -> Result<Vec<T>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let page_size = u64::from(page_size.max(1));
    let mut items = Vec::new();
    let mut page: u32 = 1;

    while u64::from(page - 1) * page_size < u64::from(total) {
        log::debug!(
            "Fetching page {} ({} of {} items so far)",
            page,
            items.len(),
            total
        );
        items.extend(fetch_page(page).await?);
        page += 1;
    }
    Ok(items)
}

#[cfg(test)]
#[path = "tests/drivers_tests.rs"]
mod tests;
