use crate::calendar::CalendarDate;
use crate::events::{EventSource, EventSourceError, EventSummary};
use cached::proc_macro::cached;

pub use cached::Cached;

/// Lifespan of a cached day lookup in seconds
pub const EVENTS_CACHE_LIFESPAN: u64 = 60;

/// Number of days kept in the cache (a few weeks of browsing around a date)
pub const EVENTS_CACHE_SIZE: usize = 62;

pub async fn clear_all_caches() {
    EVENTS_CACHE.lock().await.cache_clear();
}

#[cfg(test)]
pub async fn cache_size() -> usize {
    EVENTS_CACHE.lock().await.cache_size()
}

#[cfg(test)]
pub async fn is_cached(date: CalendarDate) -> bool {
    EVENTS_CACHE.lock().await.cache_get(&date.to_string()).is_some()
}

/// Unfiltered events for a day, cached per date
///
/// Filtering happens after the cache so preference changes never need an
/// invalidation; store edits show up once the entry expires or after
/// `clear_all_caches`.
#[cached(
    name = "EVENTS_CACHE",
    type = "cached::TimedSizedCache<String, Vec<EventSummary>>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(EVENTS_CACHE_SIZE, EVENTS_CACHE_LIFESPAN) }",
    convert = r#"{ format!("{}", date) }"#,
    result = true
)]
pub async fn fetch_events_cached(
    source: &dyn EventSource,
    date: CalendarDate,
) -> Result<Vec<EventSummary>, EventSourceError> {
    source.events_on(date).await
}
