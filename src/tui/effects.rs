use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::{debug, warn};

use super::action::Action;
use crate::cache;
use crate::calendar::CalendarDate;
use crate::events::{filter_events, EventPreferences, EventSource};

/// Side effects returned by the reducer
///
/// The reducer stays pure; the runtime turns the data variants into async
/// work through `DataEffects` and feeds the resulting actions back in.
pub enum Effect {
    None,
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    RequestAccess,
    FetchCalendars,
    FetchEvents { date: CalendarDate, prefs: EventPreferences },
    ReloadStore,
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Batch(effects) => f.debug_tuple("Batch").field(effects).finish(),
            Self::Async(_) => write!(f, "Async(..)"),
            Self::RequestAccess => write!(f, "RequestAccess"),
            Self::FetchCalendars => write!(f, "FetchCalendars"),
            Self::FetchEvents { date, .. } => write!(f, "FetchEvents({})", date),
            Self::ReloadStore => write!(f, "ReloadStore"),
        }
    }
}

/// Effect handler for event source operations
///
/// Each method returns an Effect that will dispatch the matching
/// *Loaded / *Resolved action when complete.
pub struct DataEffects {
    source: Arc<dyn EventSource>,
    use_cache: bool,
}

impl DataEffects {
    /// Create a handler whose day lookups go through the events cache
    pub fn new(source: Arc<dyn EventSource>) -> Self {
        Self { source, use_cache: true }
    }

    /// Create a handler that always asks the source directly
    #[cfg(test)]
    pub fn uncached(source: Arc<dyn EventSource>) -> Self {
        Self { source, use_cache: false }
    }

    /// Ask the source for access
    pub fn request_access(&self) -> Effect {
        let source = self.source.clone();
        Effect::Async(Box::pin(async move {
            let status = source.request_access().await;
            debug!("EFFECT: access resolved to {:?}", status);
            Action::AccessResolved(status)
        }))
    }

    /// Load the list of calendars
    pub fn fetch_calendars(&self) -> Effect {
        let source = self.source.clone();
        Effect::Async(Box::pin(async move {
            let result = source.calendars().await;
            Action::CalendarsLoaded(result.map_err(|e| e.to_string()))
        }))
    }

    /// Load the filtered events of one day
    pub fn fetch_events(&self, date: CalendarDate, prefs: EventPreferences) -> Effect {
        let source = self.source.clone();
        let use_cache = self.use_cache;
        Effect::Async(Box::pin(async move {
            let result = if use_cache {
                cache::fetch_events_cached(source.as_ref(), date).await
            } else {
                source.events_on(date).await
            };
            let result = result
                .map(|events| filter_events(events, &prefs))
                .map_err(|e| e.to_string());
            Action::EventsLoaded(date, result)
        }))
    }

    /// Re-read the store and forget cached days
    pub fn reload_store(&self) -> Effect {
        let source = self.source.clone();
        Effect::Async(Box::pin(async move {
            let result = source.reload().await;
            match &result {
                // Cleared only now so lookups racing the reload cannot keep old days
                Ok(()) => cache::clear_all_caches().await,
                Err(e) => warn!("EFFECT: reload failed: {}", e),
            }
            Action::StoreReloaded(result.map_err(|e| e.to_string()))
        }))
    }
}
