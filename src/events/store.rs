/// TOML-file-backed local calendar store
///
/// The file holds a list of calendars and a list of events:
///
/// ```toml
/// [[calendars]]
/// id = "work"
/// title = "Work"
/// color = "#3b82f6"
///
/// [[events]]
/// calendar = "work"
/// title = "Standup"
/// start = "2026-10-19T09:30:00"
/// end = "2026-10-19T09:45:00"
/// ```
///
/// A missing file is an empty store. A file the process may not read is
/// treated as denied access.
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, info, warn};

use super::{AccessStatus, Calendar, EventSource, EventSourceError, EventSummary};
use crate::calendar::CalendarDate;

const DEFAULT_CALENDAR_COLOR: &str = "gray";

#[derive(Debug, Deserialize, Default)]
struct StoreFile {
    #[serde(default)]
    calendars: Vec<CalendarEntry>,
    #[serde(default)]
    events: Vec<EventEntry>,
}

#[derive(Debug, Deserialize)]
struct CalendarEntry {
    id: String,
    title: Option<String>,
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EventEntry {
    calendar: String,
    title: String,
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
    #[serde(default)]
    all_day: bool,
}

#[derive(Debug, Clone, Default)]
struct LoadedStore {
    calendars: Vec<Calendar>,
    events: Vec<EventSummary>,
}

#[derive(Debug, Clone)]
enum StoreState {
    NotLoaded,
    Loaded(LoadedStore),
    /// Readable but malformed; every read retries and reports the error
    Invalid,
    Denied,
}

/// Event source reading a TOML file on first access
pub struct LocalStore {
    path: PathBuf,
    state: RwLock<StoreState>,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: RwLock::new(StoreState::NotLoaded),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn current_state(&self) -> StoreState {
        match self.state.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set_state(&self, state: StoreState) {
        match self.state.write() {
            Ok(mut guard) => *guard = state,
            Err(poisoned) => *poisoned.into_inner() = state,
        }
    }

    /// Read and validate the store file
    async fn load(&self) -> Result<StoreState, EventSourceError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("STORE: {} does not exist, starting empty", self.path.display());
                return Ok(StoreState::Loaded(LoadedStore::default()));
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                warn!("STORE: access to {} denied", self.path.display());
                return Ok(StoreState::Denied);
            }
            Err(source) => {
                return Err(EventSourceError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let file: StoreFile = toml::from_str(&content).map_err(|source| EventSourceError::Parse {
            path: self.path.clone(),
            source,
        })?;
        let store = resolve(file)?;
        debug!(
            "STORE: loaded {} calendars and {} events from {}",
            store.calendars.len(),
            store.events.len(),
            self.path.display()
        );
        Ok(StoreState::Loaded(store))
    }

    /// Loaded store contents, loading on first use; None when access is denied
    async fn loaded(&self) -> Result<Option<LoadedStore>, EventSourceError> {
        let state = match self.current_state() {
            StoreState::NotLoaded | StoreState::Invalid => match self.load().await {
                Ok(state) => {
                    self.set_state(state.clone());
                    state
                }
                Err(e) => {
                    self.set_state(StoreState::Invalid);
                    return Err(e);
                }
            },
            state => state,
        };
        match state {
            StoreState::Loaded(store) => Ok(Some(store)),
            _ => Ok(None),
        }
    }
}

/// Turn file entries into calendars and events, attaching calendar colors
fn resolve(file: StoreFile) -> Result<LoadedStore, EventSourceError> {
    let calendars: Vec<Calendar> = file
        .calendars
        .into_iter()
        .map(|entry| Calendar {
            title: entry.title.unwrap_or_else(|| entry.id.clone()),
            color: entry.color.unwrap_or_else(|| DEFAULT_CALENDAR_COLOR.to_string()),
            id: entry.id,
        })
        .collect();

    let colors: HashMap<&str, &str> = calendars
        .iter()
        .map(|c| (c.id.as_str(), c.color.as_str()))
        .collect();

    let events = file
        .events
        .into_iter()
        .map(|entry| {
            let color = colors.get(entry.calendar.as_str()).ok_or_else(|| {
                EventSourceError::UnknownCalendar {
                    title: entry.title.clone(),
                    calendar: entry.calendar.clone(),
                }
            })?;
            Ok(EventSummary {
                source_color: color.to_string(),
                title: entry.title,
                start: entry.start,
                end: entry.end,
                is_all_day: entry.all_day,
                calendar_id: entry.calendar,
            })
        })
        .collect::<Result<Vec<_>, EventSourceError>>()?;

    Ok(LoadedStore { calendars, events })
}

#[async_trait]
impl EventSource for LocalStore {
    fn access_status(&self) -> AccessStatus {
        match self.current_state() {
            StoreState::NotLoaded => AccessStatus::NotDetermined,
            StoreState::Loaded(_) | StoreState::Invalid => AccessStatus::Granted,
            StoreState::Denied => AccessStatus::Denied,
        }
    }

    async fn request_access(&self) -> AccessStatus {
        if let Err(e) = self.loaded().await {
            // Readable but malformed: access itself is fine, reads will report the error
            warn!("STORE: {}", e);
            return AccessStatus::Granted;
        }
        self.access_status()
    }

    async fn calendars(&self) -> Result<Vec<Calendar>, EventSourceError> {
        Ok(self.loaded().await?.map(|s| s.calendars).unwrap_or_default())
    }

    async fn events_on(&self, date: CalendarDate) -> Result<Vec<EventSummary>, EventSourceError> {
        let Some(store) = self.loaded().await? else {
            return Ok(Vec::new());
        };
        let Some(day) = date.to_naive() else {
            return Ok(Vec::new());
        };
        Ok(store.events.into_iter().filter(|e| e.occurs_on(day)).collect())
    }

    async fn reload(&self) -> Result<(), EventSourceError> {
        match self.load().await {
            Ok(state) => {
                self.set_state(state);
                Ok(())
            }
            Err(e) => {
                self.set_state(StoreState::Invalid);
                Err(e)
            }
        }
    }
}
