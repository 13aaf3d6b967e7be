/// In-memory event source for tests and demo mode
use async_trait::async_trait;
use tracing::debug;

use super::{AccessStatus, Calendar, EventSource, EventSourceError, EventSummary};
use crate::calendar::CalendarDate;

/// Event source backed by a fixed list of events
pub struct MemorySource {
    calendars: Vec<Calendar>,
    events: Vec<EventSummary>,
    status: AccessStatus,
}

impl MemorySource {
    /// Create an authorized source
    pub fn new(calendars: Vec<Calendar>, events: Vec<EventSummary>) -> Self {
        Self {
            calendars,
            events,
            status: AccessStatus::Granted,
        }
    }

    pub fn with_status(mut self, status: AccessStatus) -> Self {
        self.status = status;
        self
    }
}

#[async_trait]
impl EventSource for MemorySource {
    fn access_status(&self) -> AccessStatus {
        self.status
    }

    async fn request_access(&self) -> AccessStatus {
        self.status
    }

    async fn calendars(&self) -> Result<Vec<Calendar>, EventSourceError> {
        if self.status != AccessStatus::Granted {
            return Ok(Vec::new());
        }
        Ok(self.calendars.clone())
    }

    async fn events_on(&self, date: CalendarDate) -> Result<Vec<EventSummary>, EventSourceError> {
        if self.status != AccessStatus::Granted {
            return Ok(Vec::new());
        }
        let Some(day) = date.to_naive() else {
            return Ok(Vec::new());
        };
        let events: Vec<EventSummary> = self
            .events
            .iter()
            .filter(|e| e.occurs_on(day))
            .cloned()
            .collect();
        debug!("MemorySource: {} events on {}", events.len(), date);
        Ok(events)
    }
}
