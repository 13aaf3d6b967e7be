/// Clock collaborator supplying today's date
use chrono::Local;
use std::sync::Mutex;

use crate::calendar::CalendarDate;

/// Source of "today", abstracting over the system clock and fixed test clocks
pub trait Clock: Send + Sync {
    fn today(&self) -> CalendarDate;
}

/// Local-time system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from(Local::now().date_naive())
    }
}

/// Clock pinned to a date that tests can move forward
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<CalendarDate>,
}

impl FixedClock {
    pub fn new(today: CalendarDate) -> Self {
        Self { today: Mutex::new(today) }
    }

    pub fn set(&self, today: CalendarDate) {
        if let Ok(mut guard) = self.today.lock() {
            *guard = today;
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        match self.today.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
