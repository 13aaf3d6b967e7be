use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::calendar::CalendarDate;
use crate::clock::Clock;

/// How often the clock is checked for a day rollover
pub const DAY_CHECK_INTERVAL: Duration = Duration::from_secs(30);

/// Watch the clock and send the new date whenever the day changes
///
/// Runs until the receiving side is dropped. `last_seen` is the date the
/// caller already shows, so no message is sent for it.
pub async fn watch_day_changes(
    clock: Arc<dyn Clock>,
    mut last_seen: CalendarDate,
    check_interval: Duration,
    day_tx: mpsc::UnboundedSender<CalendarDate>,
) {
    let mut interval = tokio::time::interval(check_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        if day_tx.is_closed() {
            debug!("CLOCK: receiver dropped, stopping day watcher");
            break;
        }

        let today = clock.today();
        if today != last_seen {
            info!("CLOCK: day changed {} -> {}", last_seen, today);
            last_seen = today;
            if day_tx.send(today).is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[tokio::test]
    async fn test_sends_new_day_once() {
        let start = CalendarDate::new(2026, 10, 19).unwrap();
        let next = CalendarDate::new(2026, 10, 20).unwrap();
        let clock = Arc::new(FixedClock::new(start));
        let (tx, mut rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(watch_day_changes(
            clock.clone(),
            start,
            Duration::from_millis(5),
            tx,
        ));

        clock.set(next);
        let received = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap();
        assert_eq!(received, Some(next));

        // No repeat for the same day
        let repeat = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
        assert!(repeat.is_err());

        drop(rx);
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .unwrap()
            .unwrap();
    }
}
