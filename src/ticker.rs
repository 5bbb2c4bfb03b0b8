use chrono::{DateTime, Local, Timelike};
use crossbeam_channel::{unbounded, Receiver};
use std::thread;
use std::time::Duration;
use tracing::debug;

use crate::domain::Signal;

/// Seconds from `now` until the next minute boundary, never zero.
fn seconds_until_next_minute(now: &DateTime<Local>) -> u64 {
    60 - u64::from(now.second().min(59))
}

/// Spawn a thread that sends one time-tick signal at each minute boundary.
///
/// Stands in for the host platform's minute broadcast when running as a
/// standalone binary. The thread exits once the receiver is dropped.
pub fn minute_ticks() -> Receiver<Signal> {
    let (tx, rx) = unbounded();

    thread::spawn(move || loop {
        let wait = seconds_until_next_minute(&Local::now());
        debug!(seconds = wait, "Sleeping until next minute boundary");
        thread::sleep(Duration::from_secs(wait));

        if tx.send(Signal::time_tick()).is_err() {
            break;
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local_at_second(second: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 15, 10, 30, second).unwrap()
    }

    #[test]
    fn test_wait_from_start_of_minute_is_full_minute() {
        assert_eq!(seconds_until_next_minute(&local_at_second(0)), 60);
    }

    #[test]
    fn test_wait_shrinks_through_the_minute() {
        assert_eq!(seconds_until_next_minute(&local_at_second(1)), 59);
        assert_eq!(seconds_until_next_minute(&local_at_second(30)), 30);
        assert_eq!(seconds_until_next_minute(&local_at_second(59)), 1);
    }

    #[test]
    fn test_ticker_emits_tick_signals() {
        // Only checks wiring, not wall-clock pacing: the first send may be
        // up to a minute away, so just verify the channel stays open.
        let rx = minute_ticks();
        assert!(rx.try_recv().is_err());
    }
}
