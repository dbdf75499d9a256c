use std::{
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use crate::error::TowerError;
use crate::TICK_FREQUENCY_MILLIS;

/// Periodic tick source owned by a single takeoff of a single flight.
///
/// The tick thread sleeps one tick period, then increments the elapsed count
/// and runs the callback with the running total. Stopping the ticker ends the
/// thread after the sleep in progress; a stopped ticker never ticks again.
pub struct FlightTicker {
    elapsed_ticks: AtomicU64,
    running: AtomicBool,
}

impl FlightTicker {
    /// Creates a fresh ticker with zero elapsed ticks.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            elapsed_ticks: AtomicU64::new(0),
            running: AtomicBool::new(true),
        })
    }

    /// Ticks counted since the ticker was started.
    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks.load(Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stops the ticker. Stopping twice is harmless.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Starts the tick thread and executes the callback on each tick.
    pub fn start(
        self: Arc<Self>,
        name: &str,
        tick_callback: impl Fn(u64) + Send + 'static,
    ) -> Result<(), TowerError> {
        thread::Builder::new()
            .name(format!("ticker-{}", name))
            .spawn(move || {
                while self.running.load(Ordering::SeqCst) {
                    thread::sleep(Duration::from_millis(TICK_FREQUENCY_MILLIS));

                    // A stop during the sleep must not produce a late tick.
                    if !self.running.load(Ordering::SeqCst) {
                        break;
                    }

                    let elapsed = self.elapsed_ticks.fetch_add(1, Ordering::SeqCst) + 1;
                    tick_callback(elapsed);
                }
            })
            .map_err(|_| {
                TowerError::TickerStart("Failed to spawn the tick thread.".to_string())
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    #[test]
    fn ticks_accumulate_while_running() {
        let ticker = FlightTicker::new();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);

        Arc::clone(&ticker)
            .start("test", move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .expect("ticker should start");

        std::thread::sleep(Duration::from_millis(2500));
        let ticked = count.load(Ordering::SeqCst);
        assert!((1..=3).contains(&ticked), "expected ~2 ticks, got {}", ticked);
        assert_eq!(ticker.elapsed_ticks() as usize, ticked);

        ticker.stop();
    }

    #[test]
    fn stop_ends_the_tick_stream() {
        let ticker = FlightTicker::new();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);

        Arc::clone(&ticker)
            .start("stop-test", move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .expect("ticker should start");

        ticker.stop();
        std::thread::sleep(Duration::from_millis(200));
        let after_stop = count.load(Ordering::SeqCst);

        std::thread::sleep(Duration::from_millis(1500));
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
        assert!(!ticker.is_running());
    }
}
