//! Injectable tick sources.
//!
//! The stepper never talks to a clock directly; it pulls from a [`Ticks`]
//! stream. Production code uses [`Ticks::every`] (a tokio interval task),
//! tests use [`Ticks::manual`] and fire ticks by hand, so engine behavior
//! is verifiable without wall-clock waiting.

use std::time::Duration;

use tokio::sync::mpsc;

/// Default advancement period, matching the visual animation cadence.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(500);

/// A stream of advancement ticks consumed by the stepper.
#[derive(Debug)]
pub struct Ticks {
    rx: mpsc::Receiver<()>,
}

impl Ticks {
    /// Ticks fired every `period` by a background task. The first tick
    /// fires one full period after the run starts, so the initialization
    /// state stays visible for a whole frame.
    pub fn every(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // completes immediately; skip it
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break; // stepper dropped the stream
                }
            }
        });
        Self { rx }
    }

    /// A hand-driven tick stream for tests.
    pub fn manual() -> (TickHandle, Self) {
        let (tx, rx) = mpsc::channel(16);
        (TickHandle { tx }, Self { rx })
    }

    /// Wait for the next tick. `None` when the source is gone.
    pub(crate) async fn next(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}

/// Sender half of a manual tick stream.
#[derive(Debug, Clone)]
pub struct TickHandle {
    tx: mpsc::Sender<()>,
}

impl TickHandle {
    /// Fire one tick. Ignored if the consuming stepper is gone.
    pub async fn tick(&self) {
        let _ = self.tx.send(()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn manual_ticks_arrive_in_order() {
        let (handle, mut ticks) = Ticks::manual();
        handle.tick().await;
        handle.tick().await;

        assert_eq!(ticks.next().await, Some(()));
        assert_eq!(ticks.next().await, Some(()));
    }

    #[tokio::test]
    async fn dropped_handle_ends_the_stream() {
        let (handle, mut ticks) = Ticks::manual();
        drop(handle);
        assert_eq!(ticks.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn interval_ticks_fire_once_per_period() {
        let mut ticks = Ticks::every(Duration::from_millis(100));

        // Nothing before the first period elapses.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(ticks.rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(ticks.next().await, Some(()));
    }
}
