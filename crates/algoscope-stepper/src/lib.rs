//! Algoscope Stepper
//!
//! Drives a lazy algorithm state sequence at a controlled tempo and pushes
//! each snapshot to subscribers.
//!
//! # Architecture
//!
//! - **Ticks**: the injectable tick source; a real `tokio` interval in
//!   production, hand-fired in tests so nothing waits on the wall clock
//! - **Stepper**: the `Idle -> Running -> (Completed | Idle)` state machine;
//!   one generator at a time, one snapshot pulled per tick
//! - **Frames**: snapshots tagged with a step counter, delivered over a
//!   `tokio::sync::watch` channel - late subscribers see the most recent
//!   frame immediately, slow subscribers only ever see the latest
//!
//! # Usage
//!
//! ```ignore
//! let stepper = Stepper::new();
//! let request = RunRequest::Dijkstra { graph, start: "A".into() };
//! stepper.start(request.generator()?, Ticks::every(DEFAULT_PERIOD))?;
//!
//! let mut frames = stepper.subscribe();
//! while frames.changed().await.is_ok() {
//!     render(frames.borrow().clone());
//! }
//! ```

mod error;
mod frame;
mod stepper;
mod ticks;

pub use error::{Error, Result};
pub use frame::{Phase, StepFrame, StepperStatus};
pub use stepper::Stepper;
pub use ticks::{TickHandle, Ticks, DEFAULT_PERIOD};
