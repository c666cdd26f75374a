//! Delivered frames and status reporting.

use algoscope_steps::AlgorithmState;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No generator attached.
    Idle,
    /// A generator is attached and advancing on ticks.
    Running,
    /// The generator ran to exhaustion. Terminal until the next start.
    Completed,
}

/// One delivered snapshot, tagged with a monotonically increasing step
/// counter. Step 0 is the generator's initialization state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepFrame {
    pub step: u64,
    pub state: AlgorithmState,
}

/// Stepper status for a presentation adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepperStatus {
    pub phase: Phase,
    pub step: u64,
}
