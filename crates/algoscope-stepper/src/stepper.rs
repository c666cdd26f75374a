//! The tick-driven run state machine.

use std::sync::{Arc, Mutex, MutexGuard};

use algoscope_steps::StateIter;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::{Error, Result};
use crate::frame::{Phase, StepFrame, StepperStatus};
use crate::ticks::Ticks;

struct Shared {
    phase: Phase,
    step: u64,
    /// Run generation. Bumped on every start and reset; a drive task only
    /// publishes while its own generation is current, which is what makes
    /// reset immediate - a tick that already fired can never deliver a
    /// ghost frame afterwards.
    run: u64,
    task: Option<JoinHandle<()>>,
}

/// Replays one algorithm state sequence at a controlled tempo.
///
/// State machine: `Idle -> Running -> (Completed | Idle)`. One generator is
/// attached at a time; independent steppers share nothing and may run
/// concurrently. Frames go out over a `watch` channel: a subscriber that
/// attaches mid-run reads the most recent frame immediately, and one that
/// cannot keep up with the cadence only ever observes the latest frame.
pub struct Stepper {
    frames: watch::Sender<Option<StepFrame>>,
    shared: Arc<Mutex<Shared>>,
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new()
    }
}

impl Stepper {
    /// Create an idle stepper.
    pub fn new() -> Self {
        let (frames, _) = watch::channel(None);
        Self {
            frames,
            shared: Arc::new(Mutex::new(Shared {
                phase: Phase::Idle,
                step: 0,
                run: 0,
                task: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().expect("stepper state lock poisoned")
    }

    /// Attach a generator and begin tick-driven advancement.
    ///
    /// The generator's first snapshot (its initialization state) is
    /// published before this returns; each subsequent tick publishes one
    /// more until exhaustion moves the stepper to [`Phase::Completed`].
    /// Fails with [`Error::AlreadyRunning`] while a run is attached;
    /// starting over from `Completed` is allowed.
    pub fn start(&self, mut generator: StateIter, mut ticks: Ticks) -> Result<()> {
        let mut shared = self.lock();
        if shared.phase == Phase::Running {
            return Err(Error::AlreadyRunning);
        }
        shared.run += 1;
        shared.step = 0;
        let run = shared.run;

        let Some(first) = generator.next() else {
            // Empty sequence: nothing to animate, complete on the spot.
            shared.phase = Phase::Completed;
            return Ok(());
        };
        shared.phase = Phase::Running;
        self.frames.send_replace(Some(StepFrame {
            step: 0,
            state: first,
        }));
        tracing::debug!(run, "run started");

        let frames = self.frames.clone();
        let state = Arc::clone(&self.shared);
        shared.task = Some(tokio::spawn(async move {
            loop {
                if ticks.next().await.is_none() {
                    tracing::debug!(run, "tick source closed; run stalled until reset");
                    return;
                }
                let mut shared = state.lock().expect("stepper state lock poisoned");
                if shared.run != run {
                    return; // reset raced this tick
                }
                match generator.next() {
                    Some(snapshot) => {
                        shared.step += 1;
                        frames.send_replace(Some(StepFrame {
                            step: shared.step,
                            state: snapshot,
                        }));
                    }
                    None => {
                        shared.phase = Phase::Completed;
                        tracing::debug!(run, steps = shared.step, "run completed");
                        return;
                    }
                }
            }
        }));
        Ok(())
    }

    /// Discard the attached generator and return to [`Phase::Idle`].
    ///
    /// Immediate: after this returns, no frame from the discarded run can
    /// be observed, even if an advancement tick had already fired. The
    /// idle frame (`None`) is published so subscribers see the teardown;
    /// re-supplying the pre-run display state is the caller's job.
    pub fn reset(&self) {
        let task = {
            let mut shared = self.lock();
            shared.run += 1;
            shared.phase = Phase::Idle;
            shared.step = 0;
            self.frames.send_replace(None);
            shared.task.take()
        };
        if let Some(task) = task {
            task.abort();
        }
        tracing::debug!("stepper reset to idle");
    }

    /// Whether a run is currently attached and advancing.
    pub fn is_running(&self) -> bool {
        self.lock().phase == Phase::Running
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.lock().phase
    }

    /// Step counter of the most recent frame; 0 when idle.
    pub fn current_step(&self) -> u64 {
        self.lock().step
    }

    /// Status snapshot for a presentation adapter.
    pub fn status(&self) -> StepperStatus {
        let shared = self.lock();
        StepperStatus {
            phase: shared.phase,
            step: shared.step,
        }
    }

    /// Subscribe to frame delivery. The current frame is readable at once
    /// via `borrow`; `changed().await` waits for the next one.
    pub fn subscribe(&self) -> watch::Receiver<Option<StepFrame>> {
        self.frames.subscribe()
    }

    /// The most recent frame, if a run has published one.
    pub fn current_frame(&self) -> Option<StepFrame> {
        self.frames.borrow().clone()
    }
}

impl Drop for Stepper {
    fn drop(&mut self) {
        if let Ok(mut shared) = self.shared.lock() {
            if let Some(task) = shared.task.take() {
                task.abort();
            }
        }
    }
}
