//! Single-flight run controller.
//!
//! Owns the sequence, the render surface and the pacing parameter. At most
//! one sort runs at a time: the Idle/Running check and the switch to Running
//! happen under the same write lock, so a second request either sees the run
//! or wins the race outright. Regenerate, pacing and resize requests are
//! refused while a run is in flight, and no request can cancel one.
//!
//! A run always ends back in Idle with controls re-enabled. Faults, whether
//! an error from the algorithm or a panic during replay, are logged and
//! swallowed.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use sortvis_core::{generate, Algorithm, PacingParameter, RenderSurface, Sequence, Trace};
use tokio::sync::{RwLock, RwLockReadGuard};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::playback::{Playback, PlaybackStatus};

/// Answer to a control request.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Admission {
    /// The request was carried out
    Accepted,
    /// A run is in progress; the request was dropped
    Busy,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    Completed,
    Faulted,
}

/// Controller lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunPhase {
    Idle,
    Running(Algorithm),
}

/// Everything a run mutates. Only the active run writes here while Running.
pub struct ControllerState<S> {
    sequence: Sequence,
    surface: S,
    pacing: PacingParameter,
    rng: StdRng,
    phase: RunPhase,
    playback: Option<PlaybackStatus>,
    last_outcome: Option<RunOutcome>,
}

impl<S: RenderSurface> ControllerState<S> {
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn is_running(&self) -> bool {
        matches!(self.phase, RunPhase::Running(_))
    }

    fn regenerate(&mut self) {
        let len = self.pacing.length();
        self.sequence = generate(len, &mut self.rng);
        self.surface.rebuild(self.sequence.values());
        self.playback = None;
    }
}

/// Point-in-time view of the controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStatus {
    pub running: bool,
    pub algorithm: Option<Algorithm>,
    pub pacing: PacingParameter,
    pub length: usize,
    pub delay_ms: u64,
    pub playback: Option<PlaybackStatus>,
    pub last_outcome: Option<RunOutcome>,
}

/// Handle to an in-flight run.
pub struct RunHandle {
    algorithm: Algorithm,
    task: JoinHandle<RunOutcome>,
}

impl RunHandle {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Wait for the run to end and controls to be restored.
    pub async fn finished(self) -> RunOutcome {
        self.task.await.unwrap_or(RunOutcome::Faulted)
    }
}

/// Shared, cloneable run controller.
pub struct RunController<S> {
    state: Arc<RwLock<ControllerState<S>>>,
}

impl<S> Clone for RunController<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<S> RunController<S>
where
    S: RenderSurface + Send + Sync + 'static,
{
    /// Create a controller and draw the first array onto `surface`.
    pub fn new(surface: S, pacing: PacingParameter, rng: StdRng) -> Self {
        let mut state = ControllerState {
            sequence: Sequence::default(),
            surface,
            pacing,
            rng,
            phase: RunPhase::Idle,
            playback: None,
            last_outcome: None,
        };
        state.regenerate();
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Start sorting with `algorithm`.
    ///
    /// Returns `None`, and changes nothing, if a run is already active.
    pub async fn new_run(&self, algorithm: Algorithm) -> Option<RunHandle> {
        let (trace, delay) = {
            let mut state = self.state.write().await;
            if let RunPhase::Running(active) = state.phase {
                debug!(%algorithm, %active, "run already in progress, ignoring request");
                return None;
            }
            state.phase = RunPhase::Running(algorithm);
            state.surface.set_controls_enabled(false);
            state.surface.clear_marks();
            let delay = state.pacing.delay();
            (algorithm.trace(&state.sequence), delay)
        };

        info!(%algorithm, ?delay, "starting sort run");
        let state = Arc::clone(&self.state);
        let task = tokio::spawn(async move {
            // Replay in its own task so a panic surfaces here as a JoinError
            let replay = tokio::spawn(replay(Arc::clone(&state), trace, delay));
            let outcome = match replay.await {
                Ok(Ok(())) => {
                    info!(%algorithm, "sort run completed");
                    RunOutcome::Completed
                }
                Ok(Err(e)) => {
                    error!(%algorithm, error = %e, "sort run faulted");
                    RunOutcome::Faulted
                }
                Err(e) => {
                    error!(%algorithm, error = %e, "sort run panicked");
                    RunOutcome::Faulted
                }
            };

            let mut state = state.write().await;
            state.phase = RunPhase::Idle;
            state.last_outcome = Some(outcome);
            state.surface.set_controls_enabled(true);
            outcome
        });

        Some(RunHandle { algorithm, task })
    }

    /// Replace the array with a fresh random one.
    pub async fn regenerate(&self) -> Admission {
        let mut state = self.state.write().await;
        if state.is_running() {
            debug!("run in progress, ignoring regenerate");
            return Admission::Busy;
        }
        state.regenerate();
        Admission::Accepted
    }

    /// Move the slider. Regenerates the array at the new length.
    pub async fn set_pacing(&self, pacing: PacingParameter) -> Admission {
        let mut state = self.state.write().await;
        if state.is_running() {
            debug!(pacing = pacing.value(), "run in progress, ignoring pacing change");
            return Admission::Busy;
        }
        state.pacing = pacing;
        state.regenerate();
        Admission::Accepted
    }

    /// Reflow bar widths for a new container width.
    pub async fn on_resize(&self, container_width: u32) -> Admission {
        let mut state = self.state.write().await;
        if state.is_running() {
            debug!(container_width, "run in progress, ignoring resize");
            return Admission::Busy;
        }
        state.surface.reflow(container_width);
        Admission::Accepted
    }

    pub async fn is_running(&self) -> bool {
        self.state.read().await.is_running()
    }

    /// Copy of the current sequence.
    pub async fn sequence(&self) -> Sequence {
        self.state.read().await.sequence.clone()
    }

    /// Read access to the sequence and surface.
    pub async fn read(&self) -> RwLockReadGuard<'_, ControllerState<S>> {
        self.state.read().await
    }

    pub async fn status(&self) -> RunStatus {
        let state = self.state.read().await;
        let algorithm = match state.phase {
            RunPhase::Running(algorithm) => Some(algorithm),
            RunPhase::Idle => None,
        };
        RunStatus {
            running: algorithm.is_some(),
            algorithm,
            pacing: state.pacing,
            length: state.sequence.len(),
            delay_ms: state.pacing.delay_ms(),
            playback: state.playback.clone(),
            last_outcome: state.last_outcome,
        }
    }
}

/// Apply each traced step to the live sequence and surface, sleeping one
/// pacing delay on every pause. The lock is never held across a sleep.
async fn replay<S: RenderSurface>(
    state: Arc<RwLock<ControllerState<S>>>,
    trace: sortvis_core::Result<Trace>,
    delay: Duration,
) -> sortvis_core::Result<()> {
    let mut playback = Playback::new(trace?);
    playback.play();

    while let Some(step) = playback.step_forward().copied() {
        {
            let mut guard = state.write().await;
            let ControllerState {
                sequence, surface, ..
            } = &mut *guard;
            step.apply(sequence, surface)?;
            guard.playback = Some(PlaybackStatus::from(&playback));
        }
        if step.is_pause() {
            tokio::time::sleep(delay).await;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use sortvis_core::BarChart;

    fn controller(pacing: u8) -> RunController<BarChart> {
        RunController::new(
            BarChart::new(600),
            PacingParameter::new(pacing),
            StdRng::seed_from_u64(5),
        )
    }

    #[tokio::test]
    async fn construction_draws_initial_array() {
        let controller = controller(1);
        let state = controller.read().await;
        assert_eq!(state.sequence().len(), 10);
        assert_eq!(state.surface().len(), 10);
        assert!(!state.is_running());
    }

    #[tokio::test]
    async fn pacing_change_regenerates_at_new_length() {
        let controller = controller(1);
        assert_eq!(
            controller.set_pacing(PacingParameter::new(100)).await,
            Admission::Accepted
        );
        let status = controller.status().await;
        assert_eq!(status.length, 80);
        assert_eq!(status.delay_ms, 3);
        assert_eq!(controller.read().await.surface().len(), 80);
    }

    #[tokio::test]
    async fn resize_keeps_values() {
        let controller = controller(1);
        let before = controller.sequence().await;
        assert_eq!(controller.on_resize(300).await, Admission::Accepted);
        let state = controller.read().await;
        assert_eq!(state.sequence(), &before);
        assert_eq!(state.surface().container_width(), 300);
    }

    #[tokio::test(start_paused = true)]
    async fn run_sorts_and_restores_idle() {
        let controller = controller(100);
        let handle = controller.new_run(Algorithm::Heap).await.unwrap();
        assert_eq!(handle.algorithm(), Algorithm::Heap);
        assert!(controller.is_running().await);

        assert_eq!(handle.finished().await, RunOutcome::Completed);
        assert!(!controller.is_running().await);

        let state = controller.read().await;
        assert!(state.sequence().is_sorted());
        assert_eq!(state.surface().sorted().len(), state.sequence().len());
    }
}
