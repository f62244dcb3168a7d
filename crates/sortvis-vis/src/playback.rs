//! Playback cursor over a recorded sort trace.

use serde::{Deserialize, Serialize};
use sortvis_core::{SortStep, Trace};

/// Current state of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// Playback has not started
    Stopped,
    /// Steps are being replayed
    Playing,
    /// Every step has been replayed
    Finished,
}

/// Forward-only cursor over a trace.
///
/// Steps come out strictly in the order the algorithm issued them; there is
/// no seeking, since every step mutates the live sequence.
pub struct Playback {
    trace: Trace,
    current_frame: usize,
    pauses_remaining: usize,
    state: PlaybackState,
}

impl Playback {
    /// Create a new playback controller.
    pub fn new(trace: Trace) -> Self {
        Self {
            pauses_remaining: trace.pause_count(),
            trace,
            current_frame: 0,
            state: PlaybackState::Stopped,
        }
    }

    /// Get the current frame number.
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Get the total number of frames.
    pub fn total_frames(&self) -> usize {
        self.trace.len()
    }

    /// Get the current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Start playback.
    pub fn play(&mut self) {
        self.state = if self.current_frame >= self.trace.len() {
            PlaybackState::Finished
        } else {
            PlaybackState::Playing
        };
    }

    /// Step forward one frame.
    pub fn step_forward(&mut self) -> Option<&SortStep> {
        let step = self.trace.steps().get(self.current_frame)?;
        self.current_frame += 1;
        if step.is_pause() {
            self.pauses_remaining -= 1;
        }
        if self.current_frame >= self.trace.len() {
            self.state = PlaybackState::Finished;
        }
        Some(step)
    }

    /// Pauses still ahead of the cursor.
    pub fn pauses_remaining(&self) -> usize {
        self.pauses_remaining
    }

    /// Calculate progress as percentage (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.trace.is_empty() {
            1.0
        } else {
            self.current_frame as f64 / self.trace.len() as f64
        }
    }
}

/// Playback status for sending to frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub current_frame: usize,
    pub total_frames: usize,
    pub state: PlaybackState,
    pub progress: f64,
    /// Delays still to sleep; times the step delay gives the time left
    pub pauses_remaining: usize,
}

impl From<&Playback> for PlaybackStatus {
    fn from(playback: &Playback) -> Self {
        Self {
            current_frame: playback.current_frame,
            total_frames: playback.total_frames(),
            state: playback.state,
            progress: playback.progress(),
            pauses_remaining: playback.pauses_remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortvis_core::{Algorithm, Sequence};

    fn make_trace(values: Vec<u32>) -> Trace {
        Algorithm::Bubble.trace(&Sequence::from(values)).unwrap()
    }

    #[test]
    fn playback_starts_at_zero() {
        let playback = Playback::new(make_trace(vec![2, 1]));
        assert_eq!(playback.current_frame(), 0);
        assert_eq!(playback.state(), PlaybackState::Stopped);
    }

    #[test]
    fn step_forward_advances_in_order() {
        let trace = make_trace(vec![3, 1, 2]);
        let expected = trace.steps().to_vec();
        let mut playback = Playback::new(trace);
        playback.play();

        let mut replayed = Vec::new();
        while let Some(step) = playback.step_forward() {
            replayed.push(*step);
        }
        assert_eq!(replayed, expected);
        assert_eq!(playback.current_frame(), expected.len());
    }

    #[test]
    fn step_forward_stops_at_end() {
        let mut playback = Playback::new(make_trace(vec![1]));
        playback.play();
        assert_eq!(playback.state(), PlaybackState::Playing);

        while playback.step_forward().is_some() {}
        assert_eq!(playback.state(), PlaybackState::Finished);
        assert!(playback.step_forward().is_none());
    }

    #[test]
    fn empty_trace_finishes_immediately() {
        let mut playback = Playback::new(make_trace(vec![]));
        playback.play();
        assert_eq!(playback.state(), PlaybackState::Finished);
        assert_eq!(playback.progress(), 1.0);
    }

    #[test]
    fn progress_and_pauses() {
        let trace = make_trace(vec![2, 1]);
        let pauses = trace.pause_count();
        let total = trace.len();
        let mut playback = Playback::new(trace);

        assert_eq!(playback.progress(), 0.0);
        assert_eq!(playback.pauses_remaining(), pauses);

        while playback.step_forward().is_some() {}
        assert_eq!(playback.progress(), 1.0);
        assert_eq!(playback.pauses_remaining(), 0);
        assert_eq!(playback.current_frame(), total);
    }

    #[test]
    fn status_conversion() {
        let mut playback = Playback::new(make_trace(vec![2, 1]));
        playback.play();
        playback.step_forward();

        let status: PlaybackStatus = (&playback).into();
        assert_eq!(status.current_frame, 1);
        assert_eq!(status.total_frames, playback.total_frames());
        assert_eq!(status.state, PlaybackState::Playing);
        assert_eq!(status.pauses_remaining, playback.pauses_remaining());
    }

    #[test]
    fn pauses_count_down_as_steps_replay() {
        let trace = make_trace(vec![4, 3, 2, 1]);
        let mut left = trace.pause_count();
        let mut playback = Playback::new(trace);
        playback.play();

        while let Some(step) = playback.step_forward().copied() {
            if step.is_pause() {
                left -= 1;
            }
            assert_eq!(playback.pauses_remaining(), left);
        }
        assert_eq!(left, 0);
    }
}
