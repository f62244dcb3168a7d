//! Sortvis Core
//!
//! Instrumented sorting algorithms over a bar-chart model of an array.
//!
//! # Model
//!
//! - **Sequence**: the array being sorted, values bounded to `[5, 100]`
//! - **Pacing**: one slider value drives both array length and step delay
//! - **Render Surface**: bars whose height follows the value, plus transient
//!   "comparing" and persistent "sorted" marks
//! - **Trace**: every algorithm runs against a [`Tracer`] and leaves behind an
//!   ordered list of [`SortStep`]s. A host replays the steps one by one onto a
//!   surface, sleeping on every [`SortStep::Pause`].
//!
//! The crate is synchronous. Suspension happens only where a trace says
//! `Pause`, so any host scheduler can drive it.
//!
//! # Example
//!
//! ```
//! use sortvis_core::{Algorithm, BarChart, RenderSurface, Sequence};
//!
//! let mut sequence = Sequence::from(vec![5, 3, 8, 1]);
//! let mut chart = BarChart::new(400);
//! chart.rebuild(sequence.values());
//!
//! let trace = Algorithm::Bubble.trace(&sequence).unwrap();
//! for step in trace.steps() {
//!     step.apply(&mut sequence, &mut chart).unwrap();
//! }
//! assert_eq!(sequence.values(), &[1, 3, 5, 8]);
//! assert!(chart.bars().iter().all(|bar| bar.is_sorted()));
//! ```

mod error;
mod pacing;
mod sequence;
mod surface;
mod trace;
pub mod algorithms;

pub use algorithms::Algorithm;
pub use error::{Result, SortError};
pub use pacing::{
    pacing_parameter_to_delay_ms, pacing_parameter_to_length, PacingParameter, MAX_DELAY_MS,
    MAX_LENGTH, MAX_PARAMETER, MIN_DELAY_MS, MIN_LENGTH, MIN_PARAMETER,
};
pub use sequence::{generate, Sequence, Value, MAX_VALUE, MIN_VALUE};
pub use surface::{bar_width, Bar, BarChart, Marks, RenderSurface, BAR_GAP, MIN_BAR_WIDTH};
pub use trace::{SortStep, Trace, Tracer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_sorts_the_scenario_input() {
        for algorithm in Algorithm::ALL {
            let trace = algorithm.trace(&Sequence::from(vec![5, 3, 8, 1])).unwrap();
            assert_eq!(trace.sorted(), &[1, 3, 5, 8], "{algorithm} left input unsorted");
        }
    }

    #[test]
    fn replay_matches_traced_result() {
        for algorithm in Algorithm::ALL {
            let mut sequence = Sequence::from(vec![42, 7, 99, 7, 13, 64, 5]);
            let mut chart = BarChart::new(300);
            chart.rebuild(sequence.values());

            let trace = algorithm.trace(&sequence).unwrap();
            for step in trace.steps() {
                step.apply(&mut sequence, &mut chart).unwrap();
            }

            assert_eq!(sequence.values(), trace.sorted());
            let shown: Vec<Value> = chart.bars().iter().map(|b| b.value).collect();
            assert_eq!(shown, trace.sorted(), "{algorithm} chart diverged from sequence");
            assert!(chart.bars().iter().all(|b| b.is_sorted() && !b.is_comparing()));
        }
    }
}
