//! Step traces: the resumable form of an animated sort.
//!
//! An algorithm never touches a surface directly. It drives a [`Tracer`],
//! which sorts a private working copy and records each visual operation as a
//! [`SortStep`]. The host later replays the steps in order, sleeping on every
//! [`SortStep::Pause`]. Replay of the full trace leaves the host's sequence
//! equal to [`Trace::sorted`].

use crate::error::{Result, SortError};
use crate::sequence::{Sequence, Value};
use crate::surface::RenderSurface;

/// One visual operation issued by an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum SortStep {
    /// Two indices are about to be compared
    MarkCompare { i: usize, j: usize },
    /// The comparison of two indices is over
    UnmarkCompare { i: usize, j: usize },
    /// A single value was written
    Set { index: usize, value: Value },
    /// Two values were exchanged
    Swap { i: usize, j: usize },
    /// An index holds its final value
    MarkSorted { index: usize },
    /// Wait one pacing delay
    Pause,
}

impl SortStep {
    /// Whether the host should sleep after this step.
    pub fn is_pause(&self) -> bool {
        matches!(self, SortStep::Pause)
    }

    /// Replay this step onto the host's sequence and surface.
    ///
    /// Writes are checked against the sequence; a bad index fails before the
    /// surface is touched.
    pub fn apply<S>(&self, sequence: &mut Sequence, surface: &mut S) -> Result<()>
    where
        S: RenderSurface + ?Sized,
    {
        match *self {
            SortStep::MarkCompare { i, j } => surface.mark_compare(i, j),
            SortStep::UnmarkCompare { i, j } => surface.unmark_compare(i, j),
            SortStep::Set { index, value } => {
                sequence.set(index, value)?;
                surface.set_value(index, value);
            }
            SortStep::Swap { i, j } => {
                sequence.swap(i, j)?;
                surface.set_value(i, sequence.get(i)?);
                surface.set_value(j, sequence.get(j)?);
            }
            SortStep::MarkSorted { index } => surface.mark_sorted(index),
            SortStep::Pause => {}
        }
        Ok(())
    }
}

/// A finished recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<SortStep>,
    sorted: Sequence,
}

impl Trace {
    pub fn steps(&self) -> &[SortStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The sequence as it stands once every step has been replayed.
    pub fn sorted(&self) -> &[Value] {
        self.sorted.values()
    }

    /// Number of pacing delays a full replay waits through.
    pub fn pause_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_pause()).count()
    }
}

/// Recorder handed to every algorithm.
#[derive(Debug)]
pub struct Tracer {
    working: Sequence,
    steps: Vec<SortStep>,
}

impl Tracer {
    /// Start recording against a copy of `sequence`.
    pub fn new(sequence: &Sequence) -> Self {
        Self {
            working: sequence.clone(),
            steps: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// The working copy as it currently stands.
    pub fn values(&self) -> &[Value] {
        self.working.values()
    }

    /// Current value at `index` in the working copy.
    pub fn value(&self, index: usize) -> Result<Value> {
        self.working.get(index)
    }

    /// Largest value in the working copy.
    pub fn max(&self) -> Option<Value> {
        self.working.max()
    }

    pub fn mark_compare(&mut self, i: usize, j: usize) -> Result<()> {
        self.check(i)?;
        self.check(j)?;
        self.steps.push(SortStep::MarkCompare { i, j });
        Ok(())
    }

    pub fn unmark_compare(&mut self, i: usize, j: usize) -> Result<()> {
        self.check(i)?;
        self.check(j)?;
        self.steps.push(SortStep::UnmarkCompare { i, j });
        Ok(())
    }

    /// Record one pacing delay.
    pub fn pause(&mut self) {
        self.steps.push(SortStep::Pause);
    }

    /// Exchange two values, then pause.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.working.swap(i, j)?;
        self.steps.push(SortStep::Swap { i, j });
        self.pause();
        Ok(())
    }

    /// Write one value, then pause.
    pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
        self.write(index, value)?;
        self.pause();
        Ok(())
    }

    /// Write one value without pausing.
    pub fn write(&mut self, index: usize, value: Value) -> Result<()> {
        self.working.set(index, value)?;
        self.steps.push(SortStep::Set { index, value });
        Ok(())
    }

    pub fn mark_sorted(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        self.steps.push(SortStep::MarkSorted { index });
        Ok(())
    }

    /// Mark every index sorted, lowest first.
    pub fn mark_all_sorted(&mut self) {
        let len = self.working.len();
        self.steps
            .extend((0..len).map(|index| SortStep::MarkSorted { index }));
    }

    pub fn finish(self) -> Trace {
        Trace {
            steps: self.steps,
            sorted: self.working,
        }
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.working.len() {
            Ok(())
        } else {
            Err(SortError::OutOfBounds {
                index,
                len: self.working.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::BarChart;

    #[test]
    fn swap_and_set_pause_but_write_does_not() {
        let mut tracer = Tracer::new(&Sequence::from(vec![1, 2, 3]));
        tracer.swap(0, 2).unwrap();
        tracer.set(1, 9).unwrap();
        tracer.write(0, 4).unwrap();

        let trace = tracer.finish();
        assert_eq!(
            trace.steps(),
            &[
                SortStep::Swap { i: 0, j: 2 },
                SortStep::Pause,
                SortStep::Set { index: 1, value: 9 },
                SortStep::Pause,
                SortStep::Set { index: 0, value: 4 },
            ]
        );
        assert_eq!(trace.sorted(), &[4, 9, 1]);
        assert_eq!(trace.pause_count(), 2);
    }

    #[test]
    fn out_of_bounds_is_a_fault() {
        let mut tracer = Tracer::new(&Sequence::from(vec![1, 2]));
        assert_eq!(
            tracer.mark_compare(0, 2),
            Err(SortError::OutOfBounds { index: 2, len: 2 })
        );
        assert!(tracer.swap(5, 0).is_err());
        assert!(tracer.mark_sorted(2).is_err());
        assert!(tracer.finish().is_empty());
    }

    #[test]
    fn apply_mirrors_writes_onto_surface() {
        let mut seq = Sequence::from(vec![3, 1]);
        let mut chart = BarChart::new(100);
        chart.rebuild(seq.values());

        SortStep::MarkCompare { i: 0, j: 1 }
            .apply(&mut seq, &mut chart)
            .unwrap();
        assert_eq!(chart.comparing(), vec![0, 1]);

        SortStep::Swap { i: 0, j: 1 }.apply(&mut seq, &mut chart).unwrap();
        assert_eq!(seq.values(), &[1, 3]);
        assert_eq!(chart.bars()[0].value, 1);
        assert_eq!(chart.bars()[1].value, 3);

        SortStep::UnmarkCompare { i: 0, j: 1 }
            .apply(&mut seq, &mut chart)
            .unwrap();
        assert!(chart.comparing().is_empty());
    }

    #[test]
    fn apply_rejects_bad_write_before_touching_surface() {
        let mut seq = Sequence::from(vec![3, 1]);
        let mut chart = BarChart::new(100);
        chart.rebuild(seq.values());

        let result = SortStep::Set { index: 2, value: 7 }.apply(&mut seq, &mut chart);
        assert_eq!(result, Err(SortError::OutOfBounds { index: 2, len: 2 }));
        assert_eq!(seq.values(), &[3, 1]);
    }

    #[test]
    fn mark_all_sorted_ascends() {
        let mut tracer = Tracer::new(&Sequence::from(vec![1, 2, 3]));
        tracer.mark_all_sorted();
        let indices: Vec<_> = tracer
            .finish()
            .steps()
            .iter()
            .map(|s| match s {
                SortStep::MarkSorted { index } => *index,
                other => panic!("unexpected step {other:?}"),
            })
            .collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn step_serialization() {
        let json = serde_json::to_string(&SortStep::Set { index: 3, value: 42 }).unwrap();
        assert_eq!(json, r#"{"type":"set","index":3,"value":42}"#);

        let parsed: SortStep = serde_json::from_str(r#"{"type":"pause"}"#).unwrap();
        assert!(parsed.is_pause());
    }
}
