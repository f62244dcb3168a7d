//! The instrumented sorting algorithms.
//!
//! Every algorithm sorts in place through a [`Tracer`] and shares one visual
//! protocol:
//! - a comparison is bracketed by `mark_compare` / `unmark_compare` with one
//!   pause in between
//! - `swap` and `set` each pause once after writing
//! - every index ends up marked sorted
//!
//! Empty and single-element inputs finish at once with everything marked.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SortError};
use crate::sequence::Sequence;
use crate::trace::{Trace, Tracer};

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use radix::radix_sort;
pub use selection::selection_sort;

/// Selectable sorting algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Heap,
    Merge,
    Quick,
    Radix,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Radix,
    ];

    /// Lower-case key used by controls and the wire format.
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Heap => "heap",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Radix => "radix",
        }
    }

    /// Sort `sequence` and return the recorded steps.
    ///
    /// The input is left untouched; the result lives in [`Trace::sorted`].
    pub fn trace(&self, sequence: &Sequence) -> Result<Trace> {
        let mut tracer = Tracer::new(sequence);
        match self {
            Algorithm::Bubble => bubble_sort(&mut tracer)?,
            Algorithm::Insertion => insertion_sort(&mut tracer)?,
            Algorithm::Selection => selection_sort(&mut tracer)?,
            Algorithm::Heap => heap_sort(&mut tracer)?,
            Algorithm::Merge => merge_sort(&mut tracer)?,
            Algorithm::Quick => quick_sort(&mut tracer)?,
            Algorithm::Radix => radix_sort(&mut tracer)?,
        }
        Ok(tracer.finish())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}
