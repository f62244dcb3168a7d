//! The array under sort and its random generator.

use rand::Rng;

use crate::error::{Result, SortError};

/// A single array element.
pub type Value = u32;

/// Smallest generated value.
pub const MIN_VALUE: Value = 5;

/// Largest generated value. Doubles as the 100 % bar height.
pub const MAX_VALUE: Value = 100;

/// Fixed-length, index-addressable array of values.
///
/// Length never changes once built; all writes go through checked accessors
/// so a bad index surfaces as [`SortError::OutOfBounds`] instead of a panic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence(Vec<Value>);

impl Sequence {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the values in index order.
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    /// Read the value at `index`.
    pub fn get(&self, index: usize) -> Result<Value> {
        self.0.get(index).copied().ok_or(SortError::OutOfBounds {
            index,
            len: self.0.len(),
        })
    }

    /// Overwrite the value at `index`.
    pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
        let len = self.0.len();
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SortError::OutOfBounds { index, len }),
        }
    }

    /// Exchange the values at `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.check(i)?;
        self.check(j)?;
        self.0.swap(i, j);
        Ok(())
    }

    /// Whether the values are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }

    /// Largest value, if any.
    pub fn max(&self) -> Option<Value> {
        self.0.iter().copied().max()
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.0.len() {
            Ok(())
        } else {
            Err(SortError::OutOfBounds {
                index,
                len: self.0.len(),
            })
        }
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

/// Generate `len` values drawn uniformly from `[MIN_VALUE, MAX_VALUE]`.
pub fn generate<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Sequence {
    Sequence((0..len).map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE)).collect())
}
