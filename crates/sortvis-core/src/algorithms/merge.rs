use crate::error::{Result, SortError};
use crate::sequence::Value;
use crate::trace::Tracer;

/// Top-down merge sort on inclusive ranges, split at the floor midpoint.
/// Everything is marked sorted only after the outermost merge.
pub fn merge_sort(t: &mut Tracer) -> Result<()> {
    if t.len() > 1 {
        sort_range(t, 0, t.len() - 1)?;
    }
    t.mark_all_sorted();
    Ok(())
}

fn sort_range(t: &mut Tracer, lo: usize, hi: usize) -> Result<()> {
    if lo >= hi {
        return Ok(());
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(t, lo, mid)?;
    sort_range(t, mid + 1, hi)?;
    merge(t, lo, mid, hi)
}

/// Merge `[lo, mid]` and `[mid + 1, hi]`. Ties take the left run first.
fn merge(t: &mut Tracer, lo: usize, mid: usize, hi: usize) -> Result<()> {
    let left = copy_run(t, lo, mid)?;
    let right = copy_run(t, mid + 1, hi)?;
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        t.mark_compare(lo + i, mid + 1 + j)?;
        t.pause();
        t.unmark_compare(lo + i, mid + 1 + j)?;

        if left[i] <= right[j] {
            t.write(k, left[i])?;
            i += 1;
        } else {
            t.write(k, right[j])?;
            j += 1;
        }
        k += 1;
        t.pause();
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        t.set(k, value)?;
        k += 1;
    }
    Ok(())
}

fn copy_run(t: &Tracer, from: usize, to: usize) -> Result<Vec<Value>> {
    t.values()
        .get(from..=to)
        .map(<[Value]>::to_vec)
        .ok_or(SortError::OutOfBounds {
            index: to,
            len: t.len(),
        })
}
