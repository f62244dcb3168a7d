use crate::error::Result;
use crate::trace::Tracer;

/// Lomuto quicksort with the last element as pivot.
pub fn quick_sort(t: &mut Tracer) -> Result<()> {
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
    let p = partition(t, lo, hi)?;
    if p > lo {
        sort_range(t, lo, p - 1)?;
    }
    sort_range(t, p + 1, hi)
}

/// Move everything `<= pivot` in front of the boundary, then drop the pivot
/// right after it. Returns the pivot's final index.
fn partition(t: &mut Tracer, lo: usize, hi: usize) -> Result<usize> {
    let pivot = t.value(hi)?;
    let mut boundary = lo;
    for j in lo..hi {
        t.mark_compare(j, hi)?;
        t.pause();
        t.unmark_compare(j, hi)?;
        if t.value(j)? <= pivot {
            t.swap(boundary, j)?;
            boundary += 1;
        }
    }
    t.swap(boundary, hi)?;
    Ok(boundary)
}
