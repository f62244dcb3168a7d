use crate::error::Result;
use crate::trace::Tracer;

/// Max-heap sort. Builds the heap bottom-up, then moves the root behind the
/// shrinking heap one element at a time.
pub fn heap_sort(t: &mut Tracer) -> Result<()> {
    let n = t.len();
    for root in (0..n / 2).rev() {
        sift_down(t, n, root)?;
    }
    for end in (1..n).rev() {
        t.swap(0, end)?;
        t.mark_sorted(end)?;
        sift_down(t, end, 0)?;
    }
    if n > 0 {
        t.mark_sorted(0)?;
    }
    Ok(())
}

/// Restore the heap property below `root` within the first `len` slots.
/// Each child comparison gets its own mark and pause.
fn sift_down(t: &mut Tracer, len: usize, root: usize) -> Result<()> {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = left + 1;

    for child in [left, right] {
        if child < len {
            t.mark_compare(largest, child)?;
            t.pause();
            t.unmark_compare(largest, child)?;
            if t.value(child)? > t.value(largest)? {
                largest = child;
            }
        }
    }

    if largest != root {
        t.swap(root, largest)?;
        sift_down(t, len, largest)?;
    }
    Ok(())
}
