use crate::error::Result;
use crate::trace::Tracer;

/// Scan the unsorted suffix for its minimum, swap it into place once, and
/// mark that position sorted straight away.
pub fn selection_sort(t: &mut Tracer) -> Result<()> {
    let n = t.len();
    for i in 0..n {
        let mut min = i;
        for j in (i + 1)..n {
            t.mark_compare(min, j)?;
            t.pause();
            let smaller = t.value(j)? < t.value(min)?;
            t.unmark_compare(min, j)?;
            if smaller {
                min = j;
            }
        }
        if min != i {
            t.swap(i, min)?;
        }
        t.mark_sorted(i)?;
    }
    Ok(())
}
