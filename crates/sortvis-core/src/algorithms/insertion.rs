use crate::error::Result;
use crate::trace::Tracer;

/// Shift-based insertion. Each shift marks the pair it moves between.
pub fn insertion_sort(t: &mut Tracer) -> Result<()> {
    for i in 1..t.len() {
        let key = t.value(i)?;
        let mut j = i;
        while j > 0 && t.value(j - 1)? > key {
            t.mark_compare(j - 1, j)?;
            let shifted = t.value(j - 1)?;
            t.write(j, shifted)?;
            t.pause();
            t.unmark_compare(j - 1, j)?;
            j -= 1;
        }
        t.set(j, key)?;
    }
    t.mark_all_sorted();
    Ok(())
}
