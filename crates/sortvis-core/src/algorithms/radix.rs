use crate::error::Result;
use crate::sequence::Value;
use crate::trace::Tracer;

const BASE: Value = 10;

/// LSD radix sort, base 10, one stable counting pass per digit.
///
/// Values must be non-negative, which `Value` already guarantees. Only the
/// output of each pass is shown: one `set` per position per pass.
pub fn radix_sort(t: &mut Tracer) -> Result<()> {
    let Some(max) = t.max() else {
        return Ok(());
    };

    let mut exp: Value = 1;
    while max / exp > 0 {
        let pass = counting_pass(t.values(), exp);
        for (index, value) in pass.into_iter().enumerate() {
            t.set(index, value)?;
        }
        match exp.checked_mul(BASE) {
            Some(next) => exp = next,
            None => break,
        }
    }

    t.mark_all_sorted();
    Ok(())
}

fn digit(value: Value, exp: Value) -> usize {
    ((value / exp) % BASE) as usize
}

/// Stable counting sort of `values` on the digit selected by `exp`.
fn counting_pass(values: &[Value], exp: Value) -> Vec<Value> {
    let mut counts = [0usize; BASE as usize];
    for &value in values {
        counts[digit(value, exp)] += 1;
    }
    for d in 1..counts.len() {
        counts[d] += counts[d - 1];
    }

    let mut out = vec![0; values.len()];
    for &value in values.iter().rev() {
        let d = digit(value, exp);
        counts[d] -= 1;
        out[counts[d]] = value;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Sequence;
    use crate::trace::SortStep;

    #[test]
    fn passes_match_reference_lsd() {
        let mut tracer = Tracer::new(&Sequence::from(vec![90, 12, 5, 80]));
        radix_sort(&mut tracer).unwrap();
        let trace = tracer.finish();

        let written: Vec<Value> = trace
            .steps()
            .iter()
            .filter_map(|s| match s {
                SortStep::Set { value, .. } => Some(*value),
                _ => None,
            })
            .collect();
        let passes: Vec<&[Value]> = written.chunks(4).collect();
        assert_eq!(passes, vec![&[90, 80, 12, 5][..], &[5, 12, 80, 90][..]]);
        assert_eq!(trace.sorted(), &[5, 12, 80, 90]);
    }

    #[test]
    fn one_set_and_pause_per_position_per_pass() {
        let mut tracer = Tracer::new(&Sequence::from(vec![100, 5, 42]));
        radix_sort(&mut tracer).unwrap();
        let trace = tracer.finish();
        // max 100 has three digits
        assert_eq!(trace.pause_count(), 9);
        assert!(!trace
            .steps()
            .iter()
            .any(|s| matches!(s, SortStep::MarkCompare { .. } | SortStep::Swap { .. })));
    }

    #[test]
    fn all_zero_input_needs_no_pass() {
        let mut tracer = Tracer::new(&Sequence::from(vec![0, 0]));
        radix_sort(&mut tracer).unwrap();
        let trace = tracer.finish();
        assert_eq!(trace.pause_count(), 0);
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn huge_values_do_not_overflow_exponent() {
        let mut tracer = Tracer::new(&Sequence::from(vec![Value::MAX, 0, 7]));
        radix_sort(&mut tracer).unwrap();
        assert_eq!(tracer.values(), &[0, 7, Value::MAX]);
    }
}
