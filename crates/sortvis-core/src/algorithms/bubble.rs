use crate::error::Result;
use crate::trace::Tracer;

/// Adjacent-pair passes with early exit once a pass makes no exchange.
///
/// The last slot of each pass is marked sorted as soon as the pass ends.
pub fn bubble_sort(t: &mut Tracer) -> Result<()> {
    let n = t.len();
    for pass in 0..n {
        let boundary = n - pass - 1;
        let mut swapped = false;
        for j in 0..boundary {
            t.mark_compare(j, j + 1)?;
            t.pause();
            if t.value(j)? > t.value(j + 1)? {
                t.swap(j, j + 1)?;
                swapped = true;
            }
            t.unmark_compare(j, j + 1)?;
        }
        t.mark_sorted(boundary)?;
        if !swapped {
            break;
        }
    }
    // Early exit leaves the prefix unmarked
    t.mark_all_sorted();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Sequence;
    use crate::surface::{BarChart, RenderSurface};
    use crate::trace::SortStep;

    #[test]
    fn scenario_walkthrough() {
        let mut seq = Sequence::from(vec![5, 3, 8, 1]);
        let mut tracer = Tracer::new(&seq);
        bubble_sort(&mut tracer).unwrap();
        let trace = tracer.finish();

        let compared: Vec<(usize, usize)> = trace
            .steps()
            .iter()
            .filter_map(|s| match *s {
                SortStep::MarkCompare { i, j } => Some((i, j)),
                _ => None,
            })
            .collect();
        assert_eq!(compared, vec![(0, 1), (1, 2), (2, 3), (0, 1), (1, 2), (0, 1)]);

        let mut chart = BarChart::new(200);
        chart.rebuild(seq.values());
        let mut after_swaps = Vec::new();
        for step in trace.steps() {
            step.apply(&mut seq, &mut chart).unwrap();
            if matches!(step, SortStep::Swap { .. }) {
                after_swaps.push(seq.values().to_vec());
            }
        }
        assert_eq!(
            after_swaps,
            vec![
                vec![3, 5, 8, 1],
                vec![3, 5, 1, 8],
                vec![3, 1, 5, 8],
                vec![1, 3, 5, 8],
            ]
        );
        assert_eq!(chart.sorted(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn sorted_input_exits_after_one_pass() {
        let mut tracer = Tracer::new(&Sequence::from(vec![1, 2, 3, 4, 5]));
        bubble_sort(&mut tracer).unwrap();
        let trace = tracer.finish();

        let compares = trace
            .steps()
            .iter()
            .filter(|s| matches!(s, SortStep::MarkCompare { .. }))
            .count();
        assert_eq!(compares, 4);
        assert_eq!(trace.steps()[trace.len() - 6], SortStep::MarkSorted { index: 4 });
    }
}
