//! Top-down merge sort with a stable two-way merge
//!
//! Halves are copied out and written back one slot at a time, each write
//! counted as a swap and rendered as `{k}`.

use super::RunContext;
use crate::step::StepSink;

pub fn merge_sort<S: StepSink>(ctx: &mut RunContext<'_, S>) {
    let n = ctx.len();
    if n > 1 {
        sort_range(ctx, 0, n - 1);
    }
}

fn sort_range<S: StepSink>(ctx: &mut RunContext<'_, S>, low: usize, high: usize) {
    if low >= high || ctx.should_stop() {
        return;
    }
    let mid = low + (high - low) / 2;
    sort_range(ctx, low, mid);
    sort_range(ctx, mid + 1, high);
    merge(ctx, low, mid, high);
}

fn merge<S: StepSink>(ctx: &mut RunContext<'_, S>, low: usize, mid: usize, high: usize) {
    if ctx.should_stop() {
        return;
    }
    let left = ctx.array.values()[low..=mid].to_vec();
    let right = ctx.array.values()[mid + 1..=high].to_vec();
    let (mut i, mut j) = (0, 0);

    for k in low..=high {
        if ctx.should_stop() {
            // Unmerged values are only held in the buffers; put them back
            // so the array stays a permutation.
            let pending = left[i..].iter().chain(&right[j..]).copied();
            ctx.array.restore(k, pending);
            return;
        }
        let value = if i < left.len() && j < right.len() {
            ctx.array.record_comparison();
            if left[i] <= right[j] {
                i += 1;
                left[i - 1]
            } else {
                j += 1;
                right[j - 1]
            }
        } else if i < left.len() {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        ctx.array.overwrite(k, value);
        ctx.step(&[k], Some(k));
    }
}

#[cfg(test)]
mod tests {
    use crate::array::ArrayModel;
    use crate::test_support::run_engine_recorded;
    use crate::types::Algorithm;

    #[test]
    fn test_single_index_highlights() {
        let mut array = ArrayModel::from_values(vec![2, 1, 4, 3]).unwrap();
        let sink = run_engine_recorded(Algorithm::Merge, &mut array);

        assert_eq!(array.values(), &[1, 2, 3, 4]);
        assert!(sink.frames.iter().all(|f| f.highlight.as_slice().len() == 1));
        // Every element is written once per merge level: 2 levels of 4
        assert_eq!(array.counters().swaps, 8);
        assert_eq!(sink.frames.len(), 8);
    }

    #[test]
    fn test_comparisons_stop_when_a_half_runs_out() {
        // [1,2 | 3,4]: left half drains after two comparisons
        let mut array = ArrayModel::from_values(vec![1, 2, 3, 4]).unwrap();
        run_engine_recorded(Algorithm::Merge, &mut array);
        // 1 + 1 for the pairs, 2 for the final merge
        assert_eq!(array.counters().comparisons, 4);
    }
}
