//! Quick sort with Lomuto partitioning, pivot = last element of the range

use super::RunContext;
use crate::step::StepSink;

/// Renders only on mutations: each qualifying swap shows `{i, j, high}`,
/// pivot placement shows `{i, high}` (with `i` the pivot's final slot).
pub fn quick_sort<S: StepSink>(ctx: &mut RunContext<'_, S>) {
    let n = ctx.len();
    if n > 1 {
        sort_range(ctx, 0, n - 1);
    }
}

fn sort_range<S: StepSink>(ctx: &mut RunContext<'_, S>, low: usize, high: usize) {
    if low >= high || ctx.should_stop() {
        return;
    }
    let Some(pivot) = partition(ctx, low, high) else {
        return;
    };
    if pivot > low {
        sort_range(ctx, low, pivot - 1);
    }
    sort_range(ctx, pivot + 1, high);
}

/// Returns the pivot's final index, or `None` if a stop was observed
fn partition<S: StepSink>(ctx: &mut RunContext<'_, S>, low: usize, high: usize) -> Option<usize> {
    let pivot = ctx.array.get(high);
    // Next slot for a value <= pivot
    let mut store = low;
    for j in low..high {
        if ctx.should_stop() {
            return None;
        }
        if ctx.array.at_most(j, pivot) {
            ctx.array.swap(store, j);
            ctx.step(&[store, j, high], Some(store));
            store += 1;
        }
    }
    ctx.array.swap(store, high);
    ctx.step(&[store, high], Some(store));
    Some(store)
}
