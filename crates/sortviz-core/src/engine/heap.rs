//! Heap sort: bottom-up max-heap build, then repeated root extraction

use super::RunContext;
use crate::step::StepSink;

pub fn heap_sort<S: StepSink>(ctx: &mut RunContext<'_, S>) {
    let n = ctx.len();
    for root in (0..n / 2).rev() {
        if ctx.should_stop() {
            return;
        }
        sift_down(ctx, n, root);
    }
    for end in (1..n).rev() {
        if ctx.should_stop() {
            return;
        }
        ctx.array.swap(0, end);
        ctx.step(&[0, end], Some(0));
        sift_down(ctx, end, 0);
    }
}

/// Restore the heap property below `root` within the first `size` slots
///
/// A comparison is only counted when a child beats the current largest, and
/// only swaps render (`{root, largest}`).
fn sift_down<S: StepSink>(ctx: &mut RunContext<'_, S>, size: usize, root: usize) {
    if ctx.should_stop() {
        return;
    }
    let mut largest = root;
    for child in [2 * root + 1, 2 * root + 2] {
        if child < size && ctx.array.get(child) > ctx.array.get(largest) {
            ctx.array.record_comparison();
            largest = child;
        }
    }
    if largest != root {
        ctx.array.swap(root, largest);
        ctx.step(&[root, largest], Some(root));
        sift_down(ctx, size, largest);
    }
}
