//! Bubble sort: adjacent pairs, each pass one shorter than the last

use super::RunContext;
use crate::step::StepSink;

/// Every comparison renders `{j, j+1}`; a swap also sounds the value that
/// landed at `j`. No early exit on a pass without swaps.
pub fn bubble_sort<S: StepSink>(ctx: &mut RunContext<'_, S>) {
    let n = ctx.len();
    for pass in 0..n {
        if ctx.should_stop() {
            return;
        }
        for j in 0..(n - pass).saturating_sub(1) {
            if ctx.should_stop() {
                return;
            }
            if ctx.array.greater(j, j + 1) {
                ctx.array.swap(j, j + 1);
                ctx.step(&[j, j + 1], Some(j));
            } else {
                ctx.step(&[j, j + 1], None);
            }
        }
    }
}
