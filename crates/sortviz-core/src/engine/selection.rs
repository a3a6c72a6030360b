//! Selection sort: scan the remainder for its minimum, then swap it into place

use super::RunContext;
use crate::step::StepSink;

/// Every inner comparison renders `{i, j, min}` silently; the swap renders
/// `{i, min}` and sounds the value placed at `i`.
pub fn selection_sort<S: StepSink>(ctx: &mut RunContext<'_, S>) {
    let n = ctx.len();
    for i in 0..n {
        if ctx.should_stop() {
            return;
        }
        let mut min = i;
        for j in i + 1..n {
            if ctx.should_stop() {
                return;
            }
            if ctx.array.less(j, min) {
                min = j;
            }
            ctx.step(&[i, j, min], None);
        }
        if ctx.should_stop() {
            return;
        }
        if min != i {
            ctx.array.swap(i, min);
            ctx.step(&[i, min], Some(i));
        }
    }
}
