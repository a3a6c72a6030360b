//! Insertion sort: shift larger values right, then drop the key into the hole

use super::RunContext;
use crate::step::StepSink;

/// Each comparison renders `{j, j+1}` whether it shifts or exits the scan;
/// the key write renders `{j+1}`. Shifts and the key write are counted swaps.
pub fn insertion_sort<S: StepSink>(ctx: &mut RunContext<'_, S>) {
    let n = ctx.len();
    for i in 1..n {
        if ctx.should_stop() {
            return;
        }
        let key = ctx.array.get(i);
        let mut hole = i;
        while hole > 0 {
            if ctx.should_stop() {
                ctx.array.restore(hole, [key]);
                return;
            }
            if ctx.array.greater_than(hole - 1, key) {
                let shifted = ctx.array.get(hole - 1);
                ctx.array.overwrite(hole, shifted);
                ctx.step(&[hole - 1, hole], Some(hole));
                hole -= 1;
            } else {
                ctx.step(&[hole - 1, hole], None);
                break;
            }
        }
        if ctx.should_stop() {
            // The key is only held locally until written back
            ctx.array.restore(hole, [key]);
            return;
        }
        ctx.array.overwrite(hole, key);
        ctx.step(&[hole], Some(hole));
    }
}
