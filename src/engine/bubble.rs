//! Bubble sort, one inner pass per step

use super::{FrameSink, StepOutcome};
use crate::dataset::{Dataset, Highlight};

/// Run the inner pass for cursor `cycle`.
///
/// Compares every adjacent pair in `[0, len - cycle - 1)`, marking the pair
/// [`Highlight::ActiveA`]/[`Highlight::ActiveB`], swapping when out of order,
/// and presenting one frame per comparison. Highlights are cleared after each
/// frame, so the dataset is all-neutral when the pass returns.
pub fn step<S: FrameSink>(
    dataset: &mut Dataset,
    cycle: usize,
    sink: &mut S,
) -> Result<StepOutcome, S::Error> {
    let len = dataset.len();
    if cycle >= len {
        return Ok(StepOutcome::Done);
    }

    for j in 0..len - cycle - 1 {
        dataset.highlight(j, Highlight::ActiveA);
        dataset.highlight(j + 1, Highlight::ActiveB);

        if dataset.value(j) > dataset.value(j + 1) {
            dataset.swap(j, j + 1);
        }

        sink.present(dataset)?;
        dataset.clear_highlights();
    }

    log::trace!("bubble pass {} complete", cycle);
    Ok(StepOutcome::Continue)
}
