//! Left-to-right lock-in sweep shown after a sort completes

use super::StepOutcome;
use crate::dataset::{Dataset, Highlight};

/// Promote the bar at `final_count` to [`Highlight::Sorted`].
///
/// Returns `Done` once every bar is already sorted; the caller increments
/// `final_count` after a `Continue`.
pub fn step(dataset: &mut Dataset, final_count: usize) -> StepOutcome {
    if final_count >= dataset.len() {
        return StepOutcome::Done;
    }
    dataset.highlight(final_count, Highlight::Sorted);
    StepOutcome::Continue
}
