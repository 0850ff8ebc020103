//! Top-down merge sort, run to completion in one step
//!
//! Unlike bubble and selection, merge sort is not resumable per tick: the
//! recursion runs to the end inside a single call and every placement is
//! presented as it happens. A press of the merge key therefore animates the
//! whole sort without returning to the control loop.

use super::FrameSink;
use crate::dataset::{Dataset, Highlight};

/// Sort the whole dataset, presenting one frame per placement
pub fn sort<S: FrameSink>(dataset: &mut Dataset, sink: &mut S) -> Result<(), S::Error> {
    if dataset.len() < 2 {
        return Ok(());
    }
    let right = dataset.len() - 1;
    sort_range(dataset, 0, right, sink)?;
    log::debug!("merge sort finished over {} bars", dataset.len());
    Ok(())
}

/// Sort the inclusive range `[left, right]`
fn sort_range<S: FrameSink>(
    dataset: &mut Dataset,
    left: usize,
    right: usize,
    sink: &mut S,
) -> Result<(), S::Error> {
    if left < right {
        let middle = (left + right) / 2;
        sort_range(dataset, left, middle, sink)?;
        sort_range(dataset, middle + 1, right, sink)?;
        merge(dataset, left, middle, right, sink)?;
    }
    Ok(())
}

/// Merge the sorted runs `[left, middle]` and `[middle + 1, right]`.
///
/// Ties take from the left run, which keeps the merge stable.
fn merge<S: FrameSink>(
    dataset: &mut Dataset,
    left: usize,
    middle: usize,
    right: usize,
    sink: &mut S,
) -> Result<(), S::Error> {
    let left_run = dataset.bars()[left..=middle].to_vec();
    let right_run = dataset.bars()[middle + 1..=right].to_vec();

    let mut l = 0;
    let mut r = 0;
    for dest in left..=right {
        let take_left = match (left_run.get(l), right_run.get(r)) {
            (Some(a), Some(b)) => a <= b,
            (Some(_), None) => true,
            _ => false,
        };

        let value = if take_left {
            l += 1;
            left_run[l - 1]
        } else {
            r += 1;
            right_run[r - 1]
        };

        dataset.set(dest, value);
        dataset.highlight(dest, Highlight::Merging);
        sink.present(dataset)?;
        dataset.highlight(dest, Highlight::Neutral);
    }

    Ok(())
}
