//! Selection sort, one minimum scan per step

use super::{FrameSink, StepOutcome};
use crate::dataset::{Dataset, Highlight};

/// Find the minimum of `[cycle, len)` and swap it into `cycle`.
///
/// Each comparison is its own frame: the running minimum is shown as
/// [`Highlight::ActiveB`] (red) and the scan position as [`Highlight::Pivot`]
/// (yellow). One extra frame is presented after the swap with all highlights
/// cleared.
pub fn step<S: FrameSink>(
    dataset: &mut Dataset,
    cycle: usize,
    sink: &mut S,
) -> Result<StepOutcome, S::Error> {
    let len = dataset.len();
    if cycle >= len {
        return Ok(StepOutcome::Done);
    }

    let mut minimum = cycle;
    for j in cycle + 1..len {
        dataset.highlight(minimum, Highlight::ActiveB);
        dataset.highlight(j, Highlight::Pivot);
        sink.present(dataset)?;

        if dataset.value(j) < dataset.value(minimum) {
            dataset.highlight(minimum, Highlight::Neutral);
            dataset.highlight(j, Highlight::Neutral);
            minimum = j;
        } else {
            dataset.highlight(j, Highlight::Neutral);
        }
    }

    dataset.swap(cycle, minimum);
    dataset.clear_highlights();
    sink.present(dataset)?;

    log::trace!("selection placed index {} (minimum was at {})", cycle, minimum);
    Ok(StepOutcome::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::FrameHistory;
    use crate::ui::theme::DEFAULT_THEME;
    use ratatui::style::Color;

    #[test]
    fn test_step_places_minimum() {
        let mut dataset = Dataset::from_values(vec![5, 3, 8, 1]);
        let mut history = FrameHistory::unbounded();

        let outcome = step(&mut dataset, 0, &mut history).unwrap();

        assert_eq!(outcome, StepOutcome::Continue);
        assert_eq!(dataset.bars(), &[1, 3, 8, 5]);
        // Three comparisons plus the post-swap frame
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn test_minimum_tracking_highlights() {
        let mut dataset = Dataset::from_values(vec![5, 3, 8, 1]);
        let mut history = FrameHistory::unbounded();
        step(&mut dataset, 0, &mut history).unwrap();

        let frames: Vec<_> = history.iter().map(|f| f.highlights.clone()).collect();
        use Highlight::*;
        // Minimum is ActiveB (red), scan position is Pivot (yellow)
        assert_eq!(frames[0], vec![ActiveB, Pivot, Neutral, Neutral]);
        // 3 became the minimum, so index 0 is no longer marked
        assert_eq!(frames[1], vec![Neutral, ActiveB, Pivot, Neutral]);
        assert_eq!(frames[2], vec![Neutral, ActiveB, Neutral, Pivot]);
        assert_eq!(frames[3], vec![Neutral; 4]);
    }

    #[test]
    fn test_minimum_drawn_red_scan_drawn_yellow() {
        let mut dataset = Dataset::from_values(vec![5, 3, 8, 1]);
        let mut history = FrameHistory::unbounded();
        step(&mut dataset, 0, &mut history).unwrap();

        let first = history.get(0).unwrap();
        let minimum_color = DEFAULT_THEME.bar_color(first.highlights[0]);
        let scan_color = DEFAULT_THEME.bar_color(first.highlights[1]);

        assert_eq!(minimum_color, Color::Rgb(255, 0, 0));
        assert_eq!(scan_color, Color::Rgb(255, 255, 0));
    }

    #[test]
    fn test_last_cursor_presents_once() {
        let mut dataset = Dataset::from_values(vec![1, 2, 3]);
        let mut history = FrameHistory::unbounded();

        assert_eq!(step(&mut dataset, 2, &mut history).unwrap(), StepOutcome::Continue);
        assert_eq!(history.len(), 1);
        assert_eq!(step(&mut dataset, 3, &mut history).unwrap(), StepOutcome::Done);
        assert_eq!(history.len(), 1);
    }
}
