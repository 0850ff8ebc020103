//! Run a sort without a terminal
//!
//! Drives a [`Session`] exactly like the control loop would, but hands every
//! frame to a [`FrameHistory`] instead of drawing it. Used by `--headless`.

use crate::config::Config;
use crate::engine::Algorithm;
use crate::errors::SortvizError;
use crate::session::{Command, Mode, Session};
use crate::snapshot::FrameHistory;
use log::info;
use std::fmt;

/// Memory cap for recorded frames (64 MB)
pub const FRAME_MEMORY_LIMIT: usize = 64 * 1024 * 1024;

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessReport {
    pub algorithm: Algorithm,
    pub before: Vec<u32>,
    pub after: Vec<u32>,
    /// Control-loop ticks until the sweep settled
    pub ticks: usize,
    /// Frames presented from inside steps
    pub frames: usize,
    /// Estimated bytes held by the recorded frames
    pub memory: usize,
}

impl fmt::Display for HeadlessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} sort: {} ticks, {} frames ({} bytes)",
            self.algorithm, self.ticks, self.frames, self.memory
        )?;
        writeln!(f, "before: {:?}", self.before)?;
        write!(f, "after:  {:?}", self.after)
    }
}

/// Sort the session's current bars with `algorithm` until the finish sweep settles
pub fn run_session(
    session: &mut Session,
    algorithm: Algorithm,
    history: &mut FrameHistory,
) -> Result<HeadlessReport, SortvizError> {
    let before = session.dataset().bars().to_vec();
    session.apply(Command::Sort(algorithm));

    let mut ticks = 0;
    loop {
        let settled = session.mode() == Mode::Finished
            && session.final_count() >= session.dataset().len();
        if settled {
            break;
        }
        session.tick(history)?;
        ticks += 1;
    }

    info!(
        "{} sort settled after {} ticks and {} frames ({} of {} bytes)",
        algorithm,
        ticks,
        history.len(),
        history.memory_usage(),
        history.memory_limit()
    );

    Ok(HeadlessReport {
        algorithm,
        before,
        after: session.dataset().bars().to_vec(),
        ticks,
        frames: history.len(),
        memory: history.memory_usage(),
    })
}

/// Generate a dataset from `config` and sort it headlessly
pub fn run(config: Config, algorithm: Algorithm) -> Result<HeadlessReport, SortvizError> {
    let mut session = Session::new(config);
    let mut history = FrameHistory::new(FRAME_MEMORY_LIMIT);
    run_session(&mut session, algorithm, &mut history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_small_bubble_run() {
        let mut session = Session::with_dataset(
            Config::default(),
            Dataset::from_values(vec![5, 3, 8, 1]),
        );
        let mut history = FrameHistory::unbounded();

        let report = run_session(&mut session, Algorithm::Bubble, &mut history).unwrap();

        assert_eq!(report.after, vec![1, 3, 5, 8]);
        // Passes of 3, 2, 1, 0 comparisons
        assert_eq!(report.frames, 6);
        // Four passes, the completing tick (sweeps 1), then three more sweeps
        assert_eq!(report.ticks, 8);
    }

    #[test]
    fn test_report_tracks_recorded_memory() {
        let mut session = Session::with_dataset(
            Config::default(),
            Dataset::from_values(vec![4, 3, 2, 1]),
        );
        let mut history = FrameHistory::new(FRAME_MEMORY_LIMIT);

        let report = run_session(&mut session, Algorithm::Merge, &mut history).unwrap();

        assert_eq!(report.memory, history.memory_usage());
        assert!(report.memory > 0);
        assert!(report.memory <= history.memory_limit());
    }

    #[test]
    fn test_frame_limit_is_reported() {
        let mut session = Session::with_dataset(
            Config::default(),
            Dataset::from_values(vec![4, 3, 2, 1]),
        );
        let mut history = FrameHistory::new(1);

        let err = run_session(&mut session, Algorithm::Merge, &mut history).unwrap_err();
        assert!(matches!(err, SortvizError::FrameLimitExceeded { .. }));
    }

    #[test]
    fn test_report_display() {
        let report = run(
            Config {
                seed: Some(5),
                ..Config::default()
            },
            Algorithm::Selection,
        )
        .unwrap();

        let text = report.to_string();
        assert!(text.starts_with("selection sort:"));
        assert!(text.contains("after:"));
        assert_eq!(report.after.len(), 45);
    }
}
