//! Sorting algorithms as resumable step functions
//!
//! This module provides the three animated sorts plus the post-sort sweep:
//! - [`bubble`]: one full inner pass per step
//! - [`selection`]: one minimum scan and swap per step, one frame per comparison
//! - [`merge`]: the whole recursive merge sort in a single step, one frame per placement
//! - [`finish`]: promotes one more bar to [`Highlight::Sorted`] per tick
//!
//! # Step protocol
//!
//! Every step borrows the [`Dataset`] mutably, does its unit of work, and
//! hands intermediate states to a [`FrameSink`] whenever something visible
//! happened. The engine never draws anything itself: the sink decides whether
//! a frame goes to the terminal, into a [`FrameHistory`], or nowhere.
//!
//! The caller owns the cursor. A step reports [`StepOutcome::Done`] when the
//! cursor has run past the end, and the caller is expected to move on to the
//! finish sweep.
//!
//! [`Highlight::Sorted`]: crate::dataset::Highlight::Sorted
//! [`FrameHistory`]: crate::snapshot::FrameHistory

pub mod bubble;
pub mod finish;
pub mod merge;
pub mod selection;

use crate::dataset::Dataset;
use std::convert::Infallible;
use std::fmt;

/// Consumer of intermediate frames produced inside a step
pub trait FrameSink {
    type Error;

    /// Called once per visually meaningful unit of work
    fn present(&mut self, dataset: &Dataset) -> Result<(), Self::Error>;
}

/// Sink that drops every frame
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FrameSink for NullSink {
    type Error = Infallible;

    fn present(&mut self, _dataset: &Dataset) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Result of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Work was done; call again with the next cursor
    Continue,
    /// Nothing left to do at this cursor
    Done,
}

/// The three animated sorts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Merge,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
        }
    }

    /// Parse a lowercase algorithm name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bubble" => Some(Algorithm::Bubble),
            "selection" => Some(Algorithm::Selection),
            "merge" => Some(Algorithm::Merge),
            _ => None,
        }
    }

    /// Run one step at `cycle`.
    ///
    /// Merge only does work at `cycle == 0`; any later cursor reports `Done`.
    pub fn step<S: FrameSink>(
        self,
        dataset: &mut Dataset,
        cycle: usize,
        sink: &mut S,
    ) -> Result<StepOutcome, S::Error> {
        match self {
            Algorithm::Bubble => bubble::step(dataset, cycle, sink),
            Algorithm::Selection => selection::step(dataset, cycle, sink),
            Algorithm::Merge => {
                if cycle < 1 {
                    merge::sort(dataset, sink)?;
                    Ok(StepOutcome::Continue)
                } else {
                    Ok(StepOutcome::Done)
                }
            }
        }
    }

    /// Step from cursor 0 until `Done`, returning how many steps did work
    pub fn run_to_completion<S: FrameSink>(
        self,
        dataset: &mut Dataset,
        sink: &mut S,
    ) -> Result<usize, S::Error> {
        let mut cycle = 0;
        while self.step(dataset, cycle, sink)? == StepOutcome::Continue {
            cycle += 1;
        }
        Ok(cycle)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
