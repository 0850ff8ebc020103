//! Session controller: mode, progress cursor and the finish sweep
//!
//! A [`Session`] owns the [`Dataset`] and decides, once per control-loop
//! tick, which single engine increment to run:
//!
//! ```text
//!            g                     b / s / m
//!   any ──────────▶ Idle    any ──────────────▶ Sorting(alg)
//!                                                   │ step reports Done
//!                                                   │ (merge: after its one call)
//!                                                   ▼
//!                                               Finished ──▶ (sweep, then static)
//! ```
//!
//! Every command resets `cycle` and `final_count`, which is all it takes to
//! abandon a sort in progress.

use crate::config::Config;
use crate::dataset::Dataset;
use crate::engine::{finish, Algorithm, FrameSink, StepOutcome};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// What the session is currently animating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Sorting(Algorithm),
    Finished,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Idle => f.write_str("idle"),
            Mode::Sorting(algorithm) => write!(f, "{} sort", algorithm),
            Mode::Finished => f.write_str("finished"),
        }
    }
}

/// Commands the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Throw away the current bars and generate a new set
    Generate,
    /// Start (or restart) a sort over the current bars
    Sort(Algorithm),
}

/// Read-only view of the session counters, for the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub mode: Mode,
    pub cycle: usize,
    pub final_count: usize,
    pub len: usize,
}

fn seeded_rng(config: &Config) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// The whole mutable state of one visualiser run
#[derive(Debug)]
pub struct Session {
    config: Config,
    dataset: Dataset,
    rng: StdRng,
    mode: Mode,
    cycle: usize,
    final_count: usize,
}

impl Session {
    /// Start idle over a randomly generated dataset
    pub fn new(config: Config) -> Self {
        let mut rng = seeded_rng(&config);
        let dataset = Dataset::random(&config, &mut rng);
        Self::with_rng(config, dataset, rng)
    }

    /// Start idle over a fixed dataset; the generator is seeded but not drawn from
    pub fn with_dataset(config: Config, dataset: Dataset) -> Self {
        let rng = seeded_rng(&config);
        Self::with_rng(config, dataset, rng)
    }

    fn with_rng(config: Config, dataset: Dataset, rng: StdRng) -> Self {
        Session {
            config,
            dataset,
            rng,
            mode: Mode::Idle,
            cycle: 0,
            final_count: 0,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cycle(&self) -> usize {
        self.cycle
    }

    pub fn final_count(&self) -> usize {
        self.final_count
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            mode: self.mode,
            cycle: self.cycle,
            final_count: self.final_count,
            len: self.dataset.len(),
        }
    }

    /// Tick cap for the current mode
    pub fn frame_rate(&self) -> u32 {
        match self.mode {
            Mode::Finished => self.config.finish_fps,
            Mode::Idle | Mode::Sorting(_) => self.config.animation_fps,
        }
    }

    /// Switch modes, abandoning any progress
    pub fn apply(&mut self, command: Command) {
        self.cycle = 0;
        self.final_count = 0;

        match command {
            Command::Generate => {
                self.dataset.regenerate(&self.config, &mut self.rng);
                self.mode = Mode::Idle;
                info!("generated a new set of {} bars", self.dataset.len());
            }
            Command::Sort(algorithm) => {
                self.dataset.clear_highlights();
                self.mode = Mode::Sorting(algorithm);
                info!("starting {} sort", algorithm);
            }
        }
    }

    /// Run exactly one engine increment for the current mode.
    ///
    /// Intermediate frames go to `sink`; the caller is expected to draw the
    /// dataset once more after this returns.
    pub fn tick<S: FrameSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        match self.mode {
            Mode::Idle => {}
            Mode::Sorting(algorithm) => {
                let outcome = algorithm.step(&mut self.dataset, self.cycle, sink)?;
                match (algorithm, outcome) {
                    (Algorithm::Merge, StepOutcome::Continue) => {
                        self.cycle += 1;
                        self.enter_finished();
                    }
                    (_, StepOutcome::Continue) => self.cycle += 1,
                    (_, StepOutcome::Done) => {
                        self.enter_finished();
                        self.sweep();
                    }
                }
            }
            Mode::Finished => self.sweep(),
        }
        Ok(())
    }

    fn enter_finished(&mut self) {
        debug!("{} complete after {} steps", self.mode, self.cycle);
        self.mode = Mode::Finished;
        self.final_count = 0;
    }

    fn sweep(&mut self) {
        if finish::step(&mut self.dataset, self.final_count) == StepOutcome::Continue {
            self.final_count += 1;
        }
    }
}
