//! # Introduction
//!
//! sortviz animates bubble, selection and merge sort over a row of randomly
//! sized bars in the terminal, redrawing after every comparison, swap or
//! merge placement so each algorithm's progress can be followed by eye.
//! The terminal UI is built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Key → Session (mode / reset) → Engine (mutates Dataset) → Renderer → Terminal
//! ```
//!
//! 1. [`dataset`] — bar values plus a parallel highlight per bar.
//! 2. [`engine`] — the three sorts as step functions that report each
//!    visible unit of work to a [`engine::FrameSink`].
//! 3. [`session`] — mode state machine and progress cursor; one engine
//!    increment per control-loop tick.
//! 4. [`snapshot`] — in-memory [`snapshot::FrameHistory`] sink used by
//!    headless runs and tests.
//! 5. [`ui`] — ratatui-based TUI and control loop; not part of the stable
//!    library API.
//!
//! ## Keys
//!
//! `g` new set, `b` bubble sort, `s` selection sort, `m` merge sort, `q` quit.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod session;
pub mod snapshot;
pub mod ui;
