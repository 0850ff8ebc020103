//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`app`]** — application state and the per-frame control loop
//! - **[`presenter`]** — frame sink that draws in-step frames to the terminal
//! - **[`panes`]** — stateless render functions (bars, captions, status bar)
//! - **[`keymap`]** — key → command bindings
//! - **[`clock`]** — fixed-rate frame pacing
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Session`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Session`]: crate::session::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod clock;
pub mod keymap;
pub mod panes;
pub mod presenter;
pub mod theme;

pub use app::App;
