//! TUI pane rendering modules
//!
//! Every pane is a stateless render function (or widget) over borrowed data;
//! none of them mutate the session.
//!
//! # Pane Modules
//!
//! - [`bars`]: the bar chart, one coloured column group per element
//! - [`captions`]: static instruction text over the top-left of the chart
//! - [`status`]: status bar with mode, progress and keybindings

pub mod bars;
pub mod captions;
pub mod status;

// Re-export render functions for convenience
pub use bars::BarsView;
pub use captions::{render_captions, CAPTIONS};
pub use status::{progress_text, render_status_bar};
