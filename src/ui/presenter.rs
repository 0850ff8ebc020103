//! Frame sink that draws straight to the terminal
//!
//! Steps that produce several frames per tick (a bubble pass, a selection
//! scan, the whole merge sort) hand each one to a [`TerminalPresenter`],
//! which draws it and then waits out the frame budget so the step is visible.

use super::app::render_frame;
use super::clock::FrameClock;
use crate::config::Config;
use crate::dataset::Dataset;
use crate::engine::FrameSink;
use crate::session::SessionStatus;
use ratatui::{Terminal, backend::Backend};
use std::io;

pub struct TerminalPresenter<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    clock: &'a mut FrameClock,
    config: &'a Config,
    status: SessionStatus,
    message: &'a str,
    fps: u32,
    presented: usize,
}

impl<'a, B: Backend> TerminalPresenter<'a, B> {
    pub fn new(
        terminal: &'a mut Terminal<B>,
        clock: &'a mut FrameClock,
        config: &'a Config,
        status: SessionStatus,
        message: &'a str,
        fps: u32,
    ) -> Self {
        TerminalPresenter {
            terminal,
            clock,
            config,
            status,
            message,
            fps,
            presented: 0,
        }
    }

    /// Frames drawn so far
    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl<B: Backend> FrameSink for TerminalPresenter<'_, B> {
    type Error = io::Error;

    fn present(&mut self, dataset: &Dataset) -> io::Result<()> {
        let (config, status, message) = (self.config, self.status, self.message);
        self.terminal
            .draw(|f| render_frame(f, config, dataset, &status, message))?;
        self.clock.tick(self.fps);
        self.presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{bubble, Algorithm};
    use crate::session::Mode;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_presents_each_comparison() {
        let config = Config::default();
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        let mut clock = FrameClock::new();
        let mut dataset = Dataset::from_values(vec![5, 3, 8, 1]);
        let status = SessionStatus {
            mode: Mode::Sorting(Algorithm::Bubble),
            cycle: 0,
            final_count: 0,
            len: 4,
        };

        let mut presenter =
            TerminalPresenter::new(&mut terminal, &mut clock, &config, status, "", 1000);
        bubble::step(&mut dataset, 0, &mut presenter).unwrap();

        assert_eq!(presenter.presented(), 3);
    }
}
