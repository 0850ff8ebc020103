//! Main TUI application state and control loop

use super::clock::FrameClock;
use super::keymap::{KeyAction, KeyMap};
use super::panes::{render_captions, render_status_bar, BarsView};
use super::presenter::TerminalPresenter;
use super::theme::DEFAULT_THEME;
use crate::config::Config;
use crate::dataset::Dataset;
use crate::session::{Command, Session, SessionStatus};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::{info, trace, warn};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};
use std::io;
use std::time::Duration;

/// Draw one full frame: bars, instructions and status bar
pub fn render_frame(
    frame: &mut Frame,
    config: &Config,
    dataset: &Dataset,
    status: &SessionStatus,
    message: &str,
) {
    let size = frame.area();

    // Chart on top, status bar at the bottom
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    let chart_area = chunks[0];
    let status_area = chunks[1];

    frame.render_widget(
        Block::default().style(Style::default().bg(DEFAULT_THEME.bg)),
        chart_area,
    );
    frame.render_widget(BarsView::new(dataset, config), chart_area);
    render_captions(frame, chart_area);
    render_status_bar(frame, status_area, status, message);
}

/// The main application state
pub struct App {
    /// Geometry and pacing
    pub config: Config,

    /// Dataset, mode and progress cursor
    pub session: Session,

    /// Key to command bindings
    pub keymap: KeyMap,

    /// Frame pacing shared by the loop and in-step frames
    pub clock: FrameClock,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(session: Session, config: Config) -> Self {
        App {
            config,
            session,
            keymap: KeyMap::new(),
            clock: FrameClock::new(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the control loop until a quit key is pressed.
    ///
    /// Each iteration drains pending input, advances the session by one
    /// step, redraws, and then sleeps off the rest of the frame budget.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.clear()?;

        loop {
            self.poll_input()?;

            if self.should_quit {
                break;
            }

            self.advance(terminal)?;

            let status = self.session.status();
            terminal.draw(|f| {
                render_frame(
                    f,
                    &self.config,
                    self.session.dataset(),
                    &status,
                    &self.status_message,
                )
            })?;

            self.clock.tick(self.session.frame_rate());
        }

        Ok(())
    }

    /// Run one session tick, drawing any frames it produces along the way.
    ///
    /// Returns how many in-step frames were drawn.
    pub fn advance<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<usize> {
        let fps = self.session.frame_rate();
        let mut presenter = TerminalPresenter::new(
            terminal,
            &mut self.clock,
            &self.config,
            self.session.status(),
            &self.status_message,
            fps,
        );
        self.session.tick(&mut presenter)?;

        let drawn = presenter.presented();
        if drawn > 0 {
            trace!("tick drew {} in-step frames at {} fps", drawn, fps);
        }
        Ok(drawn)
    }

    /// Handle every key press that arrived since the last frame
    fn poll_input(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }
        Ok(())
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.keymap.lookup(&key) {
            Some(KeyAction::Quit) => {
                info!("quit requested");
                self.should_quit = true;
            }
            Some(KeyAction::Session(command)) => {
                self.session.apply(command);
                self.status_message = match command {
                    Command::Generate => "Generated a new set".to_string(),
                    Command::Sort(algorithm) => format!("Running {} sort", algorithm),
                };
            }
            None => {
                warn!("Key error: no binding for {:?}", key.code);
            }
        }
    }
}
