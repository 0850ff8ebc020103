//! Status bar rendering with keybindings and session progress

use crate::session::{Mode, SessionStatus};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Short progress description for the current mode
pub fn progress_text(status: &SessionStatus) -> String {
    match status.mode {
        Mode::Idle => format!("{} bars", status.len),
        Mode::Sorting(_) => format!("step {}/{}", status.cycle.min(status.len), status.len),
        Mode::Finished => format!("sorted {}/{}", status.final_count, status.len),
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: &SessionStatus, message: &str) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let badge_bg = match status.mode {
        Mode::Idle => DEFAULT_THEME.neutral,
        Mode::Sorting(_) => DEFAULT_THEME.pivot,
        Mode::Finished => DEFAULT_THEME.sorted,
    };

    let left_spans = vec![
        Span::styled(
            format!(" {} ", status.mode.to_string().to_uppercase()),
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", progress_text(status)),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(" g ", key_style),
        Span::styled(" new set ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" b/s/m ", key_style),
        Span::styled(" sort ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Algorithm;

    #[test]
    fn test_progress_text() {
        let mut status = SessionStatus {
            mode: Mode::Idle,
            cycle: 0,
            final_count: 0,
            len: 45,
        };
        assert_eq!(progress_text(&status), "45 bars");

        status.mode = Mode::Sorting(Algorithm::Bubble);
        status.cycle = 12;
        assert_eq!(progress_text(&status), "step 12/45");

        status.mode = Mode::Finished;
        status.final_count = 45;
        assert_eq!(progress_text(&status), "sorted 45/45");
    }
}
