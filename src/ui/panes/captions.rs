//! Static instruction text drawn over the top-left of the canvas

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

pub const CAPTIONS: [&str; 4] = [
    "Press g to generate a new set",
    "Press b to bubble sort",
    "Press s to selection sort",
    "Press m to merge sort",
];

/// Render the instruction lines one cell in from the top-left corner
pub fn render_captions(frame: &mut Frame, area: Rect) {
    let width = CAPTIONS.iter().map(|c| c.len()).max().unwrap_or(0) as u16;
    let target = Rect {
        x: area.x.saturating_add(2),
        y: area.y.saturating_add(1),
        width,
        height: CAPTIONS.len() as u16,
    }
    .intersection(area);

    if target.is_empty() {
        return;
    }

    let lines: Vec<Line> = CAPTIONS.iter().map(|c| Line::from(*c)).collect();
    let paragraph = Paragraph::new(lines).style(Style::default().fg(DEFAULT_THEME.caption));

    frame.render_widget(Clear, target);
    frame.render_widget(paragraph, target);
}
