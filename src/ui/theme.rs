use crate::dataset::Highlight;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub comment: Color,    // Grey
    pub caption: Color,    // Instruction text
    pub status_bg: Color,
    pub neutral: Color,    // Blue
    pub sorted: Color,     // Green
    pub active_a: Color,   // Lime
    pub active_b: Color,   // Red
    pub pivot: Color,      // Yellow
    pub merging: Color,    // Aqua
}

impl Theme {
    /// Colour used to draw a bar with the given highlight
    pub fn bar_color(&self, highlight: Highlight) -> Color {
        match highlight {
            Highlight::Neutral => self.neutral,
            Highlight::Sorted => self.sorted,
            Highlight::ActiveA => self.active_a,
            Highlight::ActiveB => self.active_b,
            Highlight::Pivot => self.pivot,
            Highlight::Merging => self.merging,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Black,
    fg: Color::Rgb(205, 214, 244),
    comment: Color::Rgb(108, 112, 134),
    caption: Color::Rgb(0, 255, 0),
    status_bg: Color::Rgb(50, 50, 70),
    neutral: Color::Rgb(0, 0, 255),
    sorted: Color::Rgb(0, 255, 0),
    active_a: Color::Rgb(230, 255, 230),
    active_b: Color::Rgb(255, 0, 0),
    pivot: Color::Rgb(255, 255, 0),
    merging: Color::Rgb(64, 224, 208),
};
