//! Bar chart rendering
//!
//! Bars live on a logical canvas (`canvas_width × canvas_height`) and are
//! scaled onto the terminal area. Heights are resolved to eighths of a cell
//! so short bars still differ visibly on small terminals.

use crate::config::Config;
use crate::dataset::Dataset;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

const FULL_BLOCK: &str = "█";

/// Partial blocks indexed by eighths (index 0 is unused)
const PARTIAL_BLOCKS: [&str; 8] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇"];

/// Read-only view of a dataset as bottom-anchored bars
pub struct BarsView<'a> {
    dataset: &'a Dataset,
    canvas_width: u32,
    canvas_height: u32,
    bar_width: u32,
}

impl<'a> BarsView<'a> {
    pub fn new(dataset: &'a Dataset, config: &Config) -> Self {
        BarsView {
            dataset,
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            bar_width: config.bar_width,
        }
    }

    /// Terminal columns `[start, end)` covered by bar `index`
    fn columns(&self, index: usize, area: Rect) -> (u16, u16) {
        let scale = |logical: u64| -> u16 {
            (logical * area.width as u64 / self.canvas_width.max(1) as u64) as u16
        };
        let left = index as u64 * self.bar_width as u64;
        let start = scale(left);
        let end = scale(left + self.bar_width as u64).max(start + 1);
        (
            area.x + start.min(area.width),
            area.x + end.min(area.width),
        )
    }

    /// Bar height in eighths of a cell, rounded to nearest
    fn eighths(&self, value: u32, area: Rect) -> u32 {
        let scaled = value as u64 * area.height as u64 * 8;
        let height = self.canvas_height.max(1) as u64;
        let eighths = (scaled + height / 2) / height;
        eighths.min(area.height as u64 * 8) as u32
    }
}

impl Widget for BarsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for (index, (value, highlight)) in self.dataset.iter().enumerate() {
            let (start, mut end) = self.columns(index, area);
            // Keep a one-column gap between bars when there is room for it
            if end - start >= 2 {
                end -= 1;
            }

            let color = DEFAULT_THEME.bar_color(highlight);
            let eighths = self.eighths(value, area);
            let full_rows = (eighths / 8) as u16;
            let remainder = (eighths % 8) as usize;

            for x in start..end {
                for row in 0..full_rows {
                    paint(buf, x, area.bottom() - 1 - row, FULL_BLOCK, color);
                }
                if remainder > 0 && full_rows < area.height {
                    paint(
                        buf,
                        x,
                        area.bottom() - 1 - full_rows,
                        PARTIAL_BLOCKS[remainder],
                        color,
                    );
                }
            }
        }
    }
}

fn paint(buf: &mut Buffer, x: u16, y: u16, symbol: &str, color: Color) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol).set_fg(color);
    }
}
