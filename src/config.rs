//! Fixed geometry and pacing for the visualiser
//!
//! All sizes are in logical canvas units. The terminal renderer scales the
//! logical canvas onto whatever area it is given, so these numbers describe
//! proportions rather than pixels.

/// Logical canvas width
pub const CANVAS_WIDTH: u32 = 900;

/// Logical canvas height
pub const CANVAS_HEIGHT: u32 = 500;

/// Width of a single bar; the bar count is `CANVAS_WIDTH / BAR_WIDTH`
pub const BAR_WIDTH: u32 = 20;

/// Smallest generated bar value (inclusive)
pub const MIN_BAR_VALUE: u32 = 10;

/// Largest generated bar value (inclusive)
pub const MAX_BAR_VALUE: u32 = 350;

/// Tick cap while a sort is animating
pub const ANIMATION_FPS: u32 = 50;

/// Tick cap for the post-sort sweep
pub const FINISH_FPS: u32 = 1000;

/// Runtime configuration assembled from defaults and command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub bar_width: u32,
    pub min_value: u32,
    pub max_value: u32,
    pub animation_fps: u32,
    pub finish_fps: u32,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Config {
    /// Number of bars that fit on the canvas
    pub fn bar_count(&self) -> usize {
        (self.canvas_width / self.bar_width) as usize
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            bar_width: BAR_WIDTH,
            min_value: MIN_BAR_VALUE,
            max_value: MAX_BAR_VALUE,
            animation_fps: ANIMATION_FPS,
            finish_fps: FINISH_FPS,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bar_count() {
        assert_eq!(Config::default().bar_count(), 45);
    }

    #[test]
    fn test_tallest_bar_fits_canvas() {
        let config = Config::default();
        assert!(config.max_value <= config.canvas_height);
        assert!(config.min_value > 0);
    }
}
