/// Application configuration constants
///
/// Centralized configuration for the reminder core and its display boundary.

/// Window used by the home page's upcoming-reminder check, in minutes
pub const UPCOMING_WINDOW_MINUTES: u32 = 5;

/// Smallest square canvas dimension, in logical pixels
pub const MIN_CANVAS_SIZE: f64 = 600.0;

/// Approximate sidebar width subtracted from the available viewport width
pub const SIDEBAR_WIDTH: f64 = 300.0;

/// Fraction of the available width the canvas may occupy
pub const CANVAS_WIDTH_FRACTION: f64 = 0.7;

/// Fraction of the viewport height the canvas may occupy
pub const CANVAS_HEIGHT_FRACTION: f64 = 0.8;

/// Shader variant selected when the page loads
pub const DEFAULT_SHADER_ID: u8 = 1;

/// Number of shader variants the selector offers (ids run 1..=SHADER_COUNT)
pub const SHADER_COUNT: u8 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upcoming_window_is_positive() {
        assert!(UPCOMING_WINDOW_MINUTES > 0);
    }

    #[test]
    fn test_canvas_fractions_are_proper() {
        assert!(CANVAS_WIDTH_FRACTION > 0.0 && CANVAS_WIDTH_FRACTION <= 1.0);
        assert!(CANVAS_HEIGHT_FRACTION > 0.0 && CANVAS_HEIGHT_FRACTION <= 1.0);
    }

    #[test]
    fn test_default_shader_is_selectable() {
        assert!(DEFAULT_SHADER_ID >= 1);
        assert!(DEFAULT_SHADER_ID <= SHADER_COUNT);
    }
}
