//! Timing of the row fade-in and the skeleton pulse.

use std::f64::consts::PI;

/// Fade duration of a single row, in seconds.
pub const FADE_DURATION: f64 = 0.8;
/// Delay between consecutive rows, in seconds.
pub const STAGGER: f64 = 0.1;

/// Opacity of row `index`, `elapsed` seconds after content appeared.
pub fn row_opacity(elapsed: f64, index: usize) -> f32 {
    ((elapsed - index as f64 * STAGGER) / FADE_DURATION).clamp(0.0, 1.0) as f32
}

/// Whether any of `rows` rows is still fading in.
pub fn in_progress(elapsed: f64, rows: usize) -> bool {
    rows > 0 && elapsed < (rows - 1) as f64 * STAGGER + FADE_DURATION
}

/// Brightness factor of the skeleton, oscillating between 0.5 and 1.0.
pub fn pulse(time: f64) -> f32 {
    (0.75 + 0.25 * (time * PI).sin()) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_staggered() {
        assert_eq!(row_opacity(0.0, 0), 0.0);
        assert_eq!(row_opacity(0.4, 0), 0.5);
        assert_eq!(row_opacity(0.4, 4), 0.0);
        assert_eq!(row_opacity(0.8, 0), 1.0);
        assert_eq!(row_opacity(10.0, 3), 1.0);
    }

    #[test]
    fn test_animation_finishes_after_last_row() {
        assert!(!in_progress(0.0, 0));
        assert!(in_progress(0.5, 1));
        assert!(!in_progress(0.8, 1));
        assert!(in_progress(1.0, 4));
        assert!(!in_progress(1.2, 4));
    }

    #[test]
    fn test_pulse_range() {
        for step in 0..40 {
            let value = pulse(step as f64 * 0.05);
            assert!((0.5..=1.0).contains(&value));
        }
    }
}
