//! Progress and interpolation helpers for scroll animation.

use std::time::{Duration, Instant};

/// Animation progress in [0, 1] at `now`.
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Linear interpolation between two document offsets.
#[inline]
pub fn lerp_i32(from: i32, to: i32, t: f64) -> i32 {
    (from as f64 + (to - from) as f64 * t).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        let start = Instant::now();
        let duration = Duration::from_millis(100);
        assert_eq!(progress(start, start, duration), 0.0);
        assert_eq!(
            progress(start, start + Duration::from_millis(200), duration),
            1.0
        );
        assert_eq!(progress(start, start, Duration::ZERO), 1.0);
    }

    #[test]
    fn test_ease_out_cubic_boundaries() {
        assert!((ease_out_cubic(0.0)).abs() < 1e-9);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < 1e-9);
        // Ease-out front-loads the motion
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_lerp_i32() {
        assert_eq!(lerp_i32(0, 100, 0.0), 0);
        assert_eq!(lerp_i32(0, 100, 0.5), 50);
        assert_eq!(lerp_i32(0, 100, 1.0), 100);
        assert_eq!(lerp_i32(100, 0, 0.5), 50);
    }
}
