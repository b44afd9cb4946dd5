//! Animation timing helpers
//!
//! All functions operate on plain `f64` time values, usually in `[0, 1]`.

/// Symmetric ease-in/ease-out curve
///
/// `0.5 · (2t)^p` on the first half, mirrored on the second.
/// Maps 0 → 0, 0.5 → 0.5 and 1 → 1 for any `power > 0`.
pub fn ease_in_out(t: f64, power: f64) -> f64 {
    if t < 0.5 {
        0.5 * (2.0 * t).powf(power)
    } else {
        1.0 - 0.5 * (2.0 * (1.0 - t)).powf(power)
    }
}

/// Remap `value` from `[lo, hi]` onto `[0, 1]`
///
/// Values that drift outside the interval (floating-point round-off at a
/// wrap, mostly) are clamped rather than rejected. A degenerate interval
/// maps everything to 0.
pub fn divide_interval(value: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span <= 0.0 {
        return 0.0;
    }
    ((value - lo) / span).clamp(0.0, 1.0)
}

/// Linear interpolation `a + (b - a) · t`
#[inline]
pub fn slurp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Triangle wave over one cycle: rises linearly 0 → 1 on `[0, pivot]`,
/// then falls 1 → 0 on `[pivot, 1]`
pub fn ping_pong(phase: f64, pivot: f64) -> f64 {
    if phase < pivot {
        divide_interval(phase, 0.0, pivot)
    } else {
        1.0 - divide_interval(phase, pivot, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_ease_fixed_points() {
        for &p in &[0.5, 1.0, 2.0, 3.0, 7.5] {
            assert_eq!(ease_in_out(0.0, p), 0.0);
            assert_eq!(ease_in_out(1.0, p), 1.0);
            assert!((ease_in_out(0.5, p) - 0.5).abs() < EPSILON);
        }
    }

    #[test]
    fn test_ease_symmetric() {
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let lhs = ease_in_out(t, 3.0);
            let rhs = 1.0 - ease_in_out(1.0 - t, 3.0);
            assert!((lhs - rhs).abs() < EPSILON, "t={}", t);
        }
    }

    #[test]
    fn test_ease_monotonic() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = ease_in_out(i as f64 / 100.0, 2.5);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_ease_power_one_is_identity() {
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((ease_in_out(t, 1.0) - t).abs() < EPSILON);
        }
    }

    #[test]
    fn test_divide_interval() {
        assert_eq!(divide_interval(2.0, 2.0, 6.0), 0.0);
        assert_eq!(divide_interval(6.0, 2.0, 6.0), 1.0);
        assert_eq!(divide_interval(3.0, 2.0, 6.0), 0.25);
        assert_eq!(divide_interval(5.0, 2.0, 6.0), 0.75);
    }

    #[test]
    fn test_divide_interval_clamps() {
        assert_eq!(divide_interval(1.0 + 1e-15, 0.0, 1.0), 1.0);
        assert_eq!(divide_interval(-0.1, 0.0, 1.0), 0.0);
        assert_eq!(divide_interval(5.0, 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_slurp() {
        assert_eq!(slurp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(slurp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(slurp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(slurp(1.0, 0.0, 0.25), 0.75);
    }

    #[test]
    fn test_ping_pong() {
        assert_eq!(ping_pong(0.0, 0.5), 0.0);
        assert_eq!(ping_pong(0.25, 0.5), 0.5);
        assert_eq!(ping_pong(0.5, 0.5), 1.0);
        assert_eq!(ping_pong(0.75, 0.5), 0.5);
        // Approaches 0 again just before the wrap
        assert!(ping_pong(0.999, 0.85) < 0.01);
    }

    #[test]
    fn test_ping_pong_full_pivot_only_rises() {
        assert_eq!(ping_pong(0.5, 1.0), 0.5);
        assert!(ping_pong(0.99, 1.0) > 0.98);
    }
}
