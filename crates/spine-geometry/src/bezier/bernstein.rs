//! Bernstein basis polynomials for cubic Bezier evaluation.

/// Cubic basis `[B0, B1, B2, B3]` at `t`:
/// `(1-t)^3, 3(1-t)^2 t, 3(1-t) t^2, t^3`.
pub fn cubic(t: f64) -> [f64; 4] {
    let s = 1.0 - t;
    [s * s * s, 3.0 * s * s * t, 3.0 * s * t * t, t * t * t]
}

/// Quadratic basis `[C0, C1, C2]` at `t`: `(1-t)^2, 2(1-t) t, t^2`.
///
/// Weights the three edge vectors of a cubic control polygon when
/// differentiating it.
pub fn quadratic(t: f64) -> [f64; 3] {
    let s = 1.0 - t;
    [s * s, 2.0 * s * t, t * t]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cubic_endpoints() {
        assert_eq!(cubic(0.0), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(cubic(1.0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_cubic_midpoint() {
        assert_eq!(cubic(0.5), [0.125, 0.375, 0.375, 0.125]);
    }

    #[test]
    fn test_partition_of_unity() {
        for i in 0..=16 {
            let t = i as f64 / 16.0;
            assert_abs_diff_eq!(cubic(t).iter().sum::<f64>(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(quadratic(t).iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_quadratic_values() {
        assert_eq!(quadratic(0.0), [1.0, 0.0, 0.0]);
        assert_eq!(quadratic(0.5), [0.25, 0.5, 0.25]);
        assert_eq!(quadratic(1.0), [0.0, 0.0, 1.0]);
    }
}
