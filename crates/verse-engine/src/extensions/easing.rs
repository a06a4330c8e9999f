// extensions/easing.rs
//
// Pure easing curves for channel interpolation.
// No dependencies on the clock or the draw list, just math.

use std::f32::consts::PI;

/// Easing curve applied to a normalized fraction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow start.
    QuadIn,
    /// Slow end.
    QuadOut,
    /// Slow start and end.
    QuadInOut,
    /// Sine wave easing (smooth).
    SineInOut,
    /// Material "standard" curve: accelerates quickly, settles slowly.
    /// Equivalent to `CubicBezier(0.4, 0.0, 0.2, 1.0)`.
    FastOutSlowIn,
    /// Material "decelerate" curve: starts at full speed, settles slowly.
    /// Equivalent to `CubicBezier(0.0, 0.0, 0.2, 1.0)`.
    LinearOutSlowIn,
    /// Material "accelerate" curve.
    /// Equivalent to `CubicBezier(0.4, 0.0, 1.0, 1.0)`.
    FastOutLinearIn,
    /// CSS-style cubic Bézier through (0,0), (x1,y1), (x2,y2), (1,1).
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a normalized time value `t` in [0, 1].
    /// Endpoints are exact: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,

            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }

            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,

            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, t),
            Easing::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// One coordinate of a unit cubic Bézier with control values `p1`, `p2`.
#[inline]
fn bezier_coord(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[inline]
fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Evaluate y at the curve parameter whose x equals `fraction`.
///
/// Newton-Raphson first, bisection if the slope flattens out.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let mut s = fraction;
    for _ in 0..8 {
        let err = bezier_coord(x1, x2, s) - fraction;
        if err.abs() < 1e-6 {
            return bezier_coord(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = fraction;
    for _ in 0..32 {
        let x = bezier_coord(x1, x2, s);
        if (x - fraction).abs() < 1e-6 {
            break;
        }
        if x < fraction {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_coord(y1, y2, s)
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec2 values.
#[inline]
pub fn lerp_vec2(a: glam::Vec2, b: glam::Vec2, t: f32) -> glam::Vec2 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 9] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::SineInOut,
        Easing::FastOutSlowIn,
        Easing::LinearOutSlowIn,
        Easing::FastOutLinearIn,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    #[test]
    fn linear_endpoints() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn every_curve_hits_its_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-5, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{:?} at 1", easing);
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::QuadIn.apply(-3.0), 0.0);
        assert_eq!(Easing::QuadIn.apply(7.0), 1.0);
    }

    #[test]
    fn decelerating_curves_lead_linear() {
        // Slow-in curves are ahead of linear at the midpoint
        assert!(Easing::LinearOutSlowIn.apply(0.5) > 0.5);
        assert!(Easing::FastOutSlowIn.apply(0.5) > 0.5);
        assert!(Easing::QuadOut.apply(0.5) > 0.5);
        assert!(Easing::FastOutLinearIn.apply(0.5) < 0.5);
    }

    #[test]
    fn bezier_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = Easing::FastOutSlowIn.apply(i as f32 / 100.0);
            assert!(v >= prev - 1e-5, "dip at {}: {} < {}", i, v, prev);
            prev = v;
        }
    }

    #[test]
    fn ease_interpolates() {
        let result = ease(100.0, 200.0, 0.5, Easing::Linear);
        assert!((result - 150.0).abs() < 0.001);
    }
}
