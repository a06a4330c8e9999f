//! Small 2D helpers shared by scene renderers.

use glam::Vec2;

/// Unit vector pointing from `source` to `destination`.
///
/// Coincident points (or non-finite input) yield `Vec2::ZERO` instead of NaN.
#[inline]
pub fn direction_unit(source: Vec2, destination: Vec2) -> Vec2 {
    (destination - source).normalize_or_zero()
}

/// Point on a circle of `radius` around `center` at `angle_deg`
/// (0° = +x, increasing toward +y, i.e. clockwise on a y-down surface).
#[inline]
pub fn polar_point(center: Vec2, radius: f32, angle_deg: f32) -> Vec2 {
    center + Vec2::from_angle(angle_deg.to_radians()) * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_of_coincident_points_is_zero() {
        let a = Vec2::new(12.5, -3.0);
        assert_eq!(direction_unit(a, a), Vec2::ZERO);
        assert_eq!(direction_unit(Vec2::ZERO, Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn direction_is_normalized() {
        let d = direction_unit(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0));
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!((d.x - 0.6).abs() < 1e-6);
        assert!((d.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn direction_of_non_finite_input_is_zero() {
        let d = direction_unit(Vec2::ZERO, Vec2::new(f32::NAN, 1.0));
        assert_eq!(d, Vec2::ZERO);
    }

    #[test]
    fn polar_point_at_zero_degrees_is_on_x_axis() {
        let p = polar_point(Vec2::new(100.0, 50.0), 20.0, 0.0);
        assert!((p - Vec2::new(120.0, 50.0)).length() < 1e-5);
    }

    #[test]
    fn polar_point_quarter_turn() {
        let p = polar_point(Vec2::ZERO, 10.0, 90.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 10.0).abs() < 1e-5);
    }
}
