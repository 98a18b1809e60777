//! Cubic Bézier evaluation over a single 4-point segment.

use super::{Point3, Vector3};

/// Evaluates the cubic Bernstein basis at `t` over control points `p0..p3`.
///
/// `t` is the local segment parameter; callers are expected to clamp it
/// to `[0, 1]` before evaluation.
#[must_use]
pub fn point(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3, t: f64) -> Point3 {
    let one_minus = 1.0 - t;
    let b0 = one_minus * one_minus * one_minus;
    let b1 = 3.0 * one_minus * one_minus * t;
    let b2 = 3.0 * one_minus * t * t;
    let b3 = t * t * t;
    Point3::from(p0.coords * b0 + p1.coords * b1 + p2.coords * b2 + p3.coords * b3)
}

/// First derivative of the cubic at `t`, with respect to the local
/// segment parameter. Not normalized.
#[must_use]
pub fn first_derivative(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3, t: f64) -> Vector3 {
    let one_minus = 1.0 - t;
    (p1 - p0) * (3.0 * one_minus * one_minus)
        + (p2 - p1) * (6.0 * one_minus * t)
        + (p3 - p2) * (3.0 * t * t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn collinear_x() -> [Point3; 4] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn endpoints_interpolate() {
        let [p0, p1, p2, p3] = collinear_x();
        assert!((point(&p0, &p1, &p2, &p3, 0.0) - p0).norm() < TOLERANCE);
        assert!((point(&p0, &p1, &p2, &p3, 1.0) - p3).norm() < TOLERANCE);
    }

    #[test]
    fn uniform_points_give_linear_parametrization() {
        let [p0, p1, p2, p3] = collinear_x();
        let mid = point(&p0, &p1, &p2, &p3, 0.5);
        assert!((mid - Point3::new(1.5, 0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn derivative_of_uniform_segment_is_constant() {
        let [p0, p1, p2, p3] = collinear_x();
        // Each control leg is (1,0,0); the Bernstein weights sum to 3.
        for t in [0.0, 0.25, 0.5, 1.0] {
            let v = first_derivative(&p0, &p1, &p2, &p3, t);
            assert!((v - Vector3::new(3.0, 0.0, 0.0)).norm() < TOLERANCE, "t={t}");
        }
    }

    #[test]
    fn derivative_at_start_points_toward_first_handle() {
        let p0 = Point3::new(0.0, 0.0, 0.0);
        let p1 = Point3::new(0.0, 2.0, 0.0);
        let p2 = Point3::new(1.0, 3.0, 0.0);
        let p3 = Point3::new(2.0, 3.0, 0.0);
        let v = first_derivative(&p0, &p1, &p2, &p3, 0.0);
        assert!((v - Vector3::new(0.0, 6.0, 0.0)).norm() < TOLERANCE);
    }
}
