use nalgebra::UnitQuaternion;

use super::{Point2, Point3, Vector2, Vector3, TOLERANCE};

/// A position plus rotation placing a 2D profile into 3D space.
///
/// The rotation maps the profile plane's local axes so that local +z
/// points along the curve's travel direction. Frames are derived per
/// sample and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedFrame {
    pub position: Point3,
    pub rotation: UnitQuaternion<f64>,
}

impl OrientedFrame {
    /// Builds a frame at `position` looking along `forward`, with `up_hint`
    /// fixing the roll. When the hint is (nearly) parallel to `forward` a
    /// world axis is substituted so the frame stays well defined.
    #[must_use]
    pub fn new(position: Point3, forward: &Vector3, up_hint: &Vector3) -> Self {
        let up = if forward.cross(up_hint).norm_squared() < TOLERANCE {
            if forward.cross(&Vector3::y()).norm_squared() < TOLERANCE {
                Vector3::x()
            } else {
                Vector3::y()
            }
        } else {
            *up_hint
        };
        Self {
            position,
            rotation: UnitQuaternion::face_towards(forward, &up),
        }
    }

    /// Maps a profile-local 2D point (zero depth) into world space.
    #[must_use]
    pub fn local_to_world_point(&self, local: &Point2) -> Point3 {
        self.position + self.rotation * Vector3::new(local.x, local.y, 0.0)
    }

    /// Maps a profile-local 2D vector into world space. Rotation only,
    /// no translation; used for normals.
    #[must_use]
    pub fn local_to_world_vector(&self, local: &Vector2) -> Vector3 {
        self.rotation * Vector3::new(local.x, local.y, 0.0)
    }
}
