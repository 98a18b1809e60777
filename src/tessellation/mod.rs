mod sweep;

pub use sweep::Sweep;

use crate::math::{Point2, Point3, Vector3};

/// How the per-ring orientation frame derives its up vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameMode {
    /// Rotation from the travel direction alone, with a fixed world-up
    /// hint. Adequate for mostly-planar sweeps.
    Tangent,
    /// Up vector linearly interpolated between two authored endpoint up
    /// vectors and re-normalized. A simplified stand-in for parallel
    /// transport; avoids twist when the endpoints have known banking.
    ReferenceUp { start: Vector3, end: Vector3 },
}

/// Parameters controlling sweep-mesh generation.
#[derive(Debug, Clone, Copy)]
pub struct SweepParams {
    /// Number of cross-section rings sampled along the spline. Must be
    /// at least 2.
    pub ring_count: usize,
    /// Orientation-frame construction mode.
    pub frame_mode: FrameMode,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            ring_count: 16,
            frame_mode: FrameMode::Tangent,
        }
    }
}

/// Flat mesh buffers produced by a sweep, ready for a renderer or
/// collision system.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}
