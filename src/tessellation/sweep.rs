use crate::error::{Result, SweepError};
use crate::geometry::{BezierSpline, CrossSection};
use crate::math::frame::OrientedFrame;
use crate::math::{Point2, Vector3, TOLERANCE};

use super::{FrameMode, SweepParams, TriangleMesh};

/// Segment count for the piecewise-linear spline-length estimate.
const LENGTH_SAMPLES: usize = 8;

/// Sweeps a 2D cross-section profile along a spline, stitching the
/// sampled rings into an indexed triangle mesh.
///
/// Rings are sampled at evenly spaced parameter values, each profile
/// vertex is mapped through the ring's oriented frame, and consecutive
/// rings are connected with two triangles per drawn profile edge. The
/// longitudinal UV coordinate is scaled by an approximate spline length
/// so texture tiling keeps a consistent aspect ratio along and across
/// the sweep.
#[derive(Debug, Clone, Copy)]
pub struct Sweep {
    params: SweepParams,
}

impl Sweep {
    /// Creates a new `Sweep` operation.
    #[must_use]
    pub fn new(params: SweepParams) -> Self {
        Self { params }
    }

    /// Executes the sweep, returning fresh mesh buffers.
    ///
    /// Rings where the spline tangent is degenerate reuse the previous
    /// ring's direction (+x before the first valid ring), so generation
    /// is total for structurally valid inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the ring count is below 2 or the profile has
    /// zero total edge length.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn execute(&self, spline: &BezierSpline, profile: &CrossSection) -> Result<TriangleMesh> {
        let ring_count = self.params.ring_count;
        if ring_count < 2 {
            return Err(SweepError::TooFewRings(ring_count).into());
        }
        let u_span = profile.total_edge_length();
        if u_span < TOLERANCE {
            return Err(SweepError::ZeroPerimeter.into());
        }

        let length = approximate_length(spline);

        let mut mesh = TriangleMesh::default();
        mesh.vertices.reserve(ring_count * profile.vertex_count());
        mesh.normals.reserve(ring_count * profile.vertex_count());
        mesh.uvs.reserve(ring_count * profile.vertex_count());
        mesh.indices.reserve((ring_count - 1) * profile.edges().len() * 2);

        let mut direction = Vector3::x();
        for ring in 0..ring_count {
            let t = ring as f64 / (ring_count - 1) as f64;
            if let Ok(d) = spline.direction(t) {
                direction = d;
            }
            let up = self.up_vector(t);
            let frame = OrientedFrame::new(spline.position(t), &direction, &up);
            let v = t * length / u_span;

            for vertex in profile.vertices() {
                mesh.vertices.push(frame.local_to_world_point(&vertex.point));
                mesh.normals.push(frame.local_to_world_vector(&vertex.normal));
                mesh.uvs.push(Point2::new(vertex.u, v));
            }
        }

        let stride = profile.vertex_count() as u32;
        for ring in 0..ring_count - 1 {
            let root = ring as u32 * stride;
            let next = root + stride;
            for &[a, b] in profile.edges() {
                mesh.indices.push([root + a, next + a, next + b]);
                mesh.indices.push([root + a, next + b, root + b]);
            }
        }

        Ok(mesh)
    }

    fn up_vector(&self, t: f64) -> Vector3 {
        match self.params.frame_mode {
            FrameMode::Tangent => Vector3::y(),
            FrameMode::ReferenceUp { start, end } => {
                let up = start.lerp(&end, t);
                let len = up.norm();
                if len < TOLERANCE {
                    Vector3::y()
                } else {
                    up / len
                }
            }
        }
    }
}

/// Piecewise-linear spline-length estimate over a fixed number of
/// samples. An approximation, not exact arc length; it only scales the
/// longitudinal texture coordinate.
#[allow(clippy::cast_precision_loss)]
fn approximate_length(spline: &BezierSpline) -> f64 {
    let mut length = 0.0;
    let mut previous = spline.position(0.0);
    for i in 1..=LENGTH_SAMPLES {
        let current = spline.position(i as f64 / LENGTH_SAMPLES as f64);
        length += (current - previous).norm();
        previous = current;
    }
    length
}
