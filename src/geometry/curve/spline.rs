use crate::error::{Result, SplineError};
use crate::geometry::joint::{self, AnchorId};
use crate::math::{bezier, Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// Policy governing how the handle pair flanking an anchor is kept
/// consistent when either side is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContinuityMode {
    /// Handles move independently.
    #[default]
    Free,
    /// Handle directions stay collinear through the anchor; each handle
    /// keeps its own distance.
    Aligned,
    /// Handles stay equal-and-opposite displacements from the anchor.
    Mirrored,
}

/// A piecewise cubic Bézier spline with per-anchor continuity constraints.
///
/// The control-point array always holds `3k + 1` points for `k` curve
/// segments: anchors at indices divisible by 3, flanked by tangent
/// handles. One continuity mode is stored per anchor. When the spline is
/// looped the first and last anchors are identified: edits to one are
/// mirrored to the other and tangent enforcement wraps across the array
/// boundary.
#[derive(Debug, Clone)]
pub struct BezierSpline {
    points: Vec<Point3>,
    modes: Vec<ContinuityMode>,
    looped: bool,
}

impl Default for BezierSpline {
    fn default() -> Self {
        Self::new()
    }
}

impl BezierSpline {
    /// Creates the default single-segment spline: four collinear points
    /// along the x-axis with both anchors `Free`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: vec![
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(3.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
            ],
            modes: vec![ContinuityMode::Free, ContinuityMode::Free],
            looped: false,
        }
    }

    /// Creates a spline from explicit control points and per-anchor modes.
    ///
    /// # Errors
    ///
    /// Returns an error if the point count is not of the form `3k + 1`
    /// (`k >= 1`), or if the mode count does not match the anchor count.
    pub fn from_points(points: Vec<Point3>, modes: Vec<ContinuityMode>) -> Result<Self> {
        let count = points.len();
        if count < 4 || count % 3 != 1 {
            return Err(SplineError::InvalidPointCount { count }.into());
        }
        let anchor_count = count / 3 + 1;
        if modes.len() != anchor_count {
            return Err(SplineError::ModeCountMismatch {
                expected: anchor_count,
                found: modes.len(),
            }
            .into());
        }
        Ok(Self {
            points,
            modes,
            looped: false,
        })
    }

    /// Number of control points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of cubic segments forming the spline.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    #[must_use]
    pub fn is_looped(&self) -> bool {
        self.looped
    }

    /// All control points, anchors and handles interleaved.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::OutOfRange`] if `index` exceeds the point count.
    pub fn control_point(&self, index: usize) -> Result<Point3> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    /// Moves the control point at `index`.
    ///
    /// Moving an anchor drags its flanking handles rigidly so the implied
    /// tangent translates with the anchor. On a looped spline, moving the
    /// first or last anchor also moves its identified partner and the
    /// handle adjacent to it. The anchor's continuity constraint is
    /// re-enforced afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::OutOfRange`] if `index` exceeds the point count.
    pub fn set_control_point(&mut self, index: usize, point: Point3) -> Result<()> {
        self.check_index(index)?;
        self.set_control_point_inner(index, point);
        Ok(())
    }

    fn set_control_point_inner(&mut self, index: usize, point: Point3) {
        if index % 3 == 0 {
            let delta = point - self.points[index];
            let last = self.points.len() - 1;
            if self.looped {
                if index == 0 {
                    self.points[1] += delta;
                    self.points[last - 1] += delta;
                    self.points[last] = point;
                } else if index == last {
                    self.points[0] = point;
                    self.points[1] += delta;
                    self.points[index - 1] += delta;
                } else {
                    self.points[index - 1] += delta;
                    self.points[index + 1] += delta;
                }
            } else {
                if index > 0 {
                    self.points[index - 1] += delta;
                }
                if index < last {
                    self.points[index + 1] += delta;
                }
            }
        }

        self.points[index] = point;
        self.enforce_continuity(index);
    }

    /// Returns the continuity mode of the anchor governing `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::OutOfRange`] if `index` exceeds the point count.
    pub fn continuity_mode(&self, index: usize) -> Result<ContinuityMode> {
        self.check_index(index)?;
        Ok(self.modes[AnchorId::of_point(index).ordinal()])
    }

    /// Sets the continuity mode of the anchor governing `index` and
    /// re-enforces its constraint, treating the point at `index` as the
    /// fixed reference. On a looped spline, assignments to the first or
    /// last anchor are mirrored to the other end.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::OutOfRange`] if `index` exceeds the point count.
    pub fn set_continuity_mode(&mut self, index: usize, mode: ContinuityMode) -> Result<()> {
        self.check_index(index)?;
        let anchor = AnchorId::of_point(index);
        self.modes[anchor.ordinal()] = mode;
        if self.looped {
            let last = self.modes.len() - 1;
            if anchor.is_first() {
                self.modes[last] = mode;
            } else if anchor.is_last(self.modes.len()) {
                self.modes[0] = mode;
            }
        }
        self.enforce_continuity(index);
        Ok(())
    }

    /// Opens or closes the loop. Closing forces the last anchor's mode to
    /// match the first and immediately re-propagates closure, so the end
    /// anchors coincide from this point on.
    pub fn set_looped(&mut self, looped: bool) {
        self.looped = looped;
        if looped {
            let last = self.modes.len() - 1;
            self.modes[last] = self.modes[0];
            let first = self.points[0];
            self.set_control_point_inner(0, first);
        }
    }

    /// Appends one cubic segment continuing from the last anchor along
    /// the end tangent with unit spacing. The new points are placeholders
    /// meant for subsequent editing. The new anchor inherits the previous
    /// end mode; on a looped spline the loop is re-closed afterwards.
    pub fn append_segment(&mut self) {
        let last_point = self.points[self.points.len() - 1];
        let step = self.direction(1.0).unwrap_or_else(|_| Vector3::x());
        for i in 1..=3 {
            self.points.push(last_point + step * f64::from(i));
        }

        let end_mode = self.modes[self.modes.len() - 1];
        self.modes.push(end_mode);
        self.enforce_continuity(self.points.len() - 4);

        if self.looped {
            let last = self.points.len() - 1;
            self.points[last] = self.points[0];
            let last_mode = self.modes.len() - 1;
            self.modes[last_mode] = self.modes[0];
            self.enforce_continuity(0);
        }
    }

    /// Evaluates the spline position at `t` in `[0, 1]` (clamped).
    #[must_use]
    pub fn position(&self, t: f64) -> Point3 {
        let (i, u) = self.locate(t);
        bezier::point(
            &self.points[i],
            &self.points[i + 1],
            &self.points[i + 2],
            &self.points[i + 3],
            u,
        )
    }

    /// Evaluates the first derivative at `t` in `[0, 1]` (clamped), with
    /// respect to the local segment parameter. Not normalized.
    #[must_use]
    pub fn velocity(&self, t: f64) -> Vector3 {
        let (i, u) = self.locate(t);
        bezier::first_derivative(
            &self.points[i],
            &self.points[i + 1],
            &self.points[i + 2],
            &self.points[i + 3],
            u,
        )
    }

    /// Unit travel direction at `t`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::DegenerateTangent`] when the velocity is
    /// zero-length at the sampled parameter. Callers needing a total
    /// function should substitute their own fallback direction.
    pub fn direction(&self, t: f64) -> Result<Vector3> {
        let velocity = self.velocity(t);
        let len = velocity.norm();
        if len < TOLERANCE {
            return Err(SplineError::DegenerateTangent { t }.into());
        }
        Ok(velocity / len)
    }

    /// Maps global `t` to (segment start index, local parameter). `t == 1`
    /// lands on the last segment with local parameter 1.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn locate(&self, t: f64) -> (usize, f64) {
        let curve_count = self.curve_count();
        let scaled = t.clamp(0.0, 1.0) * curve_count as f64;
        let seg = (scaled.floor() as usize).min(curve_count - 1);
        (seg * 3, scaled - seg as f64)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.points.len() {
            return Err(SplineError::OutOfRange {
                index,
                count: self.points.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Re-applies the continuity constraint of the anchor governing
    /// `index`, treating the point at `index` as the fixed side. Free
    /// anchors and the unconstrained open ends are left alone.
    fn enforce_continuity(&mut self, index: usize) {
        let anchor = AnchorId::of_point(index);
        let mode = self.modes[anchor.ordinal()];
        if mode == ContinuityMode::Free
            || (!self.looped && (anchor.is_first() || anchor.is_last(self.modes.len())))
        {
            return;
        }

        let pair = joint::resolve_handles(index, anchor, self.points.len());
        let axis = self.points[anchor.point_index()];
        let mut tangent = axis - self.points[pair.fixed];

        if mode == ContinuityMode::Aligned {
            // Align direction only; the enforced handle keeps its length.
            let fixed_len = tangent.norm();
            if fixed_len > TOLERANCE {
                let kept_len = (axis - self.points[pair.enforced]).norm();
                tangent = tangent / fixed_len * kept_len;
            }
        }

        self.points[pair.enforced] = axis + tangent;
    }
}

impl Curve for BezierSpline {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(self.position(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        self.direction(t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        self.looped
    }
}
