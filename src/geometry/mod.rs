pub mod curve;
pub mod joint;
pub mod profile;

pub use curve::{BezierSpline, ContinuityMode, Curve, CurveDomain};
pub use profile::{CrossSection, ProfileVertex};
