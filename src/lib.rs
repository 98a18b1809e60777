pub mod error;
pub mod geometry;
pub mod math;
pub mod tessellation;
pub mod traverse;

pub use error::{LoftlineError, Result};
