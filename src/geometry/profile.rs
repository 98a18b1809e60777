use crate::error::{ProfileError, Result};
use crate::math::{Point2, Vector2};

/// One vertex of a 2D cross-section profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileVertex {
    /// Position in the profile plane.
    pub point: Point2,
    /// Outward normal in the profile plane.
    pub normal: Vector2,
    /// Transverse texture coordinate.
    pub u: f64,
}

impl ProfileVertex {
    #[must_use]
    pub fn new(point: Point2, normal: Vector2, u: f64) -> Self {
        Self { point, normal, u }
    }
}

/// A 2D cross-section swept along a spline to form a ribbon or tube.
///
/// The drawn/extruded edges are explicit index pairs into the vertex
/// list; the profile need not be a closed polygon. Authored offline and
/// immutable once constructed.
#[derive(Debug, Clone)]
pub struct CrossSection {
    vertices: Vec<ProfileVertex>,
    edges: Vec<[u32; 2]>,
}

impl CrossSection {
    /// Creates a profile from vertices and a flat list of edge indices,
    /// two per drawn edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the index list has odd length or any index
    /// exceeds the vertex count. Nothing is stored on failure.
    pub fn new(vertices: Vec<ProfileVertex>, line_indices: &[u32]) -> Result<Self> {
        if line_indices.len() % 2 != 0 {
            return Err(ProfileError::OddIndexCount {
                count: line_indices.len(),
            }
            .into());
        }
        for &index in line_indices {
            if index as usize >= vertices.len() {
                return Err(ProfileError::IndexOutOfRange {
                    index,
                    vertex_count: vertices.len(),
                }
                .into());
            }
        }
        let edges = line_indices
            .chunks_exact(2)
            .map(|pair| [pair[0], pair[1]])
            .collect();
        Ok(Self { vertices, edges })
    }

    /// A flat two-vertex ribbon profile of the given half width, normals
    /// facing profile-local +y. Handy as a minimal road/band shape.
    #[must_use]
    pub fn ribbon(half_width: f64) -> Self {
        let up = Vector2::y();
        Self {
            vertices: vec![
                ProfileVertex::new(Point2::new(-half_width, 0.0), up, 0.0),
                ProfileVertex::new(Point2::new(half_width, 0.0), up, 1.0),
            ],
            edges: vec![[0, 1]],
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn vertices(&self) -> &[ProfileVertex] {
        &self.vertices
    }

    /// Drawn edges as index pairs.
    #[must_use]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Total Euclidean length over the drawn edges. Used to normalize
    /// the sweep's longitudinal texture coordinate against the profile's
    /// transverse perimeter.
    #[must_use]
    pub fn total_edge_length(&self) -> f64 {
        self.edges
            .iter()
            .map(|&[a, b]| {
                (self.vertices[a as usize].point - self.vertices[b as usize].point).norm()
            })
            .sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LoftlineError;

    fn square_vertices() -> Vec<ProfileVertex> {
        vec![
            ProfileVertex::new(Point2::new(-1.0, -1.0), Vector2::new(0.0, -1.0), 0.0),
            ProfileVertex::new(Point2::new(1.0, -1.0), Vector2::new(1.0, 0.0), 0.25),
            ProfileVertex::new(Point2::new(1.0, 1.0), Vector2::new(0.0, 1.0), 0.5),
            ProfileVertex::new(Point2::new(-1.0, 1.0), Vector2::new(-1.0, 0.0), 0.75),
        ]
    }

    #[test]
    fn odd_index_list_is_rejected() {
        let r = CrossSection::new(square_vertices(), &[0, 1, 2]);
        assert!(matches!(
            r,
            Err(LoftlineError::Profile(ProfileError::OddIndexCount { count: 3 }))
        ));
    }

    #[test]
    fn out_of_bounds_index_is_rejected() {
        let r = CrossSection::new(square_vertices(), &[0, 4]);
        assert!(matches!(
            r,
            Err(LoftlineError::Profile(ProfileError::IndexOutOfRange {
                index: 4,
                vertex_count: 4
            }))
        ));
    }

    #[test]
    fn open_profiles_are_valid() {
        let p = CrossSection::new(square_vertices(), &[0, 1, 1, 2]).unwrap();
        assert_eq!(p.vertex_count(), 4);
        assert_eq!(p.edges().len(), 2);
    }

    #[test]
    fn total_edge_length_sums_pairs() {
        // Closed unit-2 square: perimeter 8.
        let p = CrossSection::new(square_vertices(), &[0, 1, 1, 2, 2, 3, 3, 0]).unwrap();
        assert!((p.total_edge_length() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn ribbon_spans_unit_u() {
        let p = CrossSection::ribbon(0.5);
        assert_eq!(p.vertex_count(), 2);
        assert!((p.total_edge_length() - 1.0).abs() < 1e-12);
        assert!((p.vertices()[0].u - 0.0).abs() < 1e-12);
        assert!((p.vertices()[1].u - 1.0).abs() < 1e-12);
    }
}
