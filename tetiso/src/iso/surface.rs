//! Output surface type
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh approximating a level set
///
/// Every triangle references three distinct, valid indices into `points`, and
/// `scalars` carries one value per point (the level set's target value, so
/// that downstream consumers can color the surface).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Point positions
    pub points: Vec<Point3<f64>>,
    /// Triangles, as indices into `points`
    pub triangles: Vec<Vector3<usize>>,
    /// Per-point scalar attribute
    pub scalars: Vec<f64>,
}

impl Surface {
    /// Builds a new empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether the surface has no triangles
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the corner positions of the given triangle
    pub fn triangle(&self, i: usize) -> [Point3<f64>; 3] {
        let t = self.triangles[i];
        [self.points[t.x], self.points[t.y], self.points[t.z]]
    }

    /// Returns the number of bytes allocated by this surface
    pub fn memory_usage(&self) -> usize {
        self.points.capacity() * std::mem::size_of::<Point3<f64>>()
            + self.triangles.capacity() * std::mem::size_of::<Vector3<usize>>()
            + self.scalars.capacity() * std::mem::size_of::<f64>()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serde_smoke() {
        let s = Surface {
            points: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            triangles: vec![Vector3::new(0, 1, 2)],
            scalars: vec![0.25; 3],
        };
        let bytes = bincode::serialize(&s).unwrap();
        let t: Surface = bincode::deserialize(&bytes).unwrap();
        assert_eq!(s, t);
        assert_eq!(t.triangle(0)[1], Point3::new(1.0, 0.0, 0.0));
        assert!(!t.is_empty());
        assert!(Surface::new().is_empty());
    }
}
