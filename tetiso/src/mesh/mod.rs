//! Volume meshes and the scalar fields sampled on them
//!
//! Extraction only reads its inputs, through the [`VolumeMesh`] and
//! [`ScalarField`] traits; the host application is free to store them however
//! it likes.  [`TetMesh`] is a simple owned implementation.
use crate::Error;
use nalgebra::Point3;

pub mod types;
pub use types::{Edge, LocalEdge, LocalVertex, TET_EDGES, Tet};

/// Read-only access to a tetrahedral volume mesh
pub trait VolumeMesh: Sync {
    /// Returns the number of vertices
    fn vertex_count(&self) -> usize;

    /// Returns the number of tetrahedral cells
    fn cell_count(&self) -> usize;

    /// Returns the position of the given vertex
    fn position(&self, v: usize) -> Point3<f64>;

    /// Returns the four vertex ids of the given cell
    fn cell(&self, c: usize) -> Tet;

    /// Returns the six edges of the given cell, in local edge order
    ///
    /// Extraction reads crossed edges through this method.  Overrides may
    /// change how edges are looked up, but entry `i` must join the corners
    /// given by [`TET_EDGES[i]`](TET_EDGES), in either direction.
    fn edges(&self, c: usize) -> [Edge; 6] {
        self.cell(c).edges()
    }
}

/// Read-only access to a scalar field, indexed by vertex id
pub trait ScalarField: Sync {
    /// Returns the number of values in the field
    fn len(&self) -> usize;

    /// Returns the value at the given vertex
    fn value(&self, v: usize) -> f64;

    /// Checks whether the field is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScalarField for [f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }
    fn value(&self, v: usize) -> f64 {
        self[v]
    }
}

impl ScalarField for Vec<f64> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
    fn value(&self, v: usize) -> f64 {
        self[v]
    }
}

////////////////////////////////////////////////////////////////////////////////

/// An owned tetrahedral mesh
#[derive(Clone, Debug, Default)]
pub struct TetMesh {
    vertices: Vec<Point3<f64>>,
    cells: Vec<Tet>,
}

impl TetMesh {
    /// Builds a new mesh, checking that every cell is well-formed
    ///
    /// Each cell must reference 4 distinct vertices, all of which must be
    /// present in `vertices`.
    pub fn new(
        vertices: Vec<Point3<f64>>,
        cells: Vec<Tet>,
    ) -> Result<Self, Error> {
        for (i, c) in cells.iter().enumerate() {
            if let Some(&vertex) = c.0.iter().find(|&&v| v >= vertices.len()) {
                return Err(Error::BadVertex { cell: i, vertex });
            }
            if c.is_degenerate() {
                return Err(Error::DegenerateCell(i));
            }
        }
        Ok(Self { vertices, cells })
    }

    /// Builds a structured grid of `n³` cubes spanning the given box
    ///
    /// Each cube is split into six tetrahedra around its main diagonal (the
    /// Kuhn subdivision); since every cube is split the same way, neighboring
    /// cells always share whole faces.
    ///
    /// Vertex `(i, j, k)` has index `i + j * (n + 1) + k * (n + 1)²`.
    pub fn grid(n: usize, lower: Point3<f64>, upper: Point3<f64>) -> Self {
        let size = n + 1;
        let step = (upper - lower) / n.max(1) as f64;
        let mut vertices = Vec::with_capacity(size.pow(3));
        for k in 0..size {
            for j in 0..size {
                for i in 0..size {
                    vertices.push(Point3::new(
                        lower.x + step.x * i as f64,
                        lower.y + step.y * j as f64,
                        lower.z + step.z * k as f64,
                    ));
                }
            }
        }

        // Cube corners are numbered with X = 1, Y = 2, Z = 4; each tetrahedron
        // walks from corner 0 to corner 7 along one permutation of the axes.
        const PATHS: [[usize; 3]; 6] = [
            [1, 2, 4],
            [1, 4, 2],
            [2, 1, 4],
            [2, 4, 1],
            [4, 1, 2],
            [4, 2, 1],
        ];
        let mut cells = Vec::with_capacity(6 * n.pow(3));
        for k in 0..n {
            for j in 0..n {
                for i in 0..n {
                    let corner = |c: usize| {
                        (i + (c & 1)) + (j + ((c >> 1) & 1)) * size
                            + (k + ((c >> 2) & 1)) * size * size
                    };
                    for [a, b, _] in PATHS {
                        cells.push(Tet::new(
                            corner(0),
                            corner(a),
                            corner(a | b),
                            corner(7),
                        ));
                    }
                }
            }
        }
        Self { vertices, cells }
    }

    /// Samples a function at every vertex, returning a co-indexed field
    pub fn sample<F: Fn(&Point3<f64>) -> f64>(&self, f: F) -> Vec<f64> {
        self.vertices.iter().map(f).collect()
    }

    /// Returns the vertex positions
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Returns the cells
    pub fn cells(&self) -> &[Tet] {
        &self.cells
    }
}

impl VolumeMesh for TetMesh {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
    fn cell_count(&self) -> usize {
        self.cells.len()
    }
    fn position(&self, v: usize) -> Point3<f64> {
        self.vertices[v]
    }
    fn cell(&self, c: usize) -> Tet {
        self.cells[c]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn unit_tet() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn bad_vertex() {
        let r = TetMesh::new(unit_tet(), vec![Tet::new(0, 1, 2, 4)]);
        assert!(matches!(r, Err(Error::BadVertex { cell: 0, vertex: 4 })));
    }

    #[test]
    fn repeated_vertex() {
        let r = TetMesh::new(
            unit_tet(),
            vec![Tet::new(0, 1, 2, 3), Tet::new(0, 1, 2, 1)],
        );
        assert!(matches!(r, Err(Error::DegenerateCell(1))));
    }

    #[test]
    fn grid_counts() {
        let mesh = TetMesh::grid(
            3,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 3.0, 3.0),
        );
        assert_eq!(mesh.vertex_count(), 64);
        assert_eq!(mesh.cell_count(), 6 * 27);
        assert_eq!(mesh.position(1), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(mesh.position(4), Point3::new(0.0, 1.0, 0.0));
        assert_eq!(mesh.position(16), Point3::new(0.0, 0.0, 1.0));
        assert_eq!(mesh.position(63), Point3::new(3.0, 3.0, 3.0));

        // Every cell must be valid
        let r = TetMesh::new(mesh.vertices.clone(), mesh.cells.clone());
        assert!(r.is_ok());
    }

    #[test]
    fn grid_volume() {
        let mesh = TetMesh::grid(
            2,
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, 1.0, 1.0),
        );
        let volume: f64 = mesh
            .cells()
            .iter()
            .map(|t| {
                let [a, b, c, d] = t.0.map(|v| mesh.position(v));
                ((b - a).cross(&(c - a)).dot(&(d - a)) / 6.0).abs()
            })
            .sum();
        approx::assert_relative_eq!(volume, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn grid_faces_are_shared() {
        // In a conforming mesh, each triangular face belongs to one cell (on
        // the boundary) or two cells (in the interior).
        let mesh = TetMesh::grid(
            2,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        );
        let mut faces: HashMap<[usize; 3], usize> = HashMap::new();
        for t in mesh.cells() {
            for skip in 0..4 {
                let mut f = [0; 3];
                let mut i = 0;
                for (j, v) in t.0.iter().enumerate() {
                    if j != skip {
                        f[i] = *v;
                        i += 1;
                    }
                }
                f.sort();
                *faces.entry(f).or_default() += 1;
            }
        }
        let boundary = faces.values().filter(|&&c| c == 1).count();
        assert!(faces.values().all(|&c| c == 1 || c == 2));

        // Each of the 6 sides has 2 × 2 squares, each split into 2 triangles
        assert_eq!(boundary, 6 * 4 * 2);
    }

    #[test]
    fn slice_field() {
        let values = [1.0, 2.0, 3.0];
        let field: &[f64] = &values;
        assert_eq!(ScalarField::len(field), 3);
        assert_eq!(field.value(1), 2.0);
        assert!(!ScalarField::is_empty(field));
    }

    #[test]
    fn sample() {
        let mesh =
            TetMesh::new(unit_tet(), vec![Tet::new(0, 1, 2, 3)]).unwrap();
        let field = mesh.sample(|p| p.x + 2.0 * p.y + 3.0 * p.z);
        assert_eq!(field, vec![0.0, 1.0, 2.0, 3.0]);
    }
}
