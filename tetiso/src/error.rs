//! Module containing the universal error type
use crate::mesh::Edge;
use thiserror::Error;

/// Universal error type for isosurface extraction
#[derive(Error, Debug)]
pub enum Error {
    /// Extraction was requested before an input mesh was configured
    #[error("no input mesh defined")]
    NoInput,

    /// Interpolation was attempted on an edge with equal endpoint values
    #[error("cannot interpolate across edge {0}: endpoint values are equal")]
    DegenerateEdge(Edge),

    /// A crossed tetrahedron does not cross exactly 3 or 4 of its edges
    #[error(
        "cell {cell} has an invalid crossing configuration \
         ({edges} crossed edges)"
    )]
    InvalidCellConfiguration {
        /// Index of the offending cell
        cell: usize,
        /// Number of crossed edges
        edges: u32,
    },

    /// A cell references a vertex that is not in the mesh
    #[error("cell {cell} references vertex {vertex}, which is out of range")]
    BadVertex {
        /// Index of the offending cell
        cell: usize,
        /// Vertex index
        vertex: usize,
    },

    /// A cell references the same vertex more than once
    #[error("cell {0} has repeated vertices")]
    DegenerateCell(usize),

    /// The scalar field is not co-indexed with the mesh vertices
    #[error("scalar field length ({0}) does not match vertex count ({1})")]
    MismatchedField(usize, usize),
}
