//! Strongly-typed indexes for tetrahedral cells
//!
//! Corners and edges of a tetrahedron are numbered locally; corner `i` of a
//! [`Tet`] is its `i`'th vertex id, and the six edges are numbered as in
//! [`TET_EDGES`]:
//!
//! ```text
//!              3
//!             /|\
//!          2 / | \ 5
//!           /  |4 \
//!          0---|---2
//!           \  |  /
//!          0 \ | / 3
//!             \|/
//!              1
//! ```
//!
//! (the horizontal line from corner 0 to corner 2 is edge 1)
//!
//! With this numbering, edges `e` and `5 - e` are opposite, i.e. they share
//! no corner.
use serde::{Deserialize, Serialize};

/// Local corner pairs for the six edges of a tetrahedron
pub const TET_EDGES: [(u8, u8); 6] =
    [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Strongly-typed tetrahedron corner, in the 0-3 range
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LocalVertex(u8);

impl LocalVertex {
    /// Builds a new corner
    ///
    /// # Panics
    /// If the index is not in the 0-3 range
    ///
    /// ```compile_fail
    /// # use tetiso::mesh::LocalVertex;
    /// const V: LocalVertex = LocalVertex::new(4);
    /// ```
    pub const fn new(i: u8) -> Self {
        assert!(i < 4);
        Self(i)
    }

    /// Iterates over all four corners
    pub fn iter() -> impl Iterator<Item = LocalVertex> {
        (0..4).map(LocalVertex)
    }

    /// Converts to an index in the 0-3 range
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Strongly-typed tetrahedron edge, in the 0-5 range
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LocalEdge(u8);

impl LocalEdge {
    /// Builds a new edge
    ///
    /// # Panics
    /// If the index is not in the 0-5 range
    ///
    /// ```compile_fail
    /// # use tetiso::mesh::LocalEdge;
    /// const E: LocalEdge = LocalEdge::new(6);
    /// ```
    pub const fn new(i: u8) -> Self {
        assert!(i < 6);
        Self(i)
    }

    /// Iterates over all six edges, in ascending order
    pub fn iter() -> impl Iterator<Item = LocalEdge> {
        (0..6).map(LocalEdge)
    }

    /// Converts to an index in the 0-5 range
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns this edge as a single set bit, for use in masks
    pub fn bit(self) -> u8 {
        1 << self.0
    }

    /// Returns the starting corner of this edge
    pub const fn start(self) -> LocalVertex {
        LocalVertex(TET_EDGES[self.0 as usize].0)
    }

    /// Returns the ending corner of this edge
    pub const fn end(self) -> LocalVertex {
        LocalVertex(TET_EDGES[self.0 as usize].1)
    }

    /// Returns the edge which shares no corner with this one
    pub const fn opposite(self) -> LocalEdge {
        LocalEdge(5 - self.0)
    }

    /// Checks whether two edges share a corner
    pub fn is_adjacent(self, other: LocalEdge) -> bool {
        self != other && self != other.opposite()
    }
}

/// An edge of a volume mesh, as an ordered pair of vertex ids
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Edge {
    /// First vertex id
    pub start: usize,
    /// Second vertex id
    pub end: usize,
}

impl Edge {
    /// Builds a new edge
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the same edge with its lower vertex id first
    ///
    /// Two edges are the same undirected mesh edge iff their canonical forms
    /// are equal.
    pub fn canonical(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// A tetrahedral cell, given as four vertex ids
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Tet(pub [usize; 4]);

impl Tet {
    /// Builds a new tetrahedron
    pub fn new(a: usize, b: usize, c: usize, d: usize) -> Self {
        Self([a, b, c, d])
    }

    /// Returns the vertex id at the given corner
    pub fn vertex(&self, v: LocalVertex) -> usize {
        self.0[v.index()]
    }

    /// Returns the given edge, ordered from its start to end corner
    pub fn edge(&self, e: LocalEdge) -> Edge {
        Edge::new(self.vertex(e.start()), self.vertex(e.end()))
    }

    /// Returns all six edges, in local edge order
    pub fn edges(&self) -> [Edge; 6] {
        [0, 1, 2, 3, 4, 5].map(|i| self.edge(LocalEdge(i)))
    }

    /// Checks whether any vertex id appears more than once
    pub fn is_degenerate(&self) -> bool {
        (0..4).any(|a| self.0[a + 1..].contains(&self.0[a]))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn opposite_edges_share_no_corner() {
        for e in LocalEdge::iter() {
            let o = e.opposite();
            for c in [e.start(), e.end()] {
                assert_ne!(c, o.start());
                assert_ne!(c, o.end());
            }
            assert_eq!(o.opposite(), e);
        }
    }

    #[test]
    fn adjacency() {
        for a in LocalEdge::iter() {
            for b in LocalEdge::iter() {
                let shared = [a.start(), a.end()]
                    .iter()
                    .any(|c| *c == b.start() || *c == b.end());
                assert_eq!(a.is_adjacent(b), shared && a != b, "{a:?} {b:?}");
            }
        }
    }

    #[test]
    fn tet_edges() {
        let t = Tet::new(10, 11, 12, 13);
        assert_eq!(
            t.edges(),
            [
                Edge::new(10, 11),
                Edge::new(10, 12),
                Edge::new(10, 13),
                Edge::new(11, 12),
                Edge::new(11, 13),
                Edge::new(12, 13),
            ]
        );
    }

    #[test]
    fn degenerate_tet() {
        assert!(!Tet::new(0, 1, 2, 3).is_degenerate());
        assert!(Tet::new(0, 0, 1, 2).is_degenerate());
        assert!(Tet::new(4, 1, 2, 4).is_degenerate());
        assert!(Tet::new(1, 2, 3, 3).is_degenerate());
    }

    #[test]
    fn canonical_edge() {
        assert_eq!(Edge::new(4, 2).canonical(), Edge::new(2, 4));
        assert_eq!(Edge::new(2, 4).canonical(), Edge::new(2, 4));
        assert_eq!(Edge::new(2, 4).to_string(), "(2, 4)");
    }
}
