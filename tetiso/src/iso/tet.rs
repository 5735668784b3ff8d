//! Per-tetrahedron triangulation
use super::{
    classify::{Classifier, Side},
    intersect::intersect,
};
use crate::{
    Error,
    mesh::{Edge, LocalEdge, LocalVertex, ScalarField, VolumeMesh},
};
use arrayvec::ArrayVec;
use nalgebra::{Point3, Vector3};

/// The piece of the level set lying within a single tetrahedron
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TetPolygon {
    /// Crossed mesh edges (in canonical order) and their crossing points
    ///
    /// These are sorted by local edge index within the tetrahedron.
    pub crossings: ArrayVec<(Edge, Point3<f64>), 4>,

    /// Triangles, given as indices into `crossings`
    pub triangles: ArrayVec<[u8; 3], 2>,
}

impl TetPolygon {
    /// Checks whether the level set misses this tetrahedron
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Builds the [`TetPolygon`] for individual cells of a volume mesh
pub struct Triangulator<'a, M: ?Sized, F: ?Sized> {
    mesh: &'a M,
    field: &'a F,
    classifier: Classifier<'a, F>,
}

impl<'a, M, F> Triangulator<'a, M, F>
where
    M: VolumeMesh + ?Sized,
    F: ScalarField + ?Sized,
{
    /// Builds a triangulator for the level set `field = target`
    pub fn new(mesh: &'a M, field: &'a F, target: f64) -> Self {
        Self {
            mesh,
            field,
            classifier: Classifier::new(field, target),
        }
    }

    /// Triangulates the level set within the given cell
    ///
    /// Returns an empty polygon if the cell is not crossed, one triangle if 3
    /// of its edges are crossed, and two triangles if 4 are crossed.
    pub fn triangulate(&self, cell: usize) -> Result<TetPolygon, Error> {
        let tet = self.mesh.cell(cell);
        let vertex_count = self.mesh.vertex_count();
        if let Some(&vertex) = tet.0.iter().find(|&&v| v >= vertex_count) {
            return Err(Error::BadVertex { cell, vertex });
        }
        if tet.is_degenerate() {
            return Err(Error::DegenerateCell(cell));
        }

        let mut out = TetPolygon::default();
        if !self.classifier.is_cell_crossed(&tet) {
            return Ok(out);
        }

        let edges = self.mesh.edges(cell);
        let mask = LocalEdge::iter()
            .filter(|&e| self.classifier.is_edge_crossed(edges[e.index()]))
            .fold(0, |acc, e| acc | e.bit());
        let edge_loop = edge_loop(cell, mask)?;

        // Map from local edge to position in `out.crossings`
        let mut slots = [u8::MAX; 6];
        for e in LocalEdge::iter().filter(|e| mask & e.bit() != 0) {
            // Interpolating in canonical order means that every cell sharing
            // this edge computes a bit-identical point.
            let edge = edges[e.index()].canonical();
            let p = intersect(
                self.mesh,
                self.field,
                edge,
                self.classifier.target(),
            )?;
            slots[e.index()] = out.crossings.len() as u8;
            out.crossings.push((edge, p));
        }

        // Direction from the below side to the above side of the level set
        let mut below = Vector3::zeros();
        let mut above = Vector3::zeros();
        let (mut nb, mut na) = (0.0f64, 0.0f64);
        for v in LocalVertex::iter() {
            let p = self.mesh.position(tet.vertex(v)).coords;
            if self.classifier.side(tet.vertex(v)) == Side::Below {
                below += p;
                nb += 1.0;
            } else {
                above += p;
                na += 1.0;
            }
        }
        let dir = above / na - below / nb;

        // Quads are split along the diagonal from loop position 0 to 2
        let s: ArrayVec<u8, 4> =
            edge_loop.iter().map(|e| slots[e.index()]).collect();
        let mut tris: ArrayVec<[u8; 3], 2> = ArrayVec::new();
        tris.push([s[0], s[1], s[2]]);
        if s.len() == 4 {
            tris.push([s[0], s[2], s[3]]);
        }
        for [a, b, c] in tris {
            let [pa, pb, pc] =
                [a, b, c].map(|i| out.crossings[i as usize].1);
            let normal = (pb - pa).cross(&(pc - pa));
            if normal.dot(&dir) < 0.0 {
                out.triangles.push([a, c, b]);
            } else {
                out.triangles.push([a, b, c]);
            }
        }
        Ok(out)
    }
}

/// Looks up the ordered loop of crossed edges for a crossed-edge mask
///
/// Returns [`Error::InvalidCellConfiguration`] if no single-valued crossing of
/// a tetrahedron produces this mask.
fn edge_loop(cell: usize, mask: u8) -> Result<ArrayVec<LocalEdge, 4>, Error> {
    let edges = EDGE_MASK_TO_LOOP[mask as usize & 0b111111];
    if edges.is_empty() {
        Err(Error::InvalidCellConfiguration {
            cell,
            edges: mask.count_ones(),
        })
    } else {
        Ok(edges.iter().copied().collect())
    }
}

include!(concat!(env!("OUT_DIR"), "/tet_tables.rs"));
