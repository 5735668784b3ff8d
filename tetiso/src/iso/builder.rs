//! Incremental surface construction
use super::{Surface, TetPolygon};
use crate::mesh::Edge;
use arrayvec::ArrayVec;
use nalgebra::{Point3, Vector3};
use std::collections::HashMap;

/// Container used during construction of a [`Surface`]
#[derive(Default)]
pub struct SurfaceBuilder {
    /// Map from canonical mesh edge to index in `out.points`
    ///
    /// If this is `None`, every crossing gets a fresh point.
    weld: Option<HashMap<Edge, usize>>,
    out: Surface,
}

impl SurfaceBuilder {
    /// Builds a new builder
    ///
    /// If `weld` is true, crossings of the same mesh edge share a single point
    pub fn new(weld: bool) -> Self {
        Self {
            weld: weld.then(HashMap::new),
            out: Surface::new(),
        }
    }

    /// Returns the point index for a crossing, adding a point if needed
    pub fn point(&mut self, edge: Edge, p: Point3<f64>) -> usize {
        let next = self.out.points.len();
        let i = match &mut self.weld {
            Some(map) => *map.entry(edge.canonical()).or_insert(next),
            None => next,
        };
        if i == next {
            self.out.points.push(p);
        }
        i
    }

    /// Adds the points and triangles of a single cell
    pub fn add(&mut self, poly: &TetPolygon) {
        let map: ArrayVec<usize, 4> =
            poly.crossings.iter().map(|(e, p)| self.point(*e, *p)).collect();
        for t in &poly.triangles {
            self.out.triangles.push(Vector3::new(
                map[t[0] as usize],
                map[t[1] as usize],
                map[t[2] as usize],
            ));
        }
    }

    /// Finishes the surface, assigning `value` as every point's scalar
    pub fn take(mut self, value: f64) -> Surface {
        self.out.scalars = vec![value; self.out.points.len()];
        self.out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn crossing(a: usize, b: usize, x: f64) -> (Edge, Point3<f64>) {
        (Edge::new(a, b), Point3::new(x, 0.0, 0.0))
    }

    #[test]
    fn weld() {
        let mut b = SurfaceBuilder::new(true);
        assert_eq!(b.point(Edge::new(1, 2), Point3::origin()), 0);
        assert_eq!(b.point(Edge::new(3, 2), Point3::origin()), 1);
        assert_eq!(b.point(Edge::new(2, 1), Point3::origin()), 0);
        let s = b.take(0.5);
        assert_eq!(s.points.len(), 2);
        assert_eq!(s.scalars, vec![0.5; 2]);
    }

    #[test]
    fn no_weld() {
        let mut b = SurfaceBuilder::new(false);
        assert_eq!(b.point(Edge::new(1, 2), Point3::origin()), 0);
        assert_eq!(b.point(Edge::new(1, 2), Point3::origin()), 1);
        assert_eq!(b.take(0.0).points.len(), 2);
    }

    #[test]
    fn add_polygons() {
        let a = TetPolygon {
            crossings: [
                crossing(0, 1, 0.0),
                crossing(0, 2, 1.0),
                crossing(0, 3, 2.0),
            ]
            .into_iter()
            .collect(),
            triangles: [[0, 2, 1]].into_iter().collect(),
        };
        let b = TetPolygon {
            crossings: [
                crossing(0, 2, 1.0),
                crossing(0, 3, 2.0),
                crossing(0, 4, 3.0),
            ]
            .into_iter()
            .collect(),
            triangles: [[0, 1, 2]].into_iter().collect(),
        };

        let mut welded = SurfaceBuilder::new(true);
        welded.add(&a);
        welded.add(&b);
        let welded = welded.take(1.0);
        assert_eq!(welded.points.len(), 4);
        assert_eq!(
            welded.triangles,
            vec![Vector3::new(0, 2, 1), Vector3::new(1, 2, 3)]
        );

        let mut simple = SurfaceBuilder::new(false);
        simple.add(&a);
        simple.add(&b);
        let simple = simple.take(1.0);
        assert_eq!(simple.points.len(), 6);
        assert_eq!(
            simple.triangles,
            vec![Vector3::new(0, 2, 1), Vector3::new(3, 4, 5)]
        );
        for i in 0..2 {
            assert_eq!(simple.triangle(i), welded.triangle(i));
        }
    }
}
