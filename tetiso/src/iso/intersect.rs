//! Edge intersection by linear interpolation
use crate::{
    Error,
    mesh::{Edge, ScalarField, VolumeMesh},
};
use nalgebra::Point3;

/// Linearly interpolates the point at which the field reaches `target`
///
/// The interpolation factor is `t = (target - v1) / (v0 - v1)`, and the
/// result is `t * p0 + (1 - t) * p1`; as such, `v0 == target` returns exactly
/// `p0` and `v1 == target` returns exactly `p1`.
///
/// Returns `None` if `v0 == v1`, where the factor is undefined.
#[inline]
pub fn interpolate(
    p0: &Point3<f64>,
    v0: f64,
    p1: &Point3<f64>,
    v1: f64,
    target: f64,
) -> Option<Point3<f64>> {
    if v0 == v1 {
        return None;
    }
    let t = (target - v1) / (v0 - v1);
    Some(Point3::from(p0.coords * t + p1.coords * (1.0 - t)))
}

/// Computes the point where the level set crosses a mesh edge
///
/// The edge's `(start, end)` order determines `(p0, v0)` and `(p1, v1)` in
/// [`interpolate`].  The caller must ensure the edge is crossed (e.g. with
/// [`Classifier::is_edge_crossed`](super::Classifier::is_edge_crossed));
/// an edge with equal endpoint values returns [`Error::DegenerateEdge`].
pub fn intersect<M, F>(
    mesh: &M,
    field: &F,
    edge: Edge,
    target: f64,
) -> Result<Point3<f64>, Error>
where
    M: VolumeMesh + ?Sized,
    F: ScalarField + ?Sized,
{
    interpolate(
        &mesh.position(edge.start),
        field.value(edge.start),
        &mesh.position(edge.end),
        field.value(edge.end),
        target,
    )
    .ok_or(Error::DegenerateEdge(edge))
}
