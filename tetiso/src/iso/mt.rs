//! Multithreaded extraction
use super::{Settings, Triangulator, builder::SurfaceBuilder, tet::TetPolygon};
use crate::{
    Error,
    mesh::{ScalarField, VolumeMesh},
};
use rayon::prelude::*;
use std::ops::Range;

/// Smallest number of cells assigned to a single task
const MIN_CHUNK_SIZE: usize = 64;

/// Picks a chunk size giving each thread a handful of tasks
fn chunk_size(cells: usize, threads: usize) -> usize {
    (cells / (threads.max(1) * 4)).max(MIN_CHUNK_SIZE)
}

/// Triangulates a contiguous range of cells, keeping non-empty polygons
///
/// Stops at the first error within the range.
fn run_chunk<M, F>(
    t: &Triangulator<M, F>,
    cells: Range<usize>,
) -> Result<Vec<TetPolygon>, Error>
where
    M: VolumeMesh + ?Sized,
    F: ScalarField + ?Sized,
{
    let mut out = vec![];
    for cell in cells {
        let poly = t.triangulate(cell)?;
        if !poly.is_empty() {
            out.push(poly);
        }
    }
    Ok(out)
}

/// Extracts a welded surface by triangulating chunks of cells in parallel
///
/// Chunks are merged in cell order, so the result is identical to a serial
/// welded pass regardless of thread count.  If several cells fail, the error
/// from the lowest-numbered cell is returned.
pub(crate) fn extract<M, F>(
    mesh: &M,
    field: &F,
    settings: &Settings,
) -> Result<SurfaceBuilder, Error>
where
    M: VolumeMesh + ?Sized,
    F: ScalarField + ?Sized,
{
    let t = Triangulator::new(mesh, field, settings.value);
    let cells = mesh.cell_count();
    let threads = settings.threads.map(|p| p.thread_count()).unwrap_or(1);
    let size = chunk_size(cells, threads);
    let chunk = |i: usize| run_chunk(&t, i * size..((i + 1) * size).min(cells));
    let chunk_count = cells.div_ceil(size);

    let chunks: Vec<_> = match settings.threads {
        Some(pool) => {
            pool.run(|| (0..chunk_count).into_par_iter().map(chunk).collect())
        }
        None => (0..chunk_count).map(chunk).collect(),
    };
    log::debug!(
        "triangulated {cells} cells in {chunk_count} chunks on {threads} \
         thread(s)"
    );

    let mut out = SurfaceBuilder::new(true);
    for c in chunks {
        for poly in c? {
            out.add(&poly);
        }
    }
    Ok(out)
}
