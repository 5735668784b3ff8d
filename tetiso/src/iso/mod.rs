//! Isosurface extraction on tetrahedral meshes (marching tetrahedra)
//!
//! The main entry point is [`extract`], which visits every cell of a
//! [`VolumeMesh`], triangulates the level set within each crossed cell, and
//! assembles the pieces into a [`Surface`].
use crate::{
    Error, ThreadPool,
    mesh::{ScalarField, VolumeMesh},
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

mod builder;
mod classify;
mod intersect;
mod mt;
mod surface;
mod tet;

use builder::SurfaceBuilder;
pub use classify::{Classifier, Side, is_crossed};
pub use intersect::{interpolate, intersect};
pub use surface::Surface;
pub use tet::{TetPolygon, Triangulator};

/// Extraction strategy
///
/// Every strategy emits the same triangles, in the same order, with the same
/// set of point positions; they differ in how points are shared and how work
/// is scheduled.
///
/// Strategies are parsed from and printed as lowercase strings:
/// ```
/// # use tetiso::iso::Strategy;
/// let s: Strategy = "fast".parse().unwrap();
/// assert_eq!(s, Strategy::Fast);
/// assert_eq!(s.to_string(), "fast");
/// ```
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// Serial pass emitting a fresh point for every crossed edge of every
    /// cell
    ///
    /// Points on edges shared between cells are duplicated, so the surface is
    /// not connected across cell boundaries.
    #[default]
    Simple,

    /// Serial pass which shares one point between all crossings of the same
    /// mesh edge, producing a watertight surface
    Standard,

    /// Same output as [`Strategy::Standard`], with cells triangulated in
    /// parallel on [`Settings::threads`]
    Fast,
}

/// Settings when extracting an isosurface
#[derive(Copy, Clone)]
pub struct Settings<'a> {
    /// Target value of the level set
    pub value: f64,

    /// Extraction strategy
    pub strategy: Strategy,

    /// Thread pool for [`Strategy::Fast`], or `None` to run in the calling
    /// thread
    ///
    /// Other strategies ignore this field.
    pub threads: Option<&'a ThreadPool>,
}

impl Default for Settings<'_> {
    fn default() -> Self {
        Self {
            value: 0.0,
            strategy: Strategy::default(),
            threads: None,
        }
    }
}

/// Extracts the level set `field = settings.value` as a triangle mesh
///
/// `field` must have one value per mesh vertex.  Cells are visited in index
/// order; the first failing cell aborts extraction and its error is returned.
pub fn extract<M, F>(
    mesh: &M,
    field: &F,
    settings: &Settings,
) -> Result<Surface, Error>
where
    M: VolumeMesh + ?Sized,
    F: ScalarField + ?Sized,
{
    if field.len() != mesh.vertex_count() {
        return Err(Error::MismatchedField(field.len(), mesh.vertex_count()));
    }
    log::info!("using {} extraction strategy", settings.strategy);
    let start = Instant::now();

    let builder = match settings.strategy {
        Strategy::Simple => extract_serial(mesh, field, settings.value, false),
        Strategy::Standard => extract_serial(mesh, field, settings.value, true),
        Strategy::Fast => mt::extract(mesh, field, settings),
    }?;
    let out = builder.take(settings.value);

    log::info!(
        "isosurface extracted ({} vertices, {} faces) in {:?}",
        out.points.len(),
        out.triangles.len(),
        start.elapsed()
    );
    log::debug!("surface uses {} bytes", out.memory_usage());
    Ok(out)
}

/// Visits every cell in order within the calling thread
fn extract_serial<M, F>(
    mesh: &M,
    field: &F,
    value: f64,
    weld: bool,
) -> Result<SurfaceBuilder, Error>
where
    M: VolumeMesh + ?Sized,
    F: ScalarField + ?Sized,
{
    let t = Triangulator::new(mesh, field, value);
    let mut out = SurfaceBuilder::new(weld);
    for cell in 0..mesh.cell_count() {
        out.add(&t.triangulate(cell)?);
    }
    Ok(out)
}

////////////////////////////////////////////////////////////////////////////////

struct Input<'a> {
    mesh: &'a dyn VolumeMesh,
    field: &'a dyn ScalarField,
}

/// Long-lived extraction object with setters
///
/// Configuration changes take effect on the next call to
/// [`update`](IsoSurfacer::update), which replaces the previous output.
///
/// ```
/// use nalgebra::Point3;
/// use tetiso::{Error, iso::IsoSurfacer, mesh::TetMesh};
///
/// let mesh = TetMesh::grid(
///     2,
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 1.0),
/// );
/// let field = mesh.sample(|p| p.x);
///
/// let mut iso = IsoSurfacer::new();
/// assert!(matches!(iso.update(), Err(Error::NoInput)));
///
/// iso.set_input(&mesh, &field);
/// iso.set_value(0.3);
/// let n = iso.update()?.triangles.len();
/// assert!(n > 0);
/// assert_eq!(iso.output().unwrap().triangles.len(), n);
/// # Ok::<(), Error>(())
/// ```
#[derive(Default)]
pub struct IsoSurfacer<'a> {
    input: Option<Input<'a>>,
    settings: Settings<'a>,
    output: Option<Surface>,
}

impl<'a> IsoSurfacer<'a> {
    /// Builds a new object, with no input and default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the volume mesh and its scalar field
    pub fn set_input(
        &mut self,
        mesh: &'a dyn VolumeMesh,
        field: &'a dyn ScalarField,
    ) {
        self.input = Some(Input { mesh, field });
    }

    /// Sets the target value of the level set
    pub fn set_value(&mut self, value: f64) {
        self.settings.value = value;
    }

    /// Sets the extraction strategy
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.settings.strategy = strategy;
    }

    /// Sets the thread pool used by [`Strategy::Fast`]
    pub fn set_threads(&mut self, threads: Option<&'a ThreadPool>) {
        self.settings.threads = threads;
    }

    /// Returns the current settings
    pub fn settings(&self) -> &Settings<'a> {
        &self.settings
    }

    /// Runs extraction, replacing the previous output
    ///
    /// On failure, the previous output is discarded and [`output`] returns
    /// `None`.
    ///
    /// [`output`]: IsoSurfacer::output
    pub fn update(&mut self) -> Result<&Surface, Error> {
        self.output = None;
        let Some(input) = &self.input else {
            log::error!("no input defined");
            return Err(Error::NoInput);
        };
        let surface = extract(input.mesh, input.field, &self.settings)?;
        Ok(self.output.insert(surface))
    }

    /// Returns the result of the last successful [`update`]
    ///
    /// [`update`]: IsoSurfacer::update
    pub fn output(&self) -> Option<&Surface> {
        self.output.as_ref()
    }
}
