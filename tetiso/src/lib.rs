//! Tetiso extracts isosurfaces from scalar fields sampled on tetrahedral
//! meshes.
//!
//! The input is a **volume mesh**: a set of vertices with 3D positions, and a
//! set of tetrahedral cells, each referencing four vertices.  A **scalar
//! field** assigns one value to every vertex of that mesh.  Given a target
//! value, extraction produces a triangle mesh approximating the **level set**,
//! i.e. the surface on which the (piecewise-linear) field equals the target.
//!
//! This is the classic marching tetrahedra algorithm:
//!
//! - Each vertex is classified as **below** (`value < target`) or **not
//!   below** (`value >= target`) the level set.  A value exactly equal to the
//!   target is never below it.
//! - Cells with vertices on both sides are **crossed**; for every crossed
//!   edge, the crossing point is found by linear interpolation.
//! - A crossed tetrahedron contains either 3 crossings (a single corner is
//!   isolated, producing one triangle) or 4 crossings (the corners are split
//!   two and two, producing a quad that is split into two triangles).
//!
//! Every triangle is wound so that its normal points from the below side to
//! the not-below side of the level set.
//!
//! # Input meshes
//! The host application owns its meshes and fields; they are exposed through
//! the [`VolumeMesh`](crate::mesh::VolumeMesh) and
//! [`ScalarField`](crate::mesh::ScalarField) traits.  For convenience, the
//! crate provides an owned [`TetMesh`](crate::mesh::TetMesh), which can be
//! built from raw arrays or as a structured grid, and implements
//! `ScalarField` for slices and vectors of `f64`.
//!
//! ```
//! use nalgebra::Point3;
//! use tetiso::mesh::{TetMesh, Tet};
//!
//! let mesh = TetMesh::new(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!         Point3::new(0.0, 0.0, 1.0),
//!     ],
//!     vec![Tet::new(0, 1, 2, 3)],
//! )?;
//! assert_eq!(mesh.cells().len(), 1);
//! # Ok::<(), tetiso::Error>(())
//! ```
//!
//! # Extraction
//! Extraction is configured with [`Settings`](crate::iso::Settings) and run
//! by [`iso::extract`](crate::iso::extract), which returns a fresh
//! [`Surface`](crate::iso::Surface):
//!
//! ```
//! use nalgebra::Point3;
//! use tetiso::{iso::{self, Settings, Strategy}, mesh::TetMesh};
//!
//! let mesh = TetMesh::grid(
//!     4,
//!     Point3::new(-1.0, -1.0, -1.0),
//!     Point3::new(1.0, 1.0, 1.0),
//! );
//! let field = mesh.sample(|p| p.coords.norm());
//! let settings = Settings {
//!     value: 0.6,
//!     strategy: Strategy::Standard,
//!     ..Default::default()
//! };
//! let surface = iso::extract(&mesh, &field, &settings)?;
//! assert!(!surface.triangles.is_empty());
//! assert!(surface.scalars.iter().all(|&s| s == 0.6));
//! # Ok::<(), tetiso::Error>(())
//! ```
//!
//! Three [strategies](crate::iso::Strategy) are available.  They produce the
//! same triangles and the same set of point positions, differing only in
//! whether coincident points are welded and in how work is scheduled.
//!
//! For hosts which prefer a long-lived object with setters (configure once,
//! re-run as inputs change), [`IsoSurfacer`](crate::iso::IsoSurfacer) wraps
//! the same machinery.
#![warn(missing_docs)]

mod config;
pub use config::ThreadPool;

mod error;
pub use error::Error;

pub mod iso;
pub mod mesh;
