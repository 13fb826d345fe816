//! # objmesh
//!
//! A standalone loader and validator for Wavefront OBJ geometry.
//!
//! The crate parses the common geometry subset of the OBJ text format —
//! vertex positions (`v`), normals (`vn`), texture coordinates (`vt`) and
//! polygonal faces (`f`) — into a [`Mesh`] the caller owns outright.
//! Parsing is a pure function over already-read text: no file I/O, no
//! printing, no process-wide state, so independent parses can run on
//! separate threads without coordination.
//!
//! Face indices are validated during the parse; a returned [`Mesh`] never
//! contains a dangling reference. Malformed input fails fast with the
//! 1-based line number and the offending line, since silently incomplete
//! geometry is worse for downstream consumers than an explicit error.
//!
//! ## Quick start
//!
//! ```
//! let mesh = objmesh::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n")?;
//! assert_eq!(mesh.position_count(), 3);
//! assert_eq!(mesh.face_count(), 1);
//! println!("loaded: {}", mesh.summary());
//! # Ok::<(), objmesh::ObjError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

mod error;
mod mesh;
mod parser;
mod writer;

pub use error::{IndexTarget, ObjError};
pub use mesh::{Face, Mesh, MeshSummary, Normal, Position, TexCoord, VertexRef};
pub use parser::parse;
pub use writer::write_obj;
