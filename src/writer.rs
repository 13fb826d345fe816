//! Serialize a [`Mesh`] back to OBJ text
//!
//! Output is limited to the geometry directives the parser understands, so
//! write-then-parse always round-trips. Face references are written with
//! 1-based absolute indices in the shortest form that preserves which
//! attributes are present; relative indices from the input therefore
//! normalize to absolute on write.

use std::fmt::Write as _;

use crate::mesh::Mesh;

/// Serialize `mesh` to OBJ text
///
/// Texture coordinates are written with their third component only when it
/// is non-zero, matching how the parser defaults a missing `w` to 0.0.
pub fn write_obj(mesh: &Mesh) -> String {
    let mut out = String::new();

    for [x, y, z] in mesh.positions() {
        let _ = writeln!(out, "v {x} {y} {z}");
    }
    for [x, y, z] in mesh.normals() {
        let _ = writeln!(out, "vn {x} {y} {z}");
    }
    for [u, v, w] in mesh.tex_coords() {
        if *w == 0.0 {
            let _ = writeln!(out, "vt {u} {v}");
        } else {
            let _ = writeln!(out, "vt {u} {v} {w}");
        }
    }

    for face in mesh.faces() {
        out.push('f');
        for vertex in face.vertices() {
            let p = vertex.position + 1;
            match (vertex.tex_coord, vertex.normal) {
                (None, None) => {
                    let _ = write!(out, " {p}");
                }
                (Some(t), None) => {
                    let _ = write!(out, " {p}/{}", t + 1);
                }
                (None, Some(n)) => {
                    let _ = write!(out, " {p}//{}", n + 1);
                }
                (Some(t), Some(n)) => {
                    let _ = write!(out, " {p}/{}/{}", t + 1, n + 1);
                }
            }
        }
        out.push('\n');
    }

    out
}
