//! Mesh geometry produced by the OBJ parser
//!
//! A [`Mesh`] owns four ordered sequences: positions, normals, texture
//! coordinates, and faces. Sequence order matches file order exactly, since
//! it is the index space face references point into. All indices are 0-based
//! once parsing has resolved them; the 1-based (and possibly negative)
//! indexing of the OBJ text never leaks out of the parser.

use std::fmt;

/// Vertex position in model space (x, y, z)
pub type Position = [f32; 3];

/// Vertex normal (x, y, z), not necessarily unit length
pub type Normal = [f32; 3];

/// Texture coordinate (u, v, w); w is 0.0 unless the file supplied a third
/// component
pub type TexCoord = [f32; 3];

/// One corner of a face: resolved 0-based indices into the mesh attribute
/// sequences
///
/// The position index is always present; texture coordinate and normal
/// indices are optional, matching the `p`, `p/t`, `p//n` and `p/t/n` forms
/// of the OBJ format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexRef {
    /// Index into [`Mesh::positions`]
    pub position: usize,
    /// Index into [`Mesh::tex_coords`], if the reference carried one
    pub tex_coord: Option<usize>,
    /// Index into [`Mesh::normals`], if the reference carried one
    pub normal: Option<usize>,
}

impl VertexRef {
    /// Create a vertex reference from resolved 0-based indices
    pub fn new(position: usize, tex_coord: Option<usize>, normal: Option<usize>) -> Self {
        Self {
            position,
            tex_coord,
            normal,
        }
    }
}

/// A polygonal face: an ordered list of at least 3 vertex references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    vertices: Vec<VertexRef>,
}

impl Face {
    pub(crate) fn new(vertices: Vec<VertexRef>) -> Self {
        debug_assert!(vertices.len() >= 3);
        Self { vertices }
    }

    /// The face's vertex references, in file order
    pub fn vertices(&self) -> &[VertexRef] {
        &self.vertices
    }

    /// Whether this face is already a triangle
    pub fn is_triangle(&self) -> bool {
        self.vertices.len() == 3
    }
}

/// Geometry loaded from a single OBJ source
///
/// Owned entirely by the caller once parsing returns; the parser keeps no
/// state behind. Faces reference the attribute sequences by 0-based index,
/// and every index is guaranteed in-bounds by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<Position>,
    normals: Vec<Normal>,
    tex_coords: Vec<TexCoord>,
    faces: Vec<Face>,
}

impl Mesh {
    pub(crate) fn from_parts(
        positions: Vec<Position>,
        normals: Vec<Normal>,
        tex_coords: Vec<TexCoord>,
        faces: Vec<Face>,
    ) -> Self {
        Self {
            positions,
            normals,
            tex_coords,
            faces,
        }
    }

    /// Vertex positions, in file order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Vertex normals, in file order
    pub fn normals(&self) -> &[Normal] {
        &self.normals
    }

    /// Texture coordinates, in file order
    pub fn tex_coords(&self) -> &[TexCoord] {
        &self.tex_coords
    }

    /// Faces, in file order
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of vertex positions
    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of vertex normals
    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    /// Number of texture coordinates
    pub fn tex_coord_count(&self) -> usize {
        self.tex_coords.len()
    }

    /// Number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh holds no geometry at all
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
            && self.normals.is_empty()
            && self.tex_coords.is_empty()
            && self.faces.is_empty()
    }

    /// Attribute counts in one displayable value
    pub fn summary(&self) -> MeshSummary {
        MeshSummary {
            positions: self.position_count(),
            normals: self.normal_count(),
            tex_coords: self.tex_coord_count(),
            faces: self.face_count(),
        }
    }

    /// A copy of this mesh with every face fan-triangulated
    ///
    /// A face `v0 v1 .. vn` becomes the triangles `(v0, v1, v2)`,
    /// `(v0, v2, v3)`, and so on. Triangles pass through unchanged, as do
    /// the attribute sequences.
    pub fn triangulated(&self) -> Mesh {
        let mut faces = Vec::with_capacity(self.faces.len());
        for face in &self.faces {
            let verts = face.vertices();
            for i in 1..verts.len() - 1 {
                faces.push(Face::new(vec![verts[0], verts[i], verts[i + 1]]));
            }
        }
        Mesh {
            positions: self.positions.clone(),
            normals: self.normals.clone(),
            tex_coords: self.tex_coords.clone(),
            faces,
        }
    }

    /// Serialize this mesh back to OBJ text
    ///
    /// See [`crate::write_obj`].
    pub fn to_obj_string(&self) -> String {
        crate::writer::write_obj(self)
    }
}

/// Attribute counts of a mesh, for one-line reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshSummary {
    /// Number of vertex positions
    pub positions: usize,
    /// Number of vertex normals
    pub normals: usize,
    /// Number of texture coordinates
    pub tex_coords: usize,
    /// Number of faces
    pub faces: usize,
}

impl fmt::Display for MeshSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} positions, {} normals, {} texture coordinates, {} faces",
            self.positions, self.normals, self.tex_coords, self.faces
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_mesh() -> Mesh {
        let refs = (0..4).map(|i| VertexRef::new(i, None, None)).collect();
        Mesh::from_parts(
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            vec![],
            vec![],
            vec![Face::new(refs)],
        )
    }

    #[test]
    fn test_triangulate_quad() {
        let triangulated = quad_mesh().triangulated();
        assert_eq!(triangulated.face_count(), 2);
        let positions = |face: &Face| -> Vec<usize> {
            face.vertices().iter().map(|v| v.position).collect()
        };
        assert_eq!(positions(&triangulated.faces()[0]), vec![0, 1, 2]);
        assert_eq!(positions(&triangulated.faces()[1]), vec![0, 2, 3]);
        // Attribute sequences are untouched
        assert_eq!(triangulated.positions(), quad_mesh().positions());
    }

    #[test]
    fn test_triangulate_triangle_is_identity() {
        let mesh = Mesh::from_parts(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![],
            vec![],
            vec![Face::new(vec![
                VertexRef::new(0, None, None),
                VertexRef::new(1, None, None),
                VertexRef::new(2, None, None),
            ])],
        );
        assert_eq!(mesh.triangulated(), mesh);
    }

    #[test]
    fn test_summary_display() {
        let summary = quad_mesh().summary();
        assert_eq!(
            summary.to_string(),
            "4 positions, 0 normals, 0 texture coordinates, 1 faces"
        );
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::default();
        assert!(mesh.is_empty());
        assert_eq!(mesh.face_count(), 0);
    }
}
