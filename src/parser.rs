//! Line-oriented parser for the Wavefront OBJ text format
//!
//! Supports the common geometry subset: `v`, `vn`, `vt` and `f` directives.
//! Anything else (`mtllib`, `usemtl`, `o`, `g`, `s`, `l`, curves, ...) is
//! ignored, which keeps the parser forward-compatible with files produced by
//! modeling tools. Parsing is a single pass and fail-fast: the first
//! malformed line aborts the parse with a descriptive error rather than
//! handing back partial geometry.

use crate::error::{IndexTarget, ObjError};
use crate::mesh::{Face, Mesh, Normal, Position, TexCoord, VertexRef};

/// Parse the full text of an OBJ file into a [`Mesh`]
///
/// Indices in face references are 1-based in the source, with negative
/// values meaning "relative to the current end of the sequence"; both are
/// resolved to 0-based absolute indices and bounds-checked against the
/// sequence lengths at the point of the face line.
///
/// # Errors
///
/// Returns an [`ObjError`] carrying the 1-based line number and the
/// offending line for the first malformed directive encountered.
pub fn parse(text: &str) -> Result<Mesh, ObjError> {
    let mut positions: Vec<Position> = Vec::new();
    let mut normals: Vec<Normal> = Vec::new();
    let mut tex_coords: Vec<TexCoord> = Vec::new();
    let mut faces: Vec<Face> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let keyword = match tokens.next() {
            Some(keyword) => keyword,
            None => continue,
        };

        match keyword {
            "v" => {
                let position = parse_float3(tokens).ok_or_else(|| ObjError::MalformedVertex {
                    line: line_number,
                    text: line.to_string(),
                })?;
                positions.push(position);
            }
            "vn" => {
                let normal = parse_float3(tokens).ok_or_else(|| ObjError::MalformedNormal {
                    line: line_number,
                    text: line.to_string(),
                })?;
                normals.push(normal);
            }
            "vt" => {
                let tex_coord =
                    parse_tex_coord(tokens).ok_or_else(|| ObjError::MalformedTexCoord {
                        line: line_number,
                        text: line.to_string(),
                    })?;
                tex_coords.push(tex_coord);
            }
            "f" => {
                let mut vertices = Vec::new();
                for token in tokens {
                    vertices.push(parse_vertex_ref(
                        token,
                        line_number,
                        line,
                        positions.len(),
                        tex_coords.len(),
                        normals.len(),
                    )?);
                }
                if vertices.len() < 3 {
                    return Err(ObjError::MalformedFace {
                        line: line_number,
                        text: line.to_string(),
                    });
                }
                faces.push(Face::new(vertices));
            }
            // Ignore unsupported directives
            _ => {}
        }
    }

    log::debug!(
        "parsed OBJ text: {} positions, {} normals, {} texture coordinates, {} faces",
        positions.len(),
        normals.len(),
        tex_coords.len(),
        faces.len()
    );

    Ok(Mesh::from_parts(positions, normals, tex_coords, faces))
}

/// Parse exactly 3 float tokens; `None` on count mismatch or bad float
fn parse_float3<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<[f32; 3]> {
    let mut result = [0.0f32; 3];
    for component in &mut result {
        *component = tokens.next()?.parse().ok()?;
    }
    if tokens.next().is_some() {
        return None;
    }
    Some(result)
}

/// Parse 2 or 3 float tokens; a missing third component defaults to 0.0
fn parse_tex_coord<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<TexCoord> {
    let u: f32 = tokens.next()?.parse().ok()?;
    let v: f32 = tokens.next()?.parse().ok()?;
    let w: f32 = match tokens.next() {
        Some(token) => token.parse().ok()?,
        None => 0.0,
    };
    if tokens.next().is_some() {
        return None;
    }
    Some([u, v, w])
}

/// Parse one face reference token (`p`, `p/t`, `p//n` or `p/t/n`) and
/// resolve its indices against the current sequence lengths
fn parse_vertex_ref(
    token: &str,
    line: usize,
    text: &str,
    position_count: usize,
    tex_coord_count: usize,
    normal_count: usize,
) -> Result<VertexRef, ObjError> {
    let malformed = || ObjError::MalformedFace {
        line,
        text: text.to_string(),
    };

    let parts: Vec<&str> = token.split('/').collect();
    if parts.len() > 3 || parts[0].is_empty() {
        return Err(malformed());
    }

    let written: i64 = parts[0].parse().map_err(|_| malformed())?;
    let position = resolve_index(written, position_count, IndexTarget::Position, line, text)?;

    let tex_coord = match parts.get(1) {
        Some(part) if !part.is_empty() => {
            let written: i64 = part.parse().map_err(|_| malformed())?;
            Some(resolve_index(
                written,
                tex_coord_count,
                IndexTarget::TexCoord,
                line,
                text,
            )?)
        }
        _ => None,
    };

    let normal = match parts.get(2) {
        Some(part) if !part.is_empty() => {
            let written: i64 = part.parse().map_err(|_| malformed())?;
            Some(resolve_index(
                written,
                normal_count,
                IndexTarget::Normal,
                line,
                text,
            )?)
        }
        _ => None,
    };

    Ok(VertexRef::new(position, tex_coord, normal))
}

/// Resolve a 1-based (possibly negative, relative) OBJ index to a 0-based
/// absolute index, bounds-checked against the sequence length
fn resolve_index(
    written: i64,
    len: usize,
    target: IndexTarget,
    line: usize,
    text: &str,
) -> Result<usize, ObjError> {
    let out_of_range = || ObjError::InvalidIndexReference {
        line,
        text: text.to_string(),
        target,
        index: written,
        len,
    };

    let resolved = if written > 0 {
        (written - 1) as usize
    } else if written < 0 {
        let back = written.unsigned_abs() as usize;
        len.checked_sub(back).ok_or_else(out_of_range)?
    } else {
        // 0 is illegal in OBJ's 1-based indexing
        return Err(out_of_range());
    };

    if resolved >= len {
        return Err(out_of_range());
    }
    Ok(resolved)
}
