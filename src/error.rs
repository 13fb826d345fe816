//! Parse errors for OBJ text
//!
//! Every error carries the 1-based line number and the offending line so
//! callers can point a user at the exact spot in the file. Parsing is
//! all-or-nothing: the first error aborts the whole parse.

use std::fmt;

use thiserror::Error;

/// Which attribute sequence a face index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTarget {
    /// Geometric vertex positions (`v` lines)
    Position,
    /// Texture coordinates (`vt` lines)
    TexCoord,
    /// Vertex normals (`vn` lines)
    Normal,
}

impl fmt::Display for IndexTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexTarget::Position => write!(f, "position"),
            IndexTarget::TexCoord => write!(f, "texture coordinate"),
            IndexTarget::Normal => write!(f, "normal"),
        }
    }
}

/// OBJ parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObjError {
    /// A `v` line without exactly 3 float components
    #[error("malformed vertex position on line {line}: `{text}` (expected `v x y z`)")]
    MalformedVertex {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        text: String,
    },

    /// A `vn` line without exactly 3 float components
    #[error("malformed vertex normal on line {line}: `{text}` (expected `vn x y z`)")]
    MalformedNormal {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        text: String,
    },

    /// A `vt` line without 2 or 3 float components
    #[error("malformed texture coordinate on line {line}: `{text}` (expected `vt u v [w]`)")]
    MalformedTexCoord {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        text: String,
    },

    /// An `f` line with fewer than 3 references or a reference that is not
    /// of the form `p`, `p/t`, `p//n` or `p/t/n`
    #[error(
        "malformed face on line {line}: `{text}` (expected at least 3 references \
         of the form p, p/t, p//n or p/t/n)"
    )]
    MalformedFace {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        text: String,
    },

    /// A face index that does not resolve into its target sequence
    #[error(
        "face index {index} on line {line} does not resolve to a {target} \
         ({len} defined at that point): `{text}`"
    )]
    InvalidIndexReference {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        text: String,
        /// Sequence the index was supposed to land in
        target: IndexTarget,
        /// The index as written in the file (1-based, possibly negative)
        index: i64,
        /// Length of the target sequence when the face line was reached
        len: usize,
    },
}

impl ObjError {
    /// 1-based line number of the offending line
    pub fn line(&self) -> usize {
        match self {
            ObjError::MalformedVertex { line, .. }
            | ObjError::MalformedNormal { line, .. }
            | ObjError::MalformedTexCoord { line, .. }
            | ObjError::MalformedFace { line, .. }
            | ObjError::InvalidIndexReference { line, .. } => *line,
        }
    }

    /// The offending line's text, trimmed of surrounding whitespace
    pub fn source_line(&self) -> &str {
        match self {
            ObjError::MalformedVertex { text, .. }
            | ObjError::MalformedNormal { text, .. }
            | ObjError::MalformedTexCoord { text, .. }
            | ObjError::MalformedFace { text, .. }
            | ObjError::InvalidIndexReference { text, .. } => text,
        }
    }
}
