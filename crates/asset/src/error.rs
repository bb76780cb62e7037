//! Errors and per-line diagnostics produced while loading meshes.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a single OBJ line was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// The directive had the wrong number of space-separated tokens.
    #[error("'{tag}' expects {expected} tokens, found {found}")]
    TokenCount {
        tag: &'static str,
        expected: &'static str,
        found: usize,
    },
    /// Not a number, or out of `f32` range.
    #[error("invalid float '{0}'")]
    InvalidFloat(String),
    #[error("invalid face index '{0}'")]
    InvalidIndex(String),
    #[error("line is not valid UTF-8")]
    NotUtf8,
}

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("Failed to open mesh file {}: {source}", path.display())]
    StreamUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Read failed after line {line}: {source}")]
    ReadFailed {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("Malformed OBJ line {line}: {reason}")]
    MalformedLine {
        line: usize,
        #[source]
        reason: MalformedReason,
    },

    #[error("Vertex position on line {line} has no preceding vertex normal")]
    OrphanPosition { line: usize },

    #[error("Mesh has no vertices to normalize")]
    EmptyMesh,

    #[error("Target extent must be finite and positive, got {0}")]
    InvalidExtent(f32),

    #[error("Face index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

impl MeshError {
    /// Line number the diagnostic refers to, if it is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::ReadFailed { line, .. }
            | Self::MalformedLine { line, .. }
            | Self::OrphanPosition { line } => Some(*line),
            _ => None,
        }
    }
}

pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn malformed_line_message_includes_reason() {
        let err = MeshError::MalformedLine {
            line: 4,
            reason: MalformedReason::TokenCount {
                tag: "v",
                expected: "4 or 7",
                found: 5,
            },
        };
        assert_eq!(
            err.to_string(),
            "Malformed OBJ line 4: 'v' expects 4 or 7 tokens, found 5"
        );
        assert_eq!(err.line(), Some(4));
        let source = err.source().expect("reason is the source");
        assert_eq!(source.to_string(), "'v' expects 4 or 7 tokens, found 5");
    }

    #[test]
    fn reason_messages() {
        assert_eq!(
            MalformedReason::InvalidFloat("1e39".into()).to_string(),
            "invalid float '1e39'"
        );
        assert_eq!(
            MalformedReason::InvalidIndex("0/1".into()).to_string(),
            "invalid face index '0/1'"
        );
        assert_eq!(MalformedReason::NotUtf8.to_string(), "line is not valid UTF-8");
        assert_eq!(MeshError::EmptyMesh.line(), None);
    }
}
