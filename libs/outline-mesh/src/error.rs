//! # Mesh Errors
//!
//! Error types for outline mesh generation. Every geometric failure is
//! reported as a tagged value; nothing panics across the crate boundary and
//! no partially built mesh is returned alongside an error.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while triangulating, bridging, splitting or
/// extruding an outline.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Fewer than three points were supplied where a polygon is required.
    #[error("Invalid vertices: a polygon needs at least 3 points, got {count}")]
    InvalidVertices { count: usize },

    /// Malformed mesh buffers (empty, index count not a multiple of 3,
    /// or an index out of range).
    #[error("Invalid mesh: {message}")]
    InvalidMesh { message: String },

    /// A hole's vertical extent does not fit in the range it is bridged to.
    #[error(
        "Invalid height range: hole spans [{}, {}] but the bridge range is [{}, {}]",
        .hole.0, .hole.1, .range.0, .range.1
    )]
    InvalidHeightRange { hole: (f64, f64), range: (f64, f64) },

    /// A bridge endpoint could not be located on the boundary being cut, or
    /// the cut produced a piece with the wrong winding.
    #[error("Invalid point: {message}")]
    InvalidPoint { message: String },

    /// An internal geometric invariant failed. Signals a construction bug
    /// rather than bad input.
    #[error("Invalid method: {message}")]
    InvalidMethod { message: String },

    /// Triangulating one side of a cut failed.
    #[error("Invalid split mesh: {side} piece could not be triangulated: {source}")]
    InvalidSplitMesh {
        side: &'static str,
        #[source]
        source: Box<MeshError>,
    },

    /// Triangulation found no ear, or assembly failed unexpectedly.
    #[error("Failure: {message}")]
    Failure { message: String },

    /// Merge attempted before both sides of a cut were available.
    #[error("Unassigned mesh: both sides of a split must be present to merge")]
    UnassignedMesh,

    /// Generation settings were rejected.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid mesh error.
    pub fn invalid_mesh(message: impl Into<String>) -> Self {
        Self::InvalidMesh {
            message: message.into(),
        }
    }

    /// Creates an invalid point error.
    pub fn invalid_point(message: impl Into<String>) -> Self {
        Self::InvalidPoint {
            message: message.into(),
        }
    }

    /// Creates an invalid method error.
    pub fn invalid_method(message: impl Into<String>) -> Self {
        Self::InvalidMethod {
            message: message.into(),
        }
    }

    /// Creates a failure error.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Wraps a triangulation error raised while processing one piece of a cut.
    pub fn split(side: &'static str, source: MeshError) -> Self {
        Self::InvalidSplitMesh {
            side,
            source: Box::new(source),
        }
    }
}

/// Result type alias for outline mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
