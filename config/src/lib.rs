//! # Config Crate
//!
//! Centralized tolerances and defaults for the outline mesh pipeline.
//! Every numeric threshold used by the geometry predicates, the ear-clipping
//! triangulator and the hole bridging code is defined here so the kernels
//! never carry literals of their own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{POINT_ON_SEGMENT_TOLERANCE, VERTEX_MERGE_EPSILON};
//!
//! // A point counts as lying on a segment when the detour through it is
//! // shorter than the tolerance.
//! let detour: f64 = 0.05;
//! assert!(detour < POINT_ON_SEGMENT_TOLERANCE);
//!
//! // Coincident points collapse below the merge epsilon.
//! let gap: f64 = 1e-10;
//! assert!(gap < VERTEX_MERGE_EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Fixed Tolerances**: No adaptive or exact arithmetic; thresholds are
//!   chosen for tile-outline inputs measured in whole or half cells
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
