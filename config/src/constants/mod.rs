//! Centralized configuration values shared across the outline mesh pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Slack allowed when deciding whether a point lies on a segment.
///
/// A point `p` is on segment `ab` when `|ap| + |pb| - |ab|` is below this
/// value. The threshold is deliberately loose: bridge endpoints are built
/// from interpolated crossings and drift slightly off the outline.
///
/// # Examples
/// ```
/// use config::constants::POINT_ON_SEGMENT_TOLERANCE;
/// assert_eq!(POINT_ON_SEGMENT_TOLERANCE, 0.1);
/// ```
pub const POINT_ON_SEGMENT_TOLERANCE: f64 = 0.1;

/// Relative tolerance for the "sub-areas sum to the whole" containment test.
///
/// Scaled by the triangle's doubled area, floored at the same absolute value
/// so that degenerate triangles still compare sensibly.
///
/// # Examples
/// ```
/// use config::constants::TRIANGLE_AREA_TOLERANCE;
/// assert!(TRIANGLE_AREA_TOLERANCE < 1.0e-3);
/// ```
pub const TRIANGLE_AREA_TOLERANCE: f64 = 1.0e-5;

/// Minimum horizontal extent of an edge before it counts as vertical.
///
/// Vertical edges are skipped when intersecting a polygon with a vertical
/// line; their endpoints are reported by the neighboring edges instead.
///
/// # Examples
/// ```
/// use config::constants::VERTICAL_EDGE_TOLERANCE;
/// let dx: f64 = 0.0005;
/// assert!(dx.abs() < VERTICAL_EDGE_TOLERANCE);
/// ```
pub const VERTICAL_EDGE_TOLERANCE: f64 = 1.0e-3;

/// Tolerance on the cross product of two unit directions for them to count
/// as the same direction during collinear simplification.
///
/// # Examples
/// ```
/// use config::constants::DIRECTION_TOLERANCE;
/// assert!(DIRECTION_TOLERANCE > 0.0);
/// ```
pub const DIRECTION_TOLERANCE: f64 = 1.0e-9;

/// Distance below which two points are the same point.
///
/// Used for ring deduplication and for recognizing a repeated (pinch) vertex.
///
/// # Examples
/// ```
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// fn coincide(a: [f64; 2], b: [f64; 2]) -> bool {
///     (a[0] - b[0]).abs() < VERTEX_MERGE_EPSILON && (a[1] - b[1]).abs() < VERTEX_MERGE_EPSILON
/// }
///
/// assert!(coincide([1.0, 2.0], [1.0, 2.0 + 1e-12]));
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1.0e-8;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Smallest vertex count that forms a polygon.
///
/// # Examples
/// ```
/// use config::constants::MIN_POLYGON_VERTICES;
/// let outline = [[0.0, 0.0], [1.0, 0.0]];
/// assert!(outline.len() < MIN_POLYGON_VERTICES);
/// ```
pub const MIN_POLYGON_VERTICES: usize = 3;

// =============================================================================
// GEOMETRY DEFAULTS
// =============================================================================

/// Depth used when extruding a flat outline mesh into a solid block.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_EXTRUDE_DEPTH;
/// assert!(DEFAULT_EXTRUDE_DEPTH > 0.0);
/// ```
pub const DEFAULT_EXTRUDE_DEPTH: f64 = 5.0;

/// Immutable snapshot of generation settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.extrude_depth > 0.0);
/// assert!(config.simplify_outline);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Distance between the front and back faces of an extruded block.
    pub extrude_depth: f64,
    /// Collapse collinear runs in the outline before triangulating.
    pub simplify_outline: bool,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting depths that cannot produce a solid.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(2.5, false).expect("valid config");
    /// assert_eq!(cfg.extrude_depth, 2.5);
    /// ```
    pub fn new(extrude_depth: f64, simplify_outline: bool) -> Result<Self, ConfigError> {
        if !extrude_depth.is_finite() || extrude_depth <= 0.0 {
            return Err(ConfigError::InvalidDepth(extrude_depth));
        }
        Ok(Self {
            extrude_depth,
            simplify_outline,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            extrude_depth: DEFAULT_EXTRUDE_DEPTH,
            simplify_outline: true,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the extrusion depth is zero, negative or not finite.
    InvalidDepth(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDepth(value) => {
                write!(f, "extrude depth must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are equal within [`VERTEX_MERGE_EPSILON`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < VERTEX_MERGE_EPSILON
}

/// Checks if a doubled triangle area sum matches the whole within
/// [`TRIANGLE_AREA_TOLERANCE`], relative to the whole.
///
/// # Example
///
/// ```rust
/// use config::constants::areas_match;
///
/// assert!(areas_match(9.0, 9.0 + 1e-7));
/// assert!(!areas_match(9.0, 9.5));
/// ```
#[inline]
pub fn areas_match(whole: f64, parts: f64) -> bool {
    (whole - parts).abs() <= TRIANGLE_AREA_TOLERANCE * whole.abs().max(1.0)
}
