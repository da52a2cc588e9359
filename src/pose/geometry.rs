//! Joint-angle geometry shared by every analyzer.
//!
//! Coordinates are image-normalized: x grows to the right, y grows downward.

use serde::{Deserialize, Serialize};

/// Angle reported when one of the rays has no length (coincident points).
pub const DEGENERATE_ANGLE: f64 = 0.0;

/// Rays shorter than this are treated as zero-length.
const MIN_RAY_LENGTH: f64 = 1e-9;

/// A 2D position in normalized image space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The same point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether this point sits higher in the image than `other`.
    pub fn is_above(self, other: Point) -> bool {
        self.y < other.y
    }
}

/// Angle in degrees at `vertex` between the rays towards `p1` and `p2`.
///
/// Uses cos(θ) = (v1 · v2) / (|v1| × |v2|), clamped to [-1, 1] before `acos`,
/// so the result is always within [0, 180] and symmetric in `p1`/`p2`.
///
/// If either ray is shorter than 1e-9 (vertex coincides with an endpoint) or any
/// coordinate is non-finite, returns [`DEGENERATE_ANGLE`] instead of NaN.
pub fn angle_at(p1: Point, vertex: Point, p2: Point) -> f64 {
    let v1 = (p1.x - vertex.x, p1.y - vertex.y);
    let v2 = (p2.x - vertex.x, p2.y - vertex.y);

    let dot = v1.0 * v2.0 + v1.1 * v2.1;
    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    // `!(x >= min)` also catches NaN magnitudes.
    if !(mag1 >= MIN_RAY_LENGTH) || !(mag2 >= MIN_RAY_LENGTH) || !dot.is_finite() {
        return DEGENERATE_ANGLE;
    }

    let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
    let degrees = cos_angle.acos().to_degrees();
    if degrees.is_finite() {
        degrees
    } else {
        DEGENERATE_ANGLE
    }
}

pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Absolute vertical distance between two points.
pub fn vertical_gap(a: Point, b: Point) -> f64 {
    (a.y - b.y).abs()
}

/// Absolute horizontal distance between two points.
pub fn horizontal_spread(a: Point, b: Point) -> f64 {
    (a.x - b.x).abs()
}
