//! Straight segments between consecutive polyline vertices.

use super::{distance, Point};

/// Representation of a 2D line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Creates a new line segment.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Direction vector from the start point to the end point.
    pub fn vector(&self) -> Point {
        self.end - self.start
    }

    /// Returns the length of the line segment.
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Returns `true` when both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        let v = self.vector();
        v.dot(v) == 0.0
    }

    /// Projection parameter of `p` onto the segment, clamped to `[0, 1]`.
    ///
    /// Zero-length segments behave like their start point and always
    /// return `0.0`.
    pub fn parameter_of(&self, p: Point) -> f64 {
        let v = self.vector();
        let len_sq = v.dot(v);
        if len_sq == 0.0 {
            return 0.0;
        }
        (v.dot(p - self.start) / len_sq).clamp(0.0, 1.0)
    }

    /// Point at parameter `t` along the segment.
    pub fn point_at(&self, t: f64) -> Point {
        self.start + self.vector() * t
    }

    /// Nearest point on the segment to `p`, endpoints inclusive.
    pub fn nearest_point(&self, p: Point) -> Point {
        self.point_at(self.parameter_of(p))
    }

    /// Unit normal pointing to the left of the travel direction.
    pub fn left_normal(&self) -> Option<Point> {
        let len = self.length();
        if len == 0.0 {
            return None;
        }
        let v = self.vector();
        Some(Point::new(-v.y / len, v.x / len))
    }
}
