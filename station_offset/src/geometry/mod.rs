//! Basic geometry primitives for linear referencing.

mod point;
mod segment;

pub use point::Point;
pub use segment::Segment;

/// Calculates the squared Euclidean distance between two points.
pub fn distance_squared(a: Point, b: Point) -> f64 {
    let d = b - a;
    d.dot(d)
}

/// Calculates the Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    distance_squared(a, b).sqrt()
}

/// Representation of a series of connected line segments.
///
/// Vertex order defines the direction of travel and the station origin.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Polyline {
    pub vertices: Vec<Point>,
}

impl Polyline {
    /// Creates a new polyline from a list of vertices.
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Iterates over the segments between consecutive vertices, including
    /// zero-length ones.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.vertices
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
    }

    /// Returns the total length of all segments in the polyline.
    pub fn length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }

    /// Returns the position at the given station along the polyline.
    pub fn point_at(&self, station: f64) -> Option<Point> {
        match self.segment_at(station) {
            Some((segment, t)) => Some(segment.point_at(t)),
            None if station == 0.0 => self.vertices.first().copied(),
            None => None,
        }
    }

    /// Returns the point at `station` shifted perpendicular to the polyline
    /// by `offset`. Positive offsets lie left of the direction of travel.
    pub fn locate(&self, station: f64, offset: f64) -> Option<Point> {
        let (segment, t) = self.segment_at(station)?;
        let normal = segment.left_normal()?;
        Some(segment.point_at(t) + normal * offset)
    }

    /// Finds the non-degenerate segment containing `station` and the
    /// parameter along it.
    fn segment_at(&self, station: f64) -> Option<(Segment, f64)> {
        if !(0.0..=self.length()).contains(&station) {
            return None;
        }
        let mut remaining = station;
        let mut last = None;
        for segment in self.segments().filter(|s| !s.is_degenerate()) {
            let len = segment.length();
            if remaining <= len {
                return Some((segment, remaining / len));
            }
            remaining -= len;
            last = Some(segment);
        }
        // rounding can leave a sliver past the final segment
        last.map(|segment| (segment, 1.0))
    }
}
