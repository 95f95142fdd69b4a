//! Station and offset of query points relative to a reference polyline.

use std::io;

use crate::geometry::{distance_squared, Point, Polyline, Segment};

/// Location of a query point expressed along a polyline.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StationOffset {
    /// Distance along the polyline from its first vertex to `closest_point`.
    pub station: f64,
    /// Distance from the query point to `closest_point`.
    pub offset: f64,
    /// Nearest point on the polyline.
    pub closest_point: Point,
    /// Index of the segment `closest_point` lies on.
    pub segment_index: usize,
}

fn invalid_input(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

/// Checks that `vertices` describe a usable polyline: at least two vertices,
/// all with finite coordinates.
pub fn validate_polyline(vertices: &[Point]) -> io::Result<()> {
    if vertices.is_empty() {
        return Err(invalid_input("polyline cannot be empty".into()));
    }
    if vertices.len() < 2 {
        return Err(invalid_input(format!(
            "polyline must contain at least 2 points, got {}",
            vertices.len()
        )));
    }
    if let Some(idx) = vertices.iter().position(|p| !p.is_finite()) {
        return Err(invalid_input(format!(
            "polyline vertex {} has non-finite coordinates ({}, {})",
            idx, vertices[idx].x, vertices[idx].y
        )));
    }
    Ok(())
}

fn validate_query(query: Point) -> io::Result<()> {
    if query.is_finite() {
        Ok(())
    } else {
        Err(invalid_input(format!(
            "query point has non-finite coordinates ({}, {})",
            query.x, query.y
        )))
    }
}

/// Computes station, offset and closest point of `query` relative to the
/// polyline through `vertices`.
///
/// Every segment is checked in order. Projections falling outside a segment
/// are clamped to its endpoints and zero-length segments act as a single
/// point. When several segments are equally close the first one wins.
pub fn station_offset(vertices: &[Point], query: Point) -> io::Result<StationOffset> {
    validate_polyline(vertices)?;
    validate_query(query)?;
    Ok(project(vertices, query))
}

/// Projects every query point onto the same polyline, preserving order.
///
/// Fails on the first query with non-finite coordinates.
pub fn station_offsets(vertices: &[Point], queries: &[Point]) -> io::Result<Vec<StationOffset>> {
    validate_polyline(vertices)?;
    queries
        .iter()
        .map(|&query| {
            validate_query(query)?;
            Ok(project(vertices, query))
        })
        .collect()
}

/// Single pass over the segments. Callers validate the inputs first.
fn project(vertices: &[Point], query: Point) -> StationOffset {
    let mut best_sq = f64::INFINITY;
    let mut best = StationOffset {
        station: 0.0,
        offset: f64::INFINITY,
        closest_point: vertices[0],
        segment_index: 0,
    };
    let mut cumulative = 0.0;

    for (index, pair) in vertices.windows(2).enumerate() {
        let segment = Segment::new(pair[0], pair[1]);
        let t = segment.parameter_of(query);
        let candidate = segment.point_at(t);
        let length = segment.length();
        let dist_sq = distance_squared(query, candidate);
        // strict comparison keeps the earliest segment on ties
        if dist_sq < best_sq {
            best_sq = dist_sq;
            best.station = cumulative + t * length;
            best.closest_point = candidate;
            best.segment_index = index;
        }
        cumulative += length;
    }

    best.offset = best_sq.sqrt();
    log::debug!(
        "projected ({}, {}) onto segment {}: station {}, offset {}",
        query.x,
        query.y,
        best.segment_index,
        best.station,
        best.offset
    );
    best
}

impl Polyline {
    /// Computes station and offset of `query` relative to this polyline.
    pub fn station_offset(&self, query: Point) -> io::Result<StationOffset> {
        station_offset(&self.vertices, query)
    }

    /// Computes station and offset for each of `queries`.
    pub fn station_offsets(&self, queries: &[Point]) -> io::Result<Vec<StationOffset>> {
        station_offsets(&self.vertices, queries)
    }
}
