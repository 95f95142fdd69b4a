//! Core library for station/offset linear referencing along polylines.

pub mod geometry;
pub mod io;
pub mod projection;
pub mod reporting;

pub use geometry::{Point, Polyline, Segment};
pub use projection::{station_offset, station_offsets, validate_polyline, StationOffset};
