//! File input and output helpers for polyline data.

use std::fs::File;
use std::io::{self, Read, Write};

use crate::geometry::{Point, Polyline};

/// Field delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = ',';

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file, replacing any existing contents.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())
}

fn parse_field(field: Option<&str>, line: usize) -> io::Result<f64> {
    let field = field.map(str::trim).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("line {}: expected two delimited values", line),
        )
    })?;
    field.parse::<f64>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("line {}: {} ('{}')", line, e, field),
        )
    })
}

/// Parses `x<delim>y` records, one per line, without a header.
///
/// Blank lines are skipped and fields are trimmed. Values after the second
/// field are ignored.
pub fn parse_points(text: &str, delimiter: char) -> io::Result<Vec<Point>> {
    let mut pts = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split(delimiter);
        let x = parse_field(fields.next(), idx + 1)?;
        let y = parse_field(fields.next(), idx + 1)?;
        pts.push(Point::new(x, y));
    }
    Ok(pts)
}

/// Reads a delimited file of `x,y` pairs into [`Point`]s.
pub fn read_points_csv(path: &str, delimiter: char) -> io::Result<Vec<Point>> {
    let text = read_to_string(path)?;
    let pts = parse_points(&text, delimiter)?;
    log::debug!("read {} points from {}", pts.len(), path);
    Ok(pts)
}

/// Reads a comma separated polyline file.
///
/// The vertex count is not checked here; projection rejects polylines with
/// fewer than two vertices.
pub fn read_polyline(path: &str) -> io::Result<Polyline> {
    read_points_csv(path, DEFAULT_DELIMITER).map(Polyline::new)
}
