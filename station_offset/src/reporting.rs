use crate::geometry::Point;
use crate::io::write_string;
use crate::projection::StationOffset;

/// Fractional digits used when no precision is configured.
pub const DEFAULT_PRECISION: usize = 6;

/// Formats a result as `Station:`/`Offset:` lines, adding the closest point
/// when `verbose` is set.
pub fn format_result(result: &StationOffset, precision: usize, verbose: bool) -> String {
    let mut out = format!(
        "Station: {:.p$}\nOffset: {:.p$}",
        result.station,
        result.offset,
        p = precision
    );
    if verbose {
        out.push_str(&format!(
            "\nClosest point: ({:.p$}, {:.p$})",
            result.closest_point.x,
            result.closest_point.y,
            p = precision
        ));
    }
    out
}

/// Builds one `x,y,station,offset,closest_x,closest_y` row per query.
pub fn result_rows(queries: &[Point], results: &[StationOffset], precision: usize) -> Vec<String> {
    queries
        .iter()
        .zip(results)
        .map(|(q, r)| {
            format!(
                "{:.p$},{:.p$},{:.p$},{:.p$},{:.p$},{:.p$}",
                q.x,
                q.y,
                r.station,
                r.offset,
                r.closest_point.x,
                r.closest_point.y,
                p = precision
            )
        })
        .collect()
}

/// Joins [`result_rows`] into newline terminated CSV text.
pub fn results_to_csv(queries: &[Point], results: &[StationOffset], precision: usize) -> String {
    let mut out = String::new();
    for row in result_rows(queries, results, precision) {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// Writes batch results to a CSV file without a header.
pub fn write_results_csv(
    path: &str,
    queries: &[Point],
    results: &[StationOffset],
    precision: usize,
) -> std::io::Result<()> {
    write_string(path, &results_to_csv(queries, results, precision))
}
