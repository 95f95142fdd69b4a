use clap::{Parser, Subcommand};
use std::io;
use std::process::ExitCode;
use station_offset::{
    geometry::{Point, Polyline},
    io::{read_points_csv, DEFAULT_DELIMITER},
    reporting::{format_result, results_to_csv, write_results_csv, DEFAULT_PRECISION},
    validate_polyline,
};

fn print_point(p: Point, precision: usize) {
    println!("{:.p$},{:.p$}", p.x, p.y, p = precision);
}

/// Reads a point file, naming the file when it does not exist.
fn load_points(kind: &str, path: &str, delimiter: char) -> io::Result<Vec<Point>> {
    read_points_csv(path, delimiter).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} file '{}' not found", kind, path),
        ),
        _ => e,
    })
}

fn load_polyline(path: &str, delimiter: char) -> io::Result<Polyline> {
    load_points("Polyline", path, delimiter).map(Polyline::new)
}

/// Compute station and offset for points relative to a polyline.
#[derive(Parser)]
#[command(name = "station_offset_cli", version)]
struct Cli {
    /// Field delimiter used in polyline and point files
    #[arg(long, default_value_t = DEFAULT_DELIMITER, global = true)]
    delimiter: char,
    /// Fractional digits of printed values
    #[arg(long, default_value_t = DEFAULT_PRECISION, global = true)]
    precision: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute station and offset of a single point.
    Project {
        /// File of x,y polyline vertices without a header row.
        polyline: String,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        /// Also print the closest point on the polyline.
        #[arg(short, long)]
        verbose: bool,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Compute station and offset for every point of a second file.
    Batch {
        polyline: String,
        points: String,
        /// Write the results to a CSV file instead of stdout.
        #[arg(long)]
        output: Option<String>,
    },
    /// Compute the coordinates at a station and offset along the polyline.
    Locate {
        polyline: String,
        #[arg(allow_negative_numbers = true)]
        station: f64,
        /// Perpendicular offset, positive to the left of the direction of travel.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        offset: f64,
    },
}

fn run(cli: Cli) -> io::Result<()> {
    let precision = cli.precision;
    match cli.command {
        Commands::Project {
            polyline,
            x,
            y,
            verbose,
            json,
        } => {
            let pl = load_polyline(&polyline, cli.delimiter)?;
            let result = pl.station_offset(Point::new(x, y))?;
            if json {
                let text = serde_json::to_string_pretty(&result).map_err(io::Error::other)?;
                println!("{}", text);
                return Ok(());
            }
            if verbose {
                println!("Polyline: {} points", pl.vertices.len());
                println!("Query point: ({:?}, {:?})", x, y);
            }
            println!("{}", format_result(&result, precision, verbose));
        }
        Commands::Batch {
            polyline,
            points,
            output,
        } => {
            let pl = load_polyline(&polyline, cli.delimiter)?;
            let queries = load_points("Points", &points, cli.delimiter)?;
            let results = pl.station_offsets(&queries)?;
            match output {
                Some(path) => {
                    write_results_csv(&path, &queries, &results, precision)?;
                    println!("Wrote {} results to {}", results.len(), path);
                }
                None => print!("{}", results_to_csv(&queries, &results, precision)),
            }
        }
        Commands::Locate {
            polyline,
            station,
            offset,
        } => {
            let pl = load_polyline(&polyline, cli.delimiter)?;
            validate_polyline(&pl.vertices)?;
            let p = pl.locate(station, offset).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!(
                        "station {} is outside the polyline (length {:.p$})",
                        station,
                        pl.length(),
                        p = precision
                    ),
                )
            })?;
            print_point(p, precision);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    log::debug!("delimiter {:?}, precision {}", cli.delimiter, cli.precision);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
