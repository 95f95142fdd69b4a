use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn polyline_file(dir: &assert_fs::TempDir) -> assert_fs::fixture::ChildPath {
    let file = dir.child("polyline.csv");
    file.write_str("0.0,0.0\n10.0,0.0\n10.0,10.0\n").unwrap();
    file
}

#[test]
fn project_command() {
    let dir = assert_fs::TempDir::new().unwrap();
    let polyline = polyline_file(&dir);

    Command::cargo_bin("station_offset_cli")
        .unwrap()
        .args(["project", polyline.path().to_str().unwrap(), "7.0", "4.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Station: 14.000000"))
        .stdout(predicate::str::contains("Offset: 3.000000"))
        .stdout(predicate::str::contains("Closest point").not());
    dir.close().unwrap();
}

#[test]
fn project_verbose_command() {
    let dir = assert_fs::TempDir::new().unwrap();
    let polyline = polyline_file(&dir);

    Command::cargo_bin("station_offset_cli")
        .unwrap()
        .args(["project", polyline.path().to_str().unwrap(), "7", "4", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Polyline: 3 points"))
        .stdout(predicate::str::contains("Query point: (7.0, 4.0)"))
        .stdout(predicate::str::contains(
            "Closest point: (10.000000, 4.000000)",
        ));
    dir.close().unwrap();
}

#[test]
fn project_negative_coordinates() {
    let dir = assert_fs::TempDir::new().unwrap();
    let polyline = polyline_file(&dir);

    Command::cargo_bin("station_offset_cli")
        .unwrap()
        .args([
            "--precision",
            "3",
            "project",
            polyline.path().to_str().unwrap(),
            "5",
            "-2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Station: 5.000"))
        .stdout(predicate::str::contains("Offset: 2.000"));
    dir.close().unwrap();
}

#[test]
fn project_json_command() {
    let dir = assert_fs::TempDir::new().unwrap();
    let polyline = polyline_file(&dir);

    Command::cargo_bin("station_offset_cli")
        .unwrap()
        .args(["project", polyline.path().to_str().unwrap(), "5", "3", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"station\": 5.0"))
        .stdout(predicate::str::contains("\"segment_index\": 0"));
    dir.close().unwrap();
}

#[test]
fn missing_polyline_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    let missing = dir.child("missing.csv");

    Command::cargo_bin("station_offset_cli")
        .unwrap()
        .args(["project", missing.path().to_str().unwrap(), "1", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Polyline file"))
        .stderr(predicate::str::contains("not found"));
    dir.close().unwrap();
}

#[test]
fn malformed_polyline_file() {
    let file = assert_fs::NamedTempFile::new("bad.csv").unwrap();
    file.write_str("1.0,2.0\nabc,4.0\n").unwrap();

    Command::cargo_bin("station_offset_cli")
        .unwrap()
        .args(["project", file.path().to_str().unwrap(), "1", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: line 2"));
}

#[test]
fn single_point_polyline_rejected() {
    let file = assert_fs::NamedTempFile::new("single.csv").unwrap();
    file.write_str("5.0,5.0\n").unwrap();

    Command::cargo_bin("station_offset_cli")
        .unwrap()
        .args(["project", file.path().to_str().unwrap(), "8", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 points"));
}

#[test]
fn batch_to_stdout() {
    let dir = assert_fs::TempDir::new().unwrap();
    let polyline = polyline_file(&dir);
    let points = dir.child("points.csv");
    points.write_str("5,3\n7,4\n").unwrap();

    Command::cargo_bin("station_offset_cli")
        .unwrap()
        .args([
            "--precision",
            "2",
            "batch",
            polyline.path().to_str().unwrap(),
            points.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("5.00,3.00,5.00,3.00,5.00,0.00\n"))
        .stdout(predicate::str::contains("7.00,4.00,14.00,3.00,10.00,4.00\n"));
    dir.close().unwrap();
}

#[test]
fn batch_to_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    let polyline = dir.child("polyline.txt");
    polyline.write_str("0;0\n10;0\n").unwrap();
    let points = dir.child("points.txt");
    points.write_str("2;1\n").unwrap();
    let output = dir.child("out.csv");

    Command::cargo_bin("station_offset_cli")
        .unwrap()
        .args([
            "--delimiter",
            ";",
            "batch",
            polyline.path().to_str().unwrap(),
            points.path().to_str().unwrap(),
            "--output",
            output.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 results"));

    output.assert(predicate::str::contains(
        "2.000000,1.000000,2.000000,1.000000,2.000000,0.000000",
    ));
    dir.close().unwrap();
}

#[test]
fn batch_missing_points_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    let polyline = polyline_file(&dir);
    let missing = dir.child("nope.csv");

    Command::cargo_bin("station_offset_cli")
        .unwrap()
        .args([
            "batch",
            polyline.path().to_str().unwrap(),
            missing.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Points file"));
    dir.close().unwrap();
}

#[test]
fn locate_command() {
    let dir = assert_fs::TempDir::new().unwrap();
    let polyline = polyline_file(&dir);

    Command::cargo_bin("station_offset_cli")
        .unwrap()
        .args([
            "--precision",
            "3",
            "locate",
            polyline.path().to_str().unwrap(),
            "14",
            "--offset",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("7.000,4.000"));
    dir.close().unwrap();
}

#[test]
fn locate_outside_polyline() {
    let dir = assert_fs::TempDir::new().unwrap();
    let polyline = polyline_file(&dir);

    Command::cargo_bin("station_offset_cli")
        .unwrap()
        .args(["locate", polyline.path().to_str().unwrap(), "25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the polyline"));
    dir.close().unwrap();
}
