use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/routes.csv")
        .canonicalize()
        .expect("fixture routes file present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("farepath-cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn cheapest_route_prints_legs_and_total() {
    let mut cmd = cli();
    cmd.arg("--routes")
        .arg(fixture_path())
        .arg("cheapest")
        .arg("--from")
        .arg("GRU")
        .arg("--to")
        .arg("CDG");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("- GRU -> BRC (10)"))
        .stdout(predicate::str::contains("- ORL -> CDG (5)"))
        .stdout(predicate::str::contains("Total cost: 40"));
}

#[test]
fn lowercase_codes_are_accepted() {
    let mut cmd = cli();
    cmd.arg("--routes")
        .arg(fixture_path())
        .arg("cheapest")
        .arg("--from")
        .arg("brc")
        .arg("--to")
        .arg("cdg");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 30"));
}

#[test]
fn json_format_renders_exact_total() {
    let mut cmd = cli();
    cmd.arg("--routes")
        .arg(fixture_path())
        .arg("--format")
        .arg("json")
        .arg("cheapest")
        .arg("--from")
        .arg("GRU")
        .arg("--to")
        .arg("CDG");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"total_cost\": \"40\""))
        .stdout(predicate::str::contains("\"from\": \"GRU\""));
}

#[test]
fn unreachable_destination_fails_with_friendly_message() {
    let mut cmd = cli();
    cmd.arg("--routes")
        .arg(fixture_path())
        .arg("cheapest")
        .arg("--from")
        .arg("CDG")
        .arg("--to")
        .arg("GRU");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "no travel route found between CDG and GRU",
        ));
}

#[test]
fn list_prints_every_stored_route() {
    let mut cmd = cli();
    cmd.arg("--routes").arg(fixture_path()).arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("- GRU -> SCL (20)"))
        .stdout(predicate::str::contains("- SCL -> ORL (20)"));
}

#[test]
fn duplicate_routes_file_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("routes.csv");
    fs::write(&path, "from,to,cost\nGRU,BRC,10\ngru,brc,12\n").expect("write csv");

    let mut cmd = cli();
    cmd.arg("--routes").arg(&path).arg("list");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("already a route departing from GRU"));
}
