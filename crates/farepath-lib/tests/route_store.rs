use std::fs;
use std::path::PathBuf;

use rust_decimal_macros::dec;
use farepath_lib::{Error, RouteStore};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/routes.csv")
}

#[test]
fn fixture_file_loads_in_record_order() {
    let store = RouteStore::from_csv_path(&fixture_path()).expect("fixture loads");
    assert_eq!(store.len(), 7);

    let from_gru: Vec<_> = store
        .routes_from("GRU")
        .iter()
        .map(|route| route.to.as_str())
        .collect();
    assert_eq!(from_gru, vec!["BRC", "CDG", "SCL", "ORL"]);

    let first = store.route(1).expect("first record stored");
    assert_eq!(first.from, "GRU");
    assert_eq!(first.to, "BRC");
    assert_eq!(first.cost, dec!(10));
}

#[test]
fn missing_file_is_reported() {
    let missing = PathBuf::from("definitely/not/here.csv");
    assert!(RouteStore::from_csv_path(&missing).is_err());
}

#[test]
fn malformed_record_names_its_line() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("routes.csv");
    fs::write(&path, "from,to,cost\nGRU,BRC,10\nBRC,SCL,cheap\n").expect("write csv");

    let err = RouteStore::from_csv_path(&path).unwrap_err();
    match err {
        Error::InvalidRecord { line, .. } => assert_eq!(line, 3),
        other => panic!("expected InvalidRecord, got {other}"),
    }
}

#[test]
fn duplicate_record_is_rejected_at_load() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("routes.csv");
    fs::write(&path, "from,to,cost\nGRU,BRC,10\ngru,brc,12\n").expect("write csv");

    let err = RouteStore::from_csv_path(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        "there is already a route departing from GRU and arriving in BRC"
    );
}
