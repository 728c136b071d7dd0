//! Script to album to rendered export, end to end.

use std::fs;

use chrono::NaiveDate;
use shapealbum_core::{AlbumError, ShapeKind};
use shapealbum_export::{render, Format, WebOptions};
use shapealbum_geometry::Position;
use shapealbum_session::{Album, FixedClock, History, RunError, SequenceSuffix};

const SCRIPT: &str = "\
# demo album
shape R rectangle 200 200 50 100 255 0 0
shape O oval 500 100 60 30 0 0 255
snapshot After first selfie

move R 100 300
color O 0 255 0
snapshot 2nd selfie
remove R
snapshot
";

fn album() -> Album {
    let time = NaiveDate::from_ymd_opt(2024, 4, 20)
        .unwrap()
        .and_hms_opt(16, 45, 12)
        .unwrap();
    Album::with_history(History::with_sources(FixedClock(time), SequenceSuffix::default()))
}

#[test]
fn script_produces_three_snapshots() {
    let mut album = album();
    let applied = album.run_script(SCRIPT).unwrap();
    assert_eq!(applied, 8);

    let snaps = album.snapshots();
    assert_eq!(snaps.len(), 3);
    assert_eq!(snaps[0].description(), "After first selfie");
    assert_eq!(snaps[2].description(), "");

    let moved = snaps[1].shape("R").unwrap();
    assert_eq!(moved.kind(), ShapeKind::Rectangle);
    assert_eq!(moved.position(), Position::new(100, 300));
    assert!(snaps[2].shape("R").is_none());

    // earlier snapshots are not touched by later operations
    assert_eq!(snaps[0].shape("R").unwrap().position(), Position::new(200, 200));
}

#[test]
fn every_view_renders_the_album() {
    let mut album = album();
    album.run_script(SCRIPT).unwrap();
    let snaps = album.snapshots();
    let options = WebOptions {
        width: 640,
        height: 480,
        ..WebOptions::default()
    };

    let html = render(Format::Web, &snaps, &options).unwrap();
    assert_eq!(html.matches("<svg").count(), 3);
    assert!(html.contains("2nd selfie"));

    let text = render(Format::Text, &snaps, &options).unwrap();
    assert!(text.contains("Min corner: (100.0,300.0)"));
    assert!(text.contains("Color: (0.0,255.0,0.0)"));

    let json = render(Format::Json, &snaps, &options).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
}

#[test]
fn failing_operation_keeps_earlier_snapshots() {
    let mut album = album();
    let err = album
        .run_script("shape R rectangle 0 0 1 1 0 0 0\nsnapshot one\nmove Q 1 1\nsnapshot two\n")
        .unwrap_err();

    match err {
        RunError::Execute { index, source, .. } => {
            assert_eq!(index, 2);
            assert!(matches!(source, AlbumError::NotFound(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(album.snapshot_count(), 1);
}

#[test]
fn parse_error_names_the_line() {
    let mut album = album();
    let err = album.run_script("shape R rectangle 0 0 1 1 0 0 0\nmove R 90\nsnapshot s\n").unwrap_err();
    assert!(matches!(err, RunError::Parse(_)));
    assert!(err.to_string().starts_with("line 2:"));
    assert_eq!(album.snapshot_count(), 0);
}

#[test]
fn rendered_album_lands_on_disk() {
    let mut album = album();
    album.run_script(SCRIPT).unwrap();
    let html = render(Format::Web, &album.snapshots(), &WebOptions::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("album.html");
    fs::write(&path, &html).unwrap();
    let back = fs::read_to_string(&path).unwrap();
    assert!(back.contains("Welcome To The Album!"));
}
