use chrono::NaiveDate;
use proptest::prelude::*;
use shapealbum_core::geometry::{Color, Extent, Position};
use shapealbum_core::{AlbumError, Operation, ShapeKind};
use shapealbum_session::{Album, FixedClock, History, SequenceSuffix};

fn album() -> Album {
    let time = NaiveDate::from_ymd_opt(2024, 4, 20)
        .unwrap()
        .and_hms_micro_opt(16, 45, 12, 9)
        .unwrap();
    Album::with_history(History::with_sources(FixedClock(time), SequenceSuffix::default()))
}

#[test]
fn first_selfie_scenario() {
    let script = "\
shape R rectangle 200 200 50 100 255 0 0
move R 300 200
resize R 25 100
snapshot After first selfie
color R 0 0 255
remove R
";
    let mut album = album();
    let applied = album.run_script(script).unwrap();
    assert_eq!(applied, 6);

    let snaps = album.snapshots();
    assert_eq!(snaps.len(), 1);
    let snap = &snaps[0];
    assert_eq!(snap.description(), "After first selfie");
    assert_eq!(snap.timestamp(), "20-04-2024 16:45:12");
    assert_eq!(snap.id().as_str(), "2024-04-20T16:45:12.0000090");
    assert_eq!(snap.len(), 1);

    let r = snap.shape("R").unwrap();
    assert_eq!(r.kind(), ShapeKind::Rectangle);
    assert_eq!(r.position(), Position::new(300, 200));
    assert_eq!(r.extent(), Extent::new(25, 100));
    assert_eq!(r.color(), Color::new(255, 0, 0));

    assert!(album.current_state().is_empty());
}

#[test]
fn snapshots_do_not_alias_the_canvas() {
    let mut album = album();
    album
        .run_script("shape R rectangle 10 10 5 5 0 0 0\nsnapshot s1\nmove R 40 50\nsnapshot s2\n")
        .unwrap();

    let snaps = album.snapshots();
    assert_eq!(snaps[0].description(), "s1");
    assert_eq!(snaps[0].shape("R").unwrap().position(), Position::new(10, 10));
    assert_eq!(snaps[1].description(), "s2");
    assert_eq!(snaps[1].shape("R").unwrap().position(), Position::new(40, 50));

    // Copies handed out earlier stay frozen too
    album.run_script("move R 0 0\nsnapshot s3\n").unwrap();
    assert_eq!(snaps[1].shape("R").unwrap().position(), Position::new(40, 50));
    assert_eq!(album.snapshots().len(), 3);
}

#[test]
fn comment_lines_are_ignored_by_the_album() {
    let mut album = album();
    let applied = album
        .run_script("# build a scene\nshape O oval 0 0 1 1 1 1 1\n#snapshot hidden\n")
        .unwrap();
    assert_eq!(applied, 1);
    assert_eq!(album.snapshot_count(), 0);
}

fn create(name: String, x: i32, y: i32) -> Operation {
    Operation::CreateShape {
        name,
        kind: ShapeKind::Oval,
        position: Position::new(x, y),
        extent: Extent::new(1, 1),
        color: Color::new(0, 0, 0),
    }
}

proptest! {
    #[test]
    fn distinct_creates_land_in_creation_order(
        names in prop::collection::hash_set("[a-z]{1,6}", 1..12),
        x in -1000i32..1000,
        y in -1000i32..1000,
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let mut album = album();
        for name in &names {
            album.execute(&create(name.clone(), x, y)).unwrap();
        }

        let state = album.current_state();
        let got: Vec<String> = state.names().into_iter().map(String::from).collect();
        prop_assert_eq!(&got, &names);
        for shape in state.contents() {
            prop_assert_eq!(shape.position(), Position::new(x, y));
        }

        // A second create with any existing name is rejected and changes nothing
        let before = album.current_state();
        let dup = album.execute(&create(names[0].clone(), 0, 0));
        prop_assert_eq!(dup, Err(AlbumError::DuplicateName(names[0].clone())));
        prop_assert_eq!(album.current_state(), before);
    }

    #[test]
    fn recolor_accepts_exactly_the_channel_range(r in -50i32..300, g in -50i32..300, b in -50i32..300) {
        let mut album = album();
        album.execute(&create("S".into(), 0, 0)).unwrap();
        let result = album.execute(&Operation::RecolorShape {
            name: "S".into(),
            color: Color::new(r, g, b),
        });

        let valid = [r, g, b].iter().all(|c| (0..=255).contains(c));
        if valid {
            prop_assert!(result.is_ok());
            prop_assert_eq!(album.current_state().shape("S").unwrap().color(), Color::new(r, g, b));
        } else {
            prop_assert_eq!(result, Err(AlbumError::OutOfRange { r, g, b }));
            prop_assert_eq!(album.current_state().shape("S").unwrap().color(), Color::new(0, 0, 0));
        }
    }

    #[test]
    fn operations_on_missing_names_are_not_found(name in "[A-Z]{1,4}") {
        let mut album = album();
        album.execute(&create("present".into(), 0, 0)).unwrap();
        let before = album.current_state();

        let ops = [
            Operation::MoveShape { name: name.clone(), position: Position::new(1, 1) },
            Operation::ResizeShape { name: name.clone(), extent: Extent::new(1, 1) },
            Operation::RecolorShape { name: name.clone(), color: Color::new(1, 1, 1) },
            Operation::RemoveShape { name: name.clone() },
        ];
        for op in &ops {
            prop_assert_eq!(album.execute(op), Err(AlbumError::NotFound(name.clone())));
        }
        prop_assert_eq!(album.current_state(), before);
    }
}
