mod common;

use std::fs;
use std::io::Cursor;

use common::fixture_path;
use shipload_lib::{Error, VesselCatalog};

#[test]
fn loads_fixture_catalog() {
    let path = fixture_path();
    let catalog = VesselCatalog::from_path(&path).expect("fixture loads");

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.source_path(), Some(path.as_path()));
    assert_eq!(
        catalog.vessel_names(),
        vec!["Atlantic Express", "Nordic Star", "Pacific Runner"]
    );

    let nordic = catalog.get("nordic star").expect("Nordic Star exists");
    assert_eq!(nordic.max_container_count, 2);
    assert_eq!(nordic.max_weight_tons, 4.5);
    assert_eq!(nordic.max_weight_kg(), 4500.0);
}

#[test]
fn builds_empty_vessels_by_name() {
    let catalog = VesselCatalog::builtin();
    let vessel = catalog.vessel("pacific runner").expect("known vessel");
    assert_eq!(vessel.name(), "Pacific Runner");
    assert_eq!(vessel.max_container_count(), 5);
    assert!(vessel.is_empty());
}

#[test]
fn unknown_vessel_offers_suggestions() {
    let catalog = VesselCatalog::builtin();
    let err = catalog.vessel("Atlantik Express").unwrap_err();

    match &err {
        Error::UnknownVessel { name, suggestions } => {
            assert_eq!(name, "Atlantik Express");
            assert_eq!(suggestions.first().map(String::as_str), Some("Atlantic Express"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("Did you mean"));
}

#[test]
fn reads_catalog_written_to_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("fleet.csv");
    fs::write(&path, "ship,speed,containers,weight_t\nHarbor Tug,12,1,0.5\n")
        .expect("write catalog");

    let catalog = VesselCatalog::from_path(&path).expect("synonym headers resolve");
    let tug = catalog.get("HARBOR TUG").expect("tug exists");
    assert_eq!(tug.max_speed_knots, 12.0);
    assert_eq!(tug.max_container_count, 1);
}

#[test]
fn missing_columns_are_reported() {
    let csv = "name,max_speed_knots\nAtlantic Express,25\n";
    let err = VesselCatalog::from_reader(Cursor::new(csv)).unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, Error::VesselDataValidation { .. }));
    assert!(message.contains("max_container_count"));
    assert!(message.contains("max_weight_tons"));
}

#[test]
fn duplicate_names_are_rejected_case_insensitively() {
    let csv = "name,max_speed_knots,max_container_count,max_weight_tons\n\
               Atlantic Express,25,3,10\n\
               ATLANTIC EXPRESS,20,5,20\n";
    let err = VesselCatalog::from_reader(Cursor::new(csv)).unwrap_err();
    assert!(matches!(err, Error::DuplicateVesselName { ref name } if name == "ATLANTIC EXPRESS"));
}

#[test]
fn bad_rows_name_the_line_number() {
    let csv = "name,max_speed_knots,max_container_count,max_weight_tons\n\
               Atlantic Express,25,3,10\n\
               Pacific Runner,20,five,20\n";
    let err = VesselCatalog::from_reader(Cursor::new(csv)).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("max_container_count"), "{message}");
    assert!(message.contains("row 3"), "{message}");
}

#[test]
fn negative_limits_fail_validation() {
    let csv = "name,max_speed_knots,max_container_count,max_weight_tons\n\
               Sinking Ship,10,3,-1\n";
    let err = VesselCatalog::from_reader(Cursor::new(csv)).unwrap_err();
    assert!(matches!(err, Error::VesselDataValidation { .. }));
    assert!(err.to_string().contains("row 2"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = VesselCatalog::from_path(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
