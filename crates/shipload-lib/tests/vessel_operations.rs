mod common;

use common::{bananas, gas, liquid, vessel};
use shipload_lib::{AdmissionDenial, CargoContainer, ContainerFactory, Error};

#[test]
fn refuses_container_beyond_count_limit_even_when_weight_fits() {
    let mut factory = ContainerFactory::new();
    let mut ship = vessel("Atlantic Express", 3, 10.0);

    for _ in 0..3 {
        ship.load_container(gas(&mut factory, 10.0, 10.0)).unwrap();
    }

    let fourth = gas(&mut factory, 10.0, 10.0);
    let serial = fourth.serial().clone();
    let rejection = ship.load_container(fourth).unwrap_err();

    assert_eq!(
        rejection.reason(),
        &AdmissionDenial::ContainerLimit {
            max_container_count: 3
        }
    );
    assert_eq!(rejection.vessel(), "Atlantic Express");
    assert_eq!(rejection.into_container().serial(), &serial);
    assert_eq!(ship.container_count(), 3);
    assert!(!ship.contains(&serial));
}

#[test]
fn refuses_container_that_exceeds_aggregate_weight() {
    let mut factory = ContainerFactory::new();
    let mut ship = vessel("Light", 10, 1.0);

    ship.load_container(liquid(&mut factory, 600.0, 1000.0, false))
        .unwrap();
    let heavy = liquid(&mut factory, 401.0, 1000.0, false);

    let rejection = ship.load_container(heavy).unwrap_err();
    match rejection.reason() {
        AdmissionDenial::WeightLimit {
            resulting_weight_kg,
            max_weight_kg,
        } => {
            assert_eq!(*resulting_weight_kg, 1001.0);
            assert_eq!(*max_weight_kg, 1000.0);
        }
        other => panic!("unexpected denial: {other}"),
    }
    assert_eq!(ship.container_count(), 1);
    assert_eq!(ship.total_weight_kg(), 600.0);
}

#[test]
fn admission_counts_cargo_not_just_tare() {
    let mut factory = ContainerFactory::new();
    let ship = vessel("Scale", 10, 1.0);

    let mut loaded = gas(&mut factory, 100.0, 1000.0);
    assert!(ship.can_load(&loaded));
    loaded.load_cargo(901.0).unwrap();
    assert!(!ship.can_load(&loaded));
}

#[test]
fn batch_loading_checks_each_container_against_updated_state() {
    let mut factory = ContainerFactory::new();
    let mut ship = vessel("Batch", 2, 10.0);

    let batch = vec![
        gas(&mut factory, 100.0, 100.0),
        gas(&mut factory, 100.0, 100.0),
        gas(&mut factory, 100.0, 100.0),
    ];
    let serials: Vec<_> = batch.iter().map(|c| c.serial().clone()).collect();

    let report = ship.load_containers(batch);
    assert_eq!(report.loaded, serials[..2].to_vec());
    assert_eq!(report.rejected.len(), 1);
    assert!(!report.is_complete());

    let returned = report.into_rejected_containers();
    assert_eq!(returned[0].serial(), &serials[2]);
    assert_eq!(ship.container_count(), 2);
}

#[test]
fn containers_keep_insertion_order() {
    let mut factory = ContainerFactory::new();
    let mut ship = vessel("Order", 5, 100.0);

    let first = liquid(&mut factory, 1.0, 1.0, false);
    let second = gas(&mut factory, 1.0, 1.0);
    let third = bananas(&mut factory, 1.0, 1.0);
    let expected = vec![
        first.serial().clone(),
        second.serial().clone(),
        third.serial().clone(),
    ];

    ship.load_containers([first, second, third]);
    let actual: Vec<_> = ship.containers().iter().map(|c| c.serial().clone()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn remove_container_reports_whether_anything_was_removed() {
    let mut factory = ContainerFactory::new();
    let mut ship = vessel("Remove", 5, 100.0);
    let container = liquid(&mut factory, 1.0, 1.0, false);
    let serial = container.serial().clone();
    ship.load_container(container).unwrap();

    let removed = ship.remove_container(&serial).expect("container was aboard");
    assert_eq!(removed.serial(), &serial);
    assert!(ship.remove_container(&serial).is_none());
    assert!(ship.is_empty());
}

#[test]
fn replace_keeps_position_on_success() {
    let mut factory = ContainerFactory::new();
    let mut ship = vessel("Replace", 3, 10.0);

    let a = liquid(&mut factory, 100.0, 100.0, false);
    let b = gas(&mut factory, 100.0, 100.0);
    let c = bananas(&mut factory, 100.0, 100.0);
    let (a_serial, b_serial, c_serial) =
        (a.serial().clone(), b.serial().clone(), c.serial().clone());
    ship.load_containers([a, b, c]);

    let replacement = gas(&mut factory, 200.0, 100.0);
    let replacement_serial = replacement.serial().clone();

    // A full vessel can still swap: the old container is out during the check.
    let old = ship.replace_container(&b_serial, replacement).unwrap();
    assert_eq!(old.serial(), &b_serial);

    let order: Vec<_> = ship.containers().iter().map(|c| c.serial().clone()).collect();
    assert_eq!(order, vec![a_serial, replacement_serial, c_serial]);
    assert_eq!(ship.total_weight_kg(), 400.0);
}

#[test]
fn replace_refused_by_weight_leaves_vessel_unchanged() {
    let mut factory = ContainerFactory::new();
    let mut ship = vessel("Replace", 3, 1.0);

    let a = liquid(&mut factory, 300.0, 100.0, false);
    let b = gas(&mut factory, 300.0, 100.0);
    let b_serial = b.serial().clone();
    ship.load_containers([a, b]);
    let before: Vec<_> = ship.containers().iter().map(|c| c.serial().clone()).collect();

    let too_heavy = bananas(&mut factory, 701.0, 100.0);
    let rejection = ship.replace_container(&b_serial, too_heavy).unwrap_err();
    assert!(matches!(
        rejection.reason(),
        AdmissionDenial::WeightLimit { .. }
    ));

    let after: Vec<_> = ship.containers().iter().map(|c| c.serial().clone()).collect();
    assert_eq!(after, before);
    assert_eq!(ship.container_count(), 2);
    assert_eq!(ship.total_weight_kg(), 600.0);
}

#[test]
fn replace_of_missing_container_hands_replacement_back() {
    let mut factory = ContainerFactory::new();
    let mut ship = vessel("Replace", 3, 10.0);
    let ghost = liquid(&mut factory, 1.0, 1.0, false);
    let ghost_serial = ghost.serial().clone();
    drop(ghost);

    let replacement = gas(&mut factory, 1.0, 1.0);
    let rejection = ship.replace_container(&ghost_serial, replacement).unwrap_err();
    assert_eq!(
        rejection.reason(),
        &AdmissionDenial::NotFound {
            serial: ghost_serial.clone()
        }
    );

    let err: Error = rejection.into();
    assert!(matches!(err, Error::ContainerNotFound { serial, .. } if serial == ghost_serial));
    assert!(ship.is_empty());
}

#[test]
fn transfer_moves_container_between_vessels() {
    let mut factory = ContainerFactory::new();
    let mut source = vessel("Source", 3, 10.0);
    let mut target = vessel("Target", 3, 10.0);

    let container = gas(&mut factory, 150.0, 500.0);
    let serial = container.serial().clone();
    source.load_container(container).unwrap();

    source.transfer_container(&serial, &mut target).unwrap();
    assert!(!source.contains(&serial));
    assert!(target.contains(&serial));
    assert_eq!(source.container_count() + target.container_count(), 1);
}

#[test]
fn refused_transfer_changes_neither_vessel() {
    let mut factory = ContainerFactory::new();
    let mut source = vessel("Source", 3, 10.0);
    let mut target = vessel("Target", 1, 10.0);

    target
        .load_container(liquid(&mut factory, 1.0, 1.0, false))
        .unwrap();
    let container = gas(&mut factory, 150.0, 500.0);
    let serial = container.serial().clone();
    source.load_container(container).unwrap();

    let err = source.transfer_container(&serial, &mut target).unwrap_err();
    assert!(matches!(
        err,
        Error::AdmissionDenied {
            reason: AdmissionDenial::ContainerLimit { .. },
            ..
        }
    ));
    assert!(source.contains(&serial));
    assert!(!target.contains(&serial));
    assert_eq!(target.container_count(), 1);
}

#[test]
fn transfer_of_unknown_container_is_not_found() {
    let mut factory = ContainerFactory::new();
    let mut source = vessel("Source", 3, 10.0);
    let mut target = vessel("Target", 3, 10.0);
    let stray = gas(&mut factory, 1.0, 1.0);

    let err = source
        .transfer_container(stray.serial(), &mut target)
        .unwrap_err();
    assert!(matches!(err, Error::ContainerNotFound { ref vessel, .. } if vessel == "Source"));
    assert!(target.is_empty());
}

#[test]
fn summary_lists_each_container() {
    let mut factory = ContainerFactory::new();
    let mut ship = vessel("Report", 3, 10.0);
    ship.load_container(liquid(&mut factory, 200.0, 1000.0, true))
        .unwrap();
    ship.load_container(gas(&mut factory, 150.0, 500.0)).unwrap();

    let summary = ship.summary();
    assert_eq!(summary.name, "Report");
    assert_eq!(summary.container_count, 2);
    assert_eq!(summary.total_weight_kg, 350.0);
    assert_eq!(summary.max_weight_kg, 10_000.0);
    assert_eq!(summary.containers[0].serial.to_string(), "KON-L-1");
    assert_eq!(summary.containers[0].details, "dangerous goods");

    let json = serde_json::to_value(&summary).expect("summary serializes");
    assert_eq!(json["containers"][1]["serial"], "KON-G-2");
    assert_eq!(json["containers"][1]["kind"], "gas");
    assert_eq!(json["max_weight_kg"], 10_000.0);
}
