#![allow(dead_code)]

use std::path::PathBuf;

use shipload_lib::{Container, ContainerFactory, ContainerSpec, ProductType, Vessel};

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/vessels.csv")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Liquid container with the given dimensions and no cargo.
pub fn liquid(
    factory: &mut ContainerFactory,
    tare: f64,
    capacity: f64,
    dangerous: bool,
) -> Container {
    factory
        .liquid(ContainerSpec::new(tare, capacity), dangerous)
        .expect("valid liquid container")
        .into()
}

pub fn gas(factory: &mut ContainerFactory, tare: f64, capacity: f64) -> Container {
    factory
        .gas(ContainerSpec::new(tare, capacity), 1.0)
        .expect("valid gas container")
        .into()
}

pub fn bananas(factory: &mut ContainerFactory, tare: f64, capacity: f64) -> Container {
    factory
        .refrigerated(ContainerSpec::new(tare, capacity), ProductType::Bananas, 14.0)
        .expect("valid refrigerated container")
        .into()
}

pub fn vessel(name: &str, max_containers: usize, max_weight_tons: f64) -> Vessel {
    Vessel::new(name, 20.0, max_containers, max_weight_tons).expect("valid vessel")
}
