//! Demo command handler.
//!
//! Runs a two-vessel loading session: four containers are offered to the
//! first vessel, the gas container moves to the second, leftovers follow it,
//! and the milk container is swapped for a fish container.

use std::io;

use anyhow::{Context, Result};

use shipload_cli::output::{DemoEvent, DemoReport, OutputFormat};
use shipload_lib::{
    AdmissionDenial, CargoContainer, Container, ContainerFactory, ContainerSpec, Error,
    ProductType, Rejection, VesselCatalog,
};

/// Names of the two vessels the session uses.
#[derive(Debug, Clone)]
pub struct DemoVessels {
    pub first: String,
    pub second: String,
}

pub fn handle_demo(
    catalog: &VesselCatalog,
    vessels: &DemoVessels,
    format: OutputFormat,
) -> Result<()> {
    let report = run_demo(catalog, vessels)?;
    format.render_demo(&report, &mut io::stdout().lock())
}

/// Run the session and collect what happened.
///
/// Refusals become [`DemoEvent::Refused`] entries, including a transfer of a
/// container the first vessel never took; only setup failures are errors.
pub fn run_demo(catalog: &VesselCatalog, names: &DemoVessels) -> Result<DemoReport> {
    let mut first = catalog
        .vessel(&names.first)
        .context("first demo vessel is not in the catalog")?;
    let mut second = catalog
        .vessel(&names.second)
        .context("second demo vessel is not in the catalog")?;

    let mut factory = ContainerFactory::new();
    let cargo = build_cargo(&mut factory)?;
    let milk_serial = cargo[0].serial().clone();
    let helium_serial = cargo[2].serial().clone();

    let mut events = Vec::new();

    let report = first.load_containers(cargo);
    events.extend(report.loaded.iter().map(|serial| DemoEvent::Loaded {
        vessel: first.name().to_string(),
        serial: serial.to_string(),
    }));
    events.extend(report.rejected.iter().map(refused));
    let leftovers = report.into_rejected_containers();

    match first.transfer_container(&helium_serial, &mut second) {
        Ok(()) => events.push(DemoEvent::Transferred {
            serial: helium_serial.to_string(),
            from: first.name().to_string(),
            to: second.name().to_string(),
        }),
        Err(Error::AdmissionDenied { vessel, reason, .. }) => events.push(DemoEvent::Refused {
            vessel,
            serial: helium_serial.to_string(),
            reason: reason.to_string(),
        }),
        Err(Error::ContainerNotFound { serial, vessel }) => events.push(DemoEvent::Refused {
            vessel,
            serial: serial.to_string(),
            reason: AdmissionDenial::NotFound { serial }.to_string(),
        }),
        Err(err) => return Err(err.into()),
    }

    for container in leftovers {
        let serial = container.serial().to_string();
        match second.load_container(container) {
            Ok(()) => events.push(DemoEvent::Loaded {
                vessel: second.name().to_string(),
                serial,
            }),
            Err(rejection) => events.push(refused(&rejection)),
        }
    }

    let mut fish = factory.refrigerated(ContainerSpec::new(280.0, 1000.0), ProductType::Fish, 2.0)?;
    fish.load_cargo(700.0)?;
    let fish_serial = fish.serial().to_string();
    match first.replace_container(&milk_serial, fish) {
        Ok(old) => events.push(DemoEvent::Replaced {
            vessel: first.name().to_string(),
            old: old.serial().to_string(),
            new: fish_serial,
        }),
        Err(rejection) => events.push(refused(&rejection)),
    }

    Ok(DemoReport {
        events,
        vessels: vec![first.summary(), second.summary()],
    })
}

/// Milk, fuel, helium and bananas, in that order, already loaded with cargo.
fn build_cargo(factory: &mut ContainerFactory) -> Result<Vec<Container>> {
    let mut milk = factory.liquid(ContainerSpec::new(200.0, 1000.0), false)?;
    milk.load_cargo(500.0)?;

    let mut fuel = factory.liquid(ContainerSpec::new(300.0, 2000.0), true)?;
    fuel.load_cargo(900.0)?;

    let mut helium = factory.gas(ContainerSpec::new(150.0, 500.0), 10.0)?;
    helium.load_cargo(400.0)?;

    let mut bananas =
        factory.refrigerated(ContainerSpec::new(250.0, 800.0), ProductType::Bananas, 14.0)?;
    bananas.load_cargo(600.0)?;

    Ok(vec![milk.into(), fuel.into(), helium.into(), bananas.into()])
}

fn refused(rejection: &Rejection) -> DemoEvent {
    DemoEvent::Refused {
        vessel: rejection.vessel().to_string(),
        serial: rejection.container().serial().to_string(),
        reason: rejection.reason().to_string(),
    }
}
