//! Shipload library entry points.
//!
//! This crate models cargo containers (liquid, gas, refrigerated) with their
//! per-type loading rules, and vessels that carry them under aggregate count
//! and weight limits. Higher-level consumers (the CLI) should only depend on
//! the items exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod constants;
pub mod container;
pub mod error;
pub mod product;
pub mod serial;
pub mod vessel;

pub use container::{
    CargoContainer, Container, ContainerFactory, ContainerKind, ContainerSpec, GasContainer,
    HazardNotifier, LiquidContainer, RefrigeratedContainer,
};
pub use error::{Error, Hazard, Result};
pub use product::ProductType;
pub use serial::{SerialIssuer, SerialNumber};
pub use vessel::{
    AdmissionDenial, ContainerLine, LoadReport, Rejection, Vessel, VesselCatalog, VesselSpec,
    VesselSummary,
};
