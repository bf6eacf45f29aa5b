//! Cargo containers and their loading rules.
//!
//! This module is organized into focused submodules:
//!
//! - [`liquid`] - Liquid containers with dangerous-goods fill limits
//! - [`gas`] - Pressurised gas containers that retain a residue when unloaded
//! - [`refrigerated`] - Temperature-controlled containers bound to a product
//! - [`factory`] - Validated construction and serial number assignment
//!
//! Every variant implements [`CargoContainer`]. Liquid and gas containers
//! also implement [`HazardNotifier`] and raise a notification before refusing
//! an unsafe load. [`Container`] wraps the variants so a vessel can own a
//! single ordered collection of them.
//!
//! # Example
//!
//! ```
//! use shipload_lib::{CargoContainer, ContainerFactory, ContainerSpec};
//!
//! let mut factory = ContainerFactory::new();
//! let mut helium = factory
//!     .gas(ContainerSpec::new(150.0, 500.0), 10.0)
//!     .unwrap();
//!
//! helium.load_cargo(400.0).unwrap();
//! helium.unload_cargo();
//! assert!((helium.current_load_kg() - 20.0).abs() < 1e-9);
//! ```

pub mod factory;
pub mod gas;
pub mod liquid;
pub mod refrigerated;

pub use factory::ContainerFactory;
pub use gas::GasContainer;
pub use liquid::LiquidContainer;
pub use refrigerated::RefrigeratedContainer;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::serial::SerialNumber;

/// The three container variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Liquid,
    Gas,
    Refrigerated,
}

impl ContainerKind {
    /// Single-letter code used in serial numbers.
    pub const fn serial_prefix(self) -> char {
        match self {
            ContainerKind::Liquid => 'L',
            ContainerKind::Gas => 'G',
            ContainerKind::Refrigerated => 'C',
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContainerKind::Liquid => "liquid",
            ContainerKind::Gas => "gas",
            ContainerKind::Refrigerated => "refrigerated",
        })
    }
}

/// Physical dimensions shared by all variants, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub tare_weight_kg: f64,
    pub max_capacity_kg: f64,
}

impl ContainerSpec {
    pub fn new(tare_weight_kg: f64, max_capacity_kg: f64) -> Self {
        Self {
            tare_weight_kg,
            max_capacity_kg,
        }
    }

    /// Validate that both dimensions are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.tare_weight_kg, "tare_weight_kg"),
            (self.max_capacity_kg, "max_capacity_kg"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidContainerSpec {
                    message: format!("{field} must be a finite non-negative number"),
                });
            }
        }

        Ok(())
    }
}

/// Capability set every container variant provides.
pub trait CargoContainer {
    fn serial(&self) -> &SerialNumber;

    fn kind(&self) -> ContainerKind;

    fn tare_weight_kg(&self) -> f64;

    fn max_capacity_kg(&self) -> f64;

    fn current_load_kg(&self) -> f64;

    /// Add `mass_kg` of cargo.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidMeasurement`] when `mass_kg` is negative or not finite
    /// * [`Error::Overfill`] when the load would exceed capacity
    /// * [`Error::HazardOperation`] when the load would exceed a variant's
    ///   safety threshold
    ///
    /// The current load is unchanged whenever an error is returned.
    fn load_cargo(&mut self, mass_kg: f64) -> Result<()>;

    /// Empty the container according to the variant's residue policy.
    fn unload_cargo(&mut self);

    /// Tare plus current load.
    fn total_weight_kg(&self) -> f64 {
        self.tare_weight_kg() + self.current_load_kg()
    }
}

/// Variants that can enter an unsafe loading state report it through this hook.
pub trait HazardNotifier {
    fn notify_hazard(&self, serial: &SerialNumber, message: &str) {
        tracing::error!(target: "shipload::hazard", serial = %serial, "HAZARD: {message}");
    }
}

/// State common to every variant.
#[derive(Debug, PartialEq)]
pub(crate) struct ContainerState {
    pub(crate) serial: SerialNumber,
    pub(crate) tare_weight_kg: f64,
    pub(crate) max_capacity_kg: f64,
    pub(crate) current_load_kg: f64,
}

impl ContainerState {
    pub(crate) fn new(serial: SerialNumber, spec: ContainerSpec) -> Self {
        Self {
            serial,
            tare_weight_kg: spec.tare_weight_kg,
            max_capacity_kg: spec.max_capacity_kg,
            current_load_kg: 0.0,
        }
    }

    /// Load after adding `mass_kg`, rejecting unusable masses.
    pub(crate) fn projected_load(&self, mass_kg: f64) -> Result<f64> {
        if !mass_kg.is_finite() || mass_kg < 0.0 {
            return Err(Error::negative_or_nan("mass_kg", mass_kg));
        }
        Ok(self.current_load_kg + mass_kg)
    }

    pub(crate) fn overfill(&self, mass_kg: f64) -> Error {
        Error::Overfill {
            serial: self.serial.clone(),
            requested_kg: mass_kg,
            current_kg: self.current_load_kg,
            capacity_kg: self.max_capacity_kg,
        }
    }

    pub(crate) fn commit(&mut self, mass_kg: f64) {
        self.current_load_kg += mass_kg;
        tracing::debug!(
            serial = %self.serial,
            mass_kg,
            current_load_kg = self.current_load_kg,
            "cargo loaded"
        );
    }
}

/// A container of any variant.
#[derive(Debug, PartialEq)]
pub enum Container {
    Liquid(LiquidContainer),
    Gas(GasContainer),
    Refrigerated(RefrigeratedContainer),
}

impl Container {
    fn as_cargo(&self) -> &dyn CargoContainer {
        match self {
            Container::Liquid(c) => c,
            Container::Gas(c) => c,
            Container::Refrigerated(c) => c,
        }
    }

    fn as_cargo_mut(&mut self) -> &mut dyn CargoContainer {
        match self {
            Container::Liquid(c) => c,
            Container::Gas(c) => c,
            Container::Refrigerated(c) => c,
        }
    }

    /// The hazard hook, for variants that have one.
    pub fn hazard_notifier(&self) -> Option<&dyn HazardNotifier> {
        match self {
            Container::Liquid(c) => Some(c),
            Container::Gas(c) => Some(c),
            Container::Refrigerated(_) => None,
        }
    }

    pub fn as_liquid(&self) -> Option<&LiquidContainer> {
        match self {
            Container::Liquid(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_gas(&self) -> Option<&GasContainer> {
        match self {
            Container::Gas(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_refrigerated(&self) -> Option<&RefrigeratedContainer> {
        match self {
            Container::Refrigerated(c) => Some(c),
            _ => None,
        }
    }

    /// Short description of the variant-specific attributes.
    pub fn details(&self) -> String {
        match self {
            Container::Liquid(c) if c.is_dangerous() => "dangerous goods".to_string(),
            Container::Liquid(_) => "standard goods".to_string(),
            Container::Gas(c) => format!("pressure {}", c.pressure()),
            Container::Refrigerated(c) => format!("{} at {} °C", c.product(), c.temperature_c()),
        }
    }
}

impl CargoContainer for Container {
    fn serial(&self) -> &SerialNumber {
        self.as_cargo().serial()
    }

    fn kind(&self) -> ContainerKind {
        self.as_cargo().kind()
    }

    fn tare_weight_kg(&self) -> f64 {
        self.as_cargo().tare_weight_kg()
    }

    fn max_capacity_kg(&self) -> f64 {
        self.as_cargo().max_capacity_kg()
    }

    fn current_load_kg(&self) -> f64 {
        self.as_cargo().current_load_kg()
    }

    fn load_cargo(&mut self, mass_kg: f64) -> Result<()> {
        self.as_cargo_mut().load_cargo(mass_kg)
    }

    fn unload_cargo(&mut self) {
        self.as_cargo_mut().unload_cargo()
    }
}

impl From<LiquidContainer> for Container {
    fn from(container: LiquidContainer) -> Self {
        Container::Liquid(container)
    }
}

impl From<GasContainer> for Container {
    fn from(container: GasContainer) -> Self {
        Container::Gas(container)
    }
}

impl From<RefrigeratedContainer> for Container {
    fn from(container: RefrigeratedContainer) -> Self {
        Container::Refrigerated(container)
    }
}
