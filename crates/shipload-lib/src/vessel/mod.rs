//! Vessels and their container management.
//!
//! This module provides:
//! - [`Vessel`] - An ordered hold of containers under count and weight limits
//! - [`VesselSpec`] - The construction parameters of a vessel
//! - [`AdmissionDenial`] / [`Rejection`] - Why a vessel refused a container
//! - [`LoadReport`] - Outcome of loading a batch of containers
//! - [`VesselSummary`] - Read-only snapshot for reporting
//! - [`VesselCatalog`] - Vessel definitions loaded from CSV
//!
//! # Admission control
//!
//! A vessel accepts a container only while it holds fewer than
//! `max_container_count` containers and the total weight of everything aboard
//! plus the candidate stays within `max_weight_tons × 1000` kg. Every
//! operation that adds a container goes through [`Vessel::check_admission`].
//!
//! # Example
//!
//! ```
//! use shipload_lib::{CargoContainer, ContainerFactory, ContainerSpec, Vessel};
//!
//! let mut factory = ContainerFactory::new();
//! let mut atlantic = Vessel::new("Atlantic Express", 25.0, 3, 10.0).unwrap();
//! let mut pacific = Vessel::new("Pacific Runner", 20.0, 5, 20.0).unwrap();
//!
//! let helium = factory.gas(ContainerSpec::new(150.0, 500.0), 10.0).unwrap();
//! let serial = helium.serial().clone();
//! atlantic.load_container(helium).unwrap();
//! atlantic.transfer_container(&serial, &mut pacific).unwrap();
//!
//! assert!(!atlantic.contains(&serial));
//! assert!(pacific.contains(&serial));
//! ```

mod admission;
pub mod catalog;
mod summary;

pub use admission::{AdmissionDenial, LoadReport, Rejection};
pub use catalog::VesselCatalog;
pub use summary::{ContainerLine, VesselSummary};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::constants::KG_PER_TON;
use crate::container::{CargoContainer, Container};
use crate::error::{Error, Result};
use crate::serial::SerialNumber;

/// Construction parameters of a vessel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselSpec {
    pub name: String,
    /// Descriptive only; no operation depends on it.
    pub max_speed_knots: f64,
    pub max_container_count: usize,
    pub max_weight_tons: f64,
}

impl VesselSpec {
    /// Validate vessel parameters for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidVessel {
                message: "vessel name must not be empty".to_string(),
            });
        }

        let fields = [
            (self.max_speed_knots, "max_speed_knots"),
            (self.max_weight_tons, "max_weight_tons"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidVessel {
                    message: format!("{field} must be a finite non-negative number"),
                });
            }
        }

        Ok(())
    }

    pub fn max_weight_kg(&self) -> f64 {
        self.max_weight_tons * KG_PER_TON
    }
}

/// A ship carrying an ordered sequence of containers.
///
/// Containers are owned by value: once loaded, a container is reachable only
/// through the vessel until it is removed, replaced or transferred.
#[derive(Debug, PartialEq)]
pub struct Vessel {
    spec: VesselSpec,
    containers: Vec<Container>,
}

impl Vessel {
    /// Create an empty vessel.
    pub fn new(
        name: impl Into<String>,
        max_speed_knots: f64,
        max_container_count: usize,
        max_weight_tons: f64,
    ) -> Result<Self> {
        Self::from_spec(VesselSpec {
            name: name.into(),
            max_speed_knots,
            max_container_count,
            max_weight_tons,
        })
    }

    /// Create an empty vessel from validated parameters.
    pub fn from_spec(mut spec: VesselSpec) -> Result<Self> {
        spec.validate()?;
        spec.name = spec.name.trim().to_string();
        Ok(Self {
            spec,
            containers: Vec::new(),
        })
    }

    pub fn spec(&self) -> &VesselSpec {
        &self.spec
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn max_speed_knots(&self) -> f64 {
        self.spec.max_speed_knots
    }

    pub fn max_container_count(&self) -> usize {
        self.spec.max_container_count
    }

    pub fn max_weight_tons(&self) -> f64 {
        self.spec.max_weight_tons
    }

    pub fn max_weight_kg(&self) -> f64 {
        self.spec.max_weight_kg()
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Sum of the total weights (tare plus load) of all containers aboard.
    pub fn total_weight_kg(&self) -> f64 {
        self.containers.iter().map(|c| c.total_weight_kg()).sum()
    }

    /// Weight that can still be taken aboard, never negative.
    pub fn remaining_weight_kg(&self) -> f64 {
        (self.max_weight_kg() - self.total_weight_kg()).max(0.0)
    }

    /// Containers in loading order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container(&self, serial: &SerialNumber) -> Option<&Container> {
        self.containers.iter().find(|c| c.serial() == serial)
    }

    pub fn contains(&self, serial: &SerialNumber) -> bool {
        self.position(serial).is_some()
    }

    fn position(&self, serial: &SerialNumber) -> Option<usize> {
        self.containers.iter().position(|c| c.serial() == serial)
    }

    /// Decide whether `container` could be loaded in the vessel's current state.
    pub fn check_admission(
        &self,
        container: &Container,
    ) -> std::result::Result<(), AdmissionDenial> {
        if self.containers.len() >= self.spec.max_container_count {
            return Err(AdmissionDenial::ContainerLimit {
                max_container_count: self.spec.max_container_count,
            });
        }

        let resulting_weight_kg = self.total_weight_kg() + container.total_weight_kg();
        let max_weight_kg = self.max_weight_kg();
        debug!(
            vessel = %self.spec.name,
            serial = %container.serial(),
            resulting_weight_kg,
            max_weight_kg,
            "checking admission"
        );
        if resulting_weight_kg > max_weight_kg {
            return Err(AdmissionDenial::WeightLimit {
                resulting_weight_kg,
                max_weight_kg,
            });
        }

        Ok(())
    }

    pub fn can_load(&self, container: &Container) -> bool {
        self.check_admission(container).is_ok()
    }

    /// Append a container to the hold.
    ///
    /// On refusal the vessel is unchanged and the container is handed back
    /// inside the [`Rejection`].
    pub fn load_container(
        &mut self,
        container: impl Into<Container>,
    ) -> std::result::Result<(), Rejection> {
        let container = container.into();
        if let Err(reason) = self.check_admission(&container) {
            warn!(
                vessel = %self.spec.name,
                serial = %container.serial(),
                %reason,
                "container refused"
            );
            return Err(Rejection::new(container, &self.spec.name, reason));
        }

        info!(vessel = %self.spec.name, serial = %container.serial(), "container loaded");
        self.containers.push(container);
        Ok(())
    }

    /// Load containers in order, each checked against the hold as it stands
    /// after the previous ones.
    pub fn load_containers<I>(&mut self, containers: I) -> LoadReport
    where
        I: IntoIterator,
        I::Item: Into<Container>,
    {
        let mut report = LoadReport::default();
        for container in containers {
            let container = container.into();
            let serial = container.serial().clone();
            match self.load_container(container) {
                Ok(()) => report.loaded.push(serial),
                Err(rejection) => report.rejected.push(rejection),
            }
        }
        report
    }

    /// Take the container with `serial` off the vessel.
    pub fn remove_container(&mut self, serial: &SerialNumber) -> Option<Container> {
        let index = self.position(serial)?;
        let removed = self.containers.remove(index);
        info!(vessel = %self.spec.name, %serial, "container removed");
        Some(removed)
    }

    /// Swap the container with serial `old` for `replacement` at the same
    /// position, returning the container that was taken off.
    ///
    /// The replacement is admitted against the hold without `old`. If it is
    /// refused, or `old` is not aboard, the vessel is unchanged and the
    /// replacement is handed back.
    pub fn replace_container(
        &mut self,
        old: &SerialNumber,
        replacement: impl Into<Container>,
    ) -> std::result::Result<Container, Rejection> {
        let replacement = replacement.into();
        let Some(index) = self.position(old) else {
            warn!(vessel = %self.spec.name, serial = %old, "container to replace not found");
            return Err(Rejection::new(
                replacement,
                &self.spec.name,
                AdmissionDenial::NotFound {
                    serial: old.clone(),
                },
            ));
        };

        let removed = self.containers.remove(index);
        match self.check_admission(&replacement) {
            Ok(()) => {
                info!(
                    vessel = %self.spec.name,
                    old = %old,
                    new = %replacement.serial(),
                    "container replaced"
                );
                self.containers.insert(index, replacement);
                Ok(removed)
            }
            Err(reason) => {
                self.containers.insert(index, removed);
                warn!(
                    vessel = %self.spec.name,
                    old = %old,
                    new = %replacement.serial(),
                    %reason,
                    "replacement refused"
                );
                Err(Rejection::new(replacement, &self.spec.name, reason))
            }
        }
    }

    /// Move the container with `serial` from this vessel to `target`.
    ///
    /// Admission is checked on `target` first; the container then leaves this
    /// hold and joins the target's in one step. On error neither vessel
    /// changes.
    pub fn transfer_container(&mut self, serial: &SerialNumber, target: &mut Vessel) -> Result<()> {
        let index = self.position(serial).ok_or_else(|| {
            warn!(vessel = %self.spec.name, %serial, "container to transfer not found");
            Error::ContainerNotFound {
                serial: serial.clone(),
                vessel: self.spec.name.clone(),
            }
        })?;

        if let Err(reason) = target.check_admission(&self.containers[index]) {
            warn!(
                from = %self.spec.name,
                to = %target.spec.name,
                %serial,
                %reason,
                "transfer refused"
            );
            return Err(Error::AdmissionDenied {
                serial: serial.clone(),
                vessel: target.spec.name.clone(),
                reason,
            });
        }

        let container = self.containers.remove(index);
        target.containers.push(container);
        info!(
            from = %self.spec.name,
            to = %target.spec.name,
            %serial,
            "container transferred"
        );
        Ok(())
    }

    /// Snapshot of limits, totals and one line per container.
    pub fn summary(&self) -> VesselSummary {
        VesselSummary::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{ContainerFactory, ContainerSpec};

    #[test]
    fn spec_validation_rejects_blank_names_and_bad_limits() {
        assert!(Vessel::new("  ", 10.0, 1, 1.0).is_err());
        assert!(Vessel::new("Ok", -1.0, 1, 1.0).is_err());
        assert!(Vessel::new("Ok", 1.0, 1, f64::NAN).is_err());
        assert_eq!(Vessel::new(" Ok ", 1.0, 1, 1.0).unwrap().name(), "Ok");
    }

    #[test]
    fn weight_bound_is_inclusive() {
        let mut factory = ContainerFactory::new();
        let mut vessel = Vessel::new("Tiny", 5.0, 10, 1.0).unwrap();
        let exact = factory.gas(ContainerSpec::new(1000.0, 0.0), 1.0).unwrap();
        let extra = factory.gas(ContainerSpec::new(0.001, 0.0), 1.0).unwrap();

        vessel.load_container(exact).unwrap();
        assert_eq!(vessel.total_weight_kg(), 1000.0);
        assert_eq!(vessel.remaining_weight_kg(), 0.0);
        assert!(vessel.load_container(extra).is_err());
    }

    #[test]
    fn zero_count_vessel_refuses_everything() {
        let mut factory = ContainerFactory::new();
        let vessel = Vessel::new("Dry dock", 0.0, 0, 100.0).unwrap();
        let container: Container = factory
            .liquid(ContainerSpec::new(1.0, 1.0), false)
            .unwrap()
            .into();
        assert_eq!(
            vessel.check_admission(&container),
            Err(AdmissionDenial::ContainerLimit {
                max_container_count: 0
            })
        );
    }
}
