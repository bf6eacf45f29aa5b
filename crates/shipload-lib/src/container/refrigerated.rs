//! Refrigerated containers.
//!
//! A refrigerated container is bound to one [`ProductType`] for its lifetime
//! and may never be set colder than that product's minimum temperature.
//! It has no hazard hook: an overfull load is refused without notification.

use crate::error::{Error, Hazard, Result};
use crate::product::ProductType;
use crate::serial::SerialNumber;

use super::{CargoContainer, ContainerKind, ContainerSpec, ContainerState};

#[derive(Debug, PartialEq)]
pub struct RefrigeratedContainer {
    state: ContainerState,
    product: ProductType,
    temperature_c: f64,
}

impl RefrigeratedContainer {
    /// Callers must have passed `temperature_c` through
    /// [`check_temperature`](Self::check_temperature).
    pub(crate) fn new(
        serial: SerialNumber,
        spec: ContainerSpec,
        product: ProductType,
        temperature_c: f64,
    ) -> Self {
        Self {
            state: ContainerState::new(serial, spec),
            product,
            temperature_c,
        }
    }

    /// Validate a temperature for `product` without touching any container.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidMeasurement`] when `temperature_c` is not finite
    /// * [`Error::HazardOperation`] when it is below the product minimum
    pub fn check_temperature(product: ProductType, temperature_c: f64) -> Result<()> {
        if !temperature_c.is_finite() {
            return Err(Error::non_finite("temperature_c", temperature_c));
        }
        if !product.permits(temperature_c) {
            return Err(Error::HazardOperation {
                hazard: Hazard::TemperatureTooLow {
                    product,
                    requested_c: temperature_c,
                    minimum_c: product.required_min_temperature_c(),
                },
            });
        }
        Ok(())
    }

    pub fn product(&self) -> ProductType {
        self.product
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    /// Change the temperature; the previous value is kept on error.
    pub fn set_temperature(&mut self, temperature_c: f64) -> Result<()> {
        Self::check_temperature(self.product, temperature_c)?;
        tracing::debug!(
            serial = %self.state.serial,
            from_c = self.temperature_c,
            to_c = temperature_c,
            "temperature changed"
        );
        self.temperature_c = temperature_c;
        Ok(())
    }
}

impl CargoContainer for RefrigeratedContainer {
    fn serial(&self) -> &SerialNumber {
        &self.state.serial
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::Refrigerated
    }

    fn tare_weight_kg(&self) -> f64 {
        self.state.tare_weight_kg
    }

    fn max_capacity_kg(&self) -> f64 {
        self.state.max_capacity_kg
    }

    fn current_load_kg(&self) -> f64 {
        self.state.current_load_kg
    }

    fn load_cargo(&mut self, mass_kg: f64) -> Result<()> {
        let projected = self.state.projected_load(mass_kg)?;
        if projected > self.state.max_capacity_kg {
            return Err(self.state.overfill(mass_kg));
        }
        self.state.commit(mass_kg);
        Ok(())
    }

    fn unload_cargo(&mut self) {
        self.state.current_load_kg = 0.0;
    }
}
