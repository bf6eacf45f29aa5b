//! Gas containers.

use crate::constants::GAS_RESIDUAL_RATIO;
use crate::error::{Error, Result};
use crate::serial::SerialNumber;

use super::{CargoContainer, ContainerKind, ContainerSpec, ContainerState, HazardNotifier};

#[derive(Debug, PartialEq)]
pub struct GasContainer {
    state: ContainerState,
    pressure: f64,
}

impl GasContainer {
    pub(crate) fn new(serial: SerialNumber, spec: ContainerSpec, pressure: f64) -> Self {
        Self {
            state: ContainerState::new(serial, spec),
            pressure,
        }
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Replace the recorded pressure. Rejects non-finite values.
    pub fn set_pressure(&mut self, pressure: f64) -> Result<()> {
        if !pressure.is_finite() {
            return Err(Error::non_finite("pressure", pressure));
        }
        self.pressure = pressure;
        Ok(())
    }
}

impl HazardNotifier for GasContainer {}

impl CargoContainer for GasContainer {
    fn serial(&self) -> &SerialNumber {
        &self.state.serial
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::Gas
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
            self.notify_hazard(&self.state.serial, "load exceeds the permitted capacity");
            return Err(self.state.overfill(mass_kg));
        }

        self.state.commit(mass_kg);
        Ok(())
    }

    /// Gas is never fully removed; a residue of the previous load stays behind.
    fn unload_cargo(&mut self) {
        self.state.current_load_kg *= GAS_RESIDUAL_RATIO;
    }
}
