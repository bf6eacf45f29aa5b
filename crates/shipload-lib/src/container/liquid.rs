//! Liquid containers.
//!
//! A liquid container may never be filled to capacity: dangerous goods are
//! limited to half of it, everything else to 90%.

use crate::constants::{DANGEROUS_LIQUID_FILL_RATIO, STANDARD_LIQUID_FILL_RATIO};
use crate::error::{Error, Hazard, Result};
use crate::serial::SerialNumber;

use super::{CargoContainer, ContainerKind, ContainerSpec, ContainerState, HazardNotifier};

#[derive(Debug, PartialEq)]
pub struct LiquidContainer {
    state: ContainerState,
    dangerous: bool,
}

impl LiquidContainer {
    pub(crate) fn new(serial: SerialNumber, spec: ContainerSpec, dangerous: bool) -> Self {
        Self {
            state: ContainerState::new(serial, spec),
            dangerous,
        }
    }

    /// Whether the container carries dangerous goods.
    pub fn is_dangerous(&self) -> bool {
        self.dangerous
    }

    /// Largest load the container may hold.
    pub fn fill_limit_kg(&self) -> f64 {
        let ratio = if self.dangerous {
            DANGEROUS_LIQUID_FILL_RATIO
        } else {
            STANDARD_LIQUID_FILL_RATIO
        };
        ratio * self.state.max_capacity_kg
    }
}

impl HazardNotifier for LiquidContainer {}

impl CargoContainer for LiquidContainer {
    fn serial(&self) -> &SerialNumber {
        &self.state.serial
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::Liquid
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

        let limit_kg = self.fill_limit_kg();
        if projected > limit_kg {
            self.notify_hazard(&self.state.serial, "load exceeds the permitted fill limit");
            return Err(Error::HazardOperation {
                hazard: Hazard::UnsafeFill {
                    serial: self.state.serial.clone(),
                    requested_kg: mass_kg,
                    current_kg: self.state.current_load_kg,
                    limit_kg,
                },
            });
        }
        // Unreachable while both fill ratios are at most 1.
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
