//! Validated container construction.
//!
//! All inputs are checked before a serial number is issued, so a rejected
//! construction leaves the issuer's sequence untouched.

use crate::container::ContainerKind;
use crate::error::{Error, Result};
use crate::product::ProductType;
use crate::serial::SerialIssuer;

use super::{ContainerSpec, GasContainer, LiquidContainer, RefrigeratedContainer};

/// Builds containers and assigns their serial numbers.
#[derive(Debug, Default)]
pub struct ContainerFactory {
    issuer: SerialIssuer,
}

impl ContainerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory drawing serials from an existing issuer.
    pub fn with_issuer(issuer: SerialIssuer) -> Self {
        Self { issuer }
    }

    pub fn issuer(&self) -> &SerialIssuer {
        &self.issuer
    }

    pub fn into_issuer(self) -> SerialIssuer {
        self.issuer
    }

    pub fn liquid(&mut self, spec: ContainerSpec, dangerous: bool) -> Result<LiquidContainer> {
        spec.validate()?;
        let serial = self.issuer.issue(ContainerKind::Liquid)?;
        tracing::debug!(%serial, dangerous, "created liquid container");
        Ok(LiquidContainer::new(serial, spec, dangerous))
    }

    pub fn gas(&mut self, spec: ContainerSpec, pressure: f64) -> Result<GasContainer> {
        spec.validate()?;
        if !pressure.is_finite() {
            return Err(Error::non_finite("pressure", pressure));
        }
        let serial = self.issuer.issue(ContainerKind::Gas)?;
        tracing::debug!(%serial, pressure, "created gas container");
        Ok(GasContainer::new(serial, spec, pressure))
    }

    /// # Errors
    ///
    /// Fails with [`Error::HazardOperation`] when `temperature_c` is below the
    /// product's required minimum, exactly as
    /// [`RefrigeratedContainer::set_temperature`] would.
    pub fn refrigerated(
        &mut self,
        spec: ContainerSpec,
        product: ProductType,
        temperature_c: f64,
    ) -> Result<RefrigeratedContainer> {
        spec.validate()?;
        RefrigeratedContainer::check_temperature(product, temperature_c)?;
        let serial = self.issuer.issue(ContainerKind::Refrigerated)?;
        tracing::debug!(%serial, %product, temperature_c, "created refrigerated container");
        Ok(RefrigeratedContainer::new(serial, spec, product, temperature_c))
    }
}
