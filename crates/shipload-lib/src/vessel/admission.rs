use std::fmt;

use serde::Serialize;

use crate::container::{CargoContainer, Container};
use crate::error::Error;
use crate::serial::SerialNumber;

/// Why a vessel refused a container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum AdmissionDenial {
    /// The hold already contains the maximum number of containers.
    ContainerLimit { max_container_count: usize },
    /// Taking the container aboard would exceed the weight limit.
    WeightLimit {
        resulting_weight_kg: f64,
        max_weight_kg: f64,
    },
    /// The container to be replaced is not aboard.
    NotFound { serial: SerialNumber },
}

impl fmt::Display for AdmissionDenial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdmissionDenial::ContainerLimit {
                max_container_count,
            } => write!(f, "container limit of {max_container_count} reached"),
            AdmissionDenial::WeightLimit {
                resulting_weight_kg,
                max_weight_kg,
            } => write!(
                f,
                "total weight {resulting_weight_kg} kg would exceed the {max_weight_kg} kg limit"
            ),
            AdmissionDenial::NotFound { serial } => write!(f, "{serial} is not aboard"),
        }
    }
}

/// A refused container, handed back to the caller with the reason.
#[derive(Debug)]
pub struct Rejection {
    container: Container,
    vessel: String,
    reason: AdmissionDenial,
}

impl Rejection {
    pub(crate) fn new(container: Container, vessel: &str, reason: AdmissionDenial) -> Self {
        Self {
            container,
            vessel: vessel.to_string(),
            reason,
        }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Name of the vessel that refused the container.
    pub fn vessel(&self) -> &str {
        &self.vessel
    }

    pub fn reason(&self) -> &AdmissionDenial {
        &self.reason
    }

    /// Recover the refused container.
    pub fn into_container(self) -> Container {
        self.container
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cannot take {}: {}",
            self.vessel,
            self.container.serial(),
            self.reason
        )
    }
}

impl std::error::Error for Rejection {}

impl From<Rejection> for Error {
    fn from(rejection: Rejection) -> Self {
        match rejection.reason {
            AdmissionDenial::NotFound { serial } => Error::ContainerNotFound {
                serial,
                vessel: rejection.vessel,
            },
            reason => Error::AdmissionDenied {
                serial: rejection.container.serial().clone(),
                vessel: rejection.vessel,
                reason,
            },
        }
    }
}

/// Outcome of [`Vessel::load_containers`](super::Vessel::load_containers).
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Serials of the containers taken aboard, in loading order.
    pub loaded: Vec<SerialNumber>,
    /// Refused containers, in the order they were offered.
    pub rejected: Vec<Rejection>,
}

impl LoadReport {
    /// True when every offered container was loaded.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Recover all refused containers.
    pub fn into_rejected_containers(self) -> Vec<Container> {
        self.rejected
            .into_iter()
            .map(Rejection::into_container)
            .collect()
    }
}
