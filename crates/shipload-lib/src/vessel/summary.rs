use serde::Serialize;

use crate::container::{CargoContainer, Container, ContainerKind};
use crate::serial::SerialNumber;

use super::Vessel;

/// Read-only snapshot of a vessel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VesselSummary {
    pub name: String,
    pub max_speed_knots: f64,
    pub max_container_count: usize,
    pub max_weight_tons: f64,
    pub max_weight_kg: f64,
    pub container_count: usize,
    pub total_weight_kg: f64,
    pub containers: Vec<ContainerLine>,
}

/// One container aboard a vessel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerLine {
    pub serial: SerialNumber,
    pub kind: ContainerKind,
    pub details: String,
    pub current_load_kg: f64,
    pub total_weight_kg: f64,
}

impl ContainerLine {
    fn of(container: &Container) -> Self {
        Self {
            serial: container.serial().clone(),
            kind: container.kind(),
            details: container.details(),
            current_load_kg: container.current_load_kg(),
            total_weight_kg: container.total_weight_kg(),
        }
    }
}

impl VesselSummary {
    pub(crate) fn of(vessel: &Vessel) -> Self {
        Self {
            name: vessel.name().to_string(),
            max_speed_knots: vessel.max_speed_knots(),
            max_container_count: vessel.max_container_count(),
            max_weight_tons: vessel.max_weight_tons(),
            max_weight_kg: vessel.max_weight_kg(),
            container_count: vessel.container_count(),
            total_weight_kg: vessel.total_weight_kg(),
            containers: vessel.containers().iter().map(ContainerLine::of).collect(),
        }
    }
}
