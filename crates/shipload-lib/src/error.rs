use std::fmt;

use thiserror::Error;

use crate::product::ProductType;
use crate::serial::SerialNumber;
use crate::vessel::AdmissionDenial;

/// Convenient result alias for the shipload library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A load would push a container past its absolute capacity.
    #[error(
        "overfill on {serial}: adding {requested_kg} kg to {current_kg} kg exceeds capacity of {capacity_kg} kg"
    )]
    Overfill {
        serial: SerialNumber,
        requested_kg: f64,
        current_kg: f64,
        capacity_kg: f64,
    },

    /// An operation was refused because it would leave cargo in an unsafe state.
    #[error("hazardous operation refused: {hazard}")]
    HazardOperation { hazard: Hazard },

    /// A mass, pressure or temperature was not a usable number.
    #[error("invalid {field}: {value} (must be finite{})", sign_hint(.non_negative))]
    InvalidMeasurement {
        field: &'static str,
        value: f64,
        non_negative: bool,
    },

    /// Container dimensions failed validation.
    #[error("invalid container specification: {message}")]
    InvalidContainerSpec { message: String },

    /// Vessel parameters failed validation.
    #[error("invalid vessel: {message}")]
    InvalidVessel { message: String },

    /// Raised when a product name could not be resolved.
    #[error("unknown product: {name}{}", format_suggestions(.suggestions))]
    UnknownProduct {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a vessel name is not present in the catalog.
    #[error("unknown vessel: {name}{}", format_suggestions(.suggestions))]
    UnknownVessel {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when vessel catalog data fails validation.
    #[error("invalid vessel data: {message}")]
    VesselDataValidation { message: String },

    /// Raised when duplicate vessel names are encountered during catalog load.
    #[error("duplicate vessel name encountered: {name}")]
    DuplicateVesselName { name: String },

    /// No container with the serial number is aboard the vessel.
    #[error("container {serial} not found on {vessel}")]
    ContainerNotFound {
        serial: SerialNumber,
        vessel: String,
    },

    /// A vessel refused to take a container.
    #[error("{vessel} cannot take {serial}: {reason}")]
    AdmissionDenied {
        serial: SerialNumber,
        vessel: String,
        reason: AdmissionDenial,
    },

    /// Every serial sequence number has been issued.
    #[error("serial numbers exhausted")]
    SerialsExhausted,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn negative_or_nan(field: &'static str, value: f64) -> Self {
        Error::InvalidMeasurement {
            field,
            value,
            non_negative: true,
        }
    }

    pub(crate) fn non_finite(field: &'static str, value: f64) -> Self {
        Error::InvalidMeasurement {
            field,
            value,
            non_negative: false,
        }
    }

    /// True for both overfill and hazard refusals, the two cargo-safety errors.
    pub fn is_loading_refusal(&self) -> bool {
        matches!(self, Error::Overfill { .. } | Error::HazardOperation { .. })
    }
}

/// The unsafe condition behind an [`Error::HazardOperation`].
#[derive(Debug, Clone, PartialEq)]
pub enum Hazard {
    /// The load would exceed the container's safety threshold, which is
    /// stricter than its capacity.
    UnsafeFill {
        serial: SerialNumber,
        requested_kg: f64,
        current_kg: f64,
        limit_kg: f64,
    },
    /// The temperature is below what the product tolerates.
    TemperatureTooLow {
        product: ProductType,
        requested_c: f64,
        minimum_c: f64,
    },
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hazard::UnsafeFill {
                serial,
                requested_kg,
                current_kg,
                limit_kg,
            } => write!(
                f,
                "adding {requested_kg} kg to {current_kg} kg in {serial} exceeds the safe fill limit of {limit_kg} kg"
            ),
            Hazard::TemperatureTooLow {
                product,
                requested_c,
                minimum_c,
            } => write!(
                f,
                "{requested_c} °C is below the {minimum_c} °C minimum for {product}"
            ),
        }
    }
}

fn sign_hint(non_negative: &bool) -> &'static str {
    if *non_negative {
        " and non-negative"
    } else {
        ""
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// Rank `candidates` by similarity to `name`, keeping the best `limit` matches.
pub(crate) fn suggest<'a, I>(name: &str, candidates: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = name.trim().to_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| {
            (
                strsim::jaro_winkler(&needle, &candidate.to_lowercase()),
                candidate,
            )
        })
        .filter(|(score, _)| *score >= 0.75)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
