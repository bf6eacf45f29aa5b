//! Refrigerated product catalog.
//!
//! Each product category carries the lowest temperature it may be carried
//! at. The set is fixed; lookups from user input go through [`FromStr`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{suggest, Error};

/// Product categories carried in refrigerated containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Bananas,
    Chocolate,
    Fish,
    Meat,
    IceCream,
    FrozenPizza,
    Cheese,
    Sausages,
    Butter,
    Eggs,
}

impl ProductType {
    /// Every category, in catalog order.
    pub const ALL: [ProductType; 10] = [
        ProductType::Bananas,
        ProductType::Chocolate,
        ProductType::Fish,
        ProductType::Meat,
        ProductType::IceCream,
        ProductType::FrozenPizza,
        ProductType::Cheese,
        ProductType::Sausages,
        ProductType::Butter,
        ProductType::Eggs,
    ];

    /// Lowest transport temperature in °C the product tolerates.
    pub const fn required_min_temperature_c(self) -> f64 {
        match self {
            ProductType::Bananas => 13.3,
            ProductType::Chocolate => 18.0,
            ProductType::Fish => 2.0,
            ProductType::Meat => -15.0,
            ProductType::IceCream => -18.0,
            ProductType::FrozenPizza => -30.0,
            ProductType::Cheese => 7.2,
            ProductType::Sausages => 5.0,
            ProductType::Butter => 20.5,
            ProductType::Eggs => 19.0,
        }
    }

    /// Stable machine-readable identifier (matches the serde representation).
    pub const fn key(self) -> &'static str {
        match self {
            ProductType::Bananas => "bananas",
            ProductType::Chocolate => "chocolate",
            ProductType::Fish => "fish",
            ProductType::Meat => "meat",
            ProductType::IceCream => "ice_cream",
            ProductType::FrozenPizza => "frozen_pizza",
            ProductType::Cheese => "cheese",
            ProductType::Sausages => "sausages",
            ProductType::Butter => "butter",
            ProductType::Eggs => "eggs",
        }
    }

    /// Whether `temperature_c` is warm enough for this product.
    pub fn permits(self, temperature_c: f64) -> bool {
        temperature_c >= self.required_min_temperature_c()
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductType::Bananas => "Bananas",
            ProductType::Chocolate => "Chocolate",
            ProductType::Fish => "Fish",
            ProductType::Meat => "Meat",
            ProductType::IceCream => "Ice cream",
            ProductType::FrozenPizza => "Frozen pizza",
            ProductType::Cheese => "Cheese",
            ProductType::Sausages => "Sausages",
            ProductType::Butter => "Butter",
            ProductType::Eggs => "Eggs",
        };
        f.write_str(label)
    }
}

impl FromStr for ProductType {
    type Err = Error;

    /// Accepts keys and labels in any case, with `-`, `_` or spaces between
    /// words (`ice-cream`, `Ice cream`, `ICE_CREAM`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        ProductType::ALL
            .into_iter()
            .find(|product| product.key() == normalized)
            .ok_or_else(|| Error::UnknownProduct {
                name: s.trim().to_string(),
                suggestions: suggest(&normalized, ProductType::ALL.map(ProductType::key), 3),
            })
    }
}
