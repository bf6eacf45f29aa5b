//! Vessel catalog loading and lookup.
//!
//! Vessel definitions are read from CSV with one row per vessel. Header
//! names are matched loosely so that `max_weight_tons`, `Max Weight (t)` and
//! `weight_t` all resolve to the same column.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{suggest, Error, Result};

use super::{Vessel, VesselSpec};

/// Collection of vessel definitions keyed by case-insensitive name.
#[derive(Debug, Clone, Default)]
pub struct VesselCatalog {
    vessels: HashMap<String, VesselSpec>,
    source: Option<PathBuf>,
}

/// Canonical field name and the normalized header spellings accepted for it.
const COLUMN_SYNONYMS: &[(&str, &[&str])] = &[
    ("name", &["name", "vessel", "vessel_name", "ship", "ship_name"]),
    (
        "max_speed_knots",
        &["max_speed_knots", "max_speed", "speed_knots", "speed_kn", "speed"],
    ),
    (
        "max_container_count",
        &[
            "max_container_count",
            "max_containers",
            "container_count",
            "containers",
        ],
    ),
    (
        "max_weight_tons",
        &[
            "max_weight_tons",
            "max_weight_t",
            "max_weight",
            "weight_tons",
            "weight_t",
        ],
    ),
];

impl VesselCatalog {
    /// The two vessels of the reference scenario.
    pub fn builtin() -> Self {
        let specs = [
            VesselSpec {
                name: "Atlantic Express".to_string(),
                max_speed_knots: 25.0,
                max_container_count: 3,
                max_weight_tons: 10.0,
            },
            VesselSpec {
                name: "Pacific Runner".to_string(),
                max_speed_knots: 20.0,
                max_container_count: 5,
                max_weight_tons: 20.0,
            },
        ];

        Self {
            vessels: specs
                .into_iter()
                .map(|spec| (normalize_name(&spec.name), spec))
                .collect(),
            source: None,
        }
    }

    /// Load a vessel catalog from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        tracing::debug!(
            path = %path.display(),
            vessels = catalog.len(),
            "loaded vessel catalog"
        );
        Ok(catalog)
    }

    /// Load a vessel catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::VesselDataValidation {
                message: format!("failed to read vessel catalog headers: {err}"),
            })?
            .clone();
        let index_map = resolve_columns(&headers)?;

        let mut vessels = HashMap::new();
        // Header is line 1.
        for (offset, result) in csv_reader.records().enumerate() {
            let row = offset + 2;
            let record = result.map_err(|e| Error::VesselDataValidation {
                message: e.to_string(),
            })?;

            let spec = parse_row(&record, &index_map, row)?;
            spec.validate().map_err(|err| Error::VesselDataValidation {
                message: format!("row {row}: {err}"),
            })?;

            let key = normalize_name(&spec.name);
            if vessels.contains_key(&key) {
                return Err(Error::DuplicateVesselName { name: spec.name });
            }
            vessels.insert(key, spec);
        }

        Ok(Self {
            vessels,
            source: None,
        })
    }

    /// Get a vessel definition by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&VesselSpec> {
        self.vessels.get(&normalize_name(name))
    }

    /// Build an empty vessel from the named definition.
    pub fn vessel(&self, name: &str) -> Result<Vessel> {
        let spec = self.get(name).ok_or_else(|| Error::UnknownVessel {
            name: name.to_string(),
            suggestions: suggest(name, self.vessels.values().map(|v| v.name.as_str()), 3),
        })?;
        Vessel::from_spec(spec.clone())
    }

    /// Get a sorted list of all vessel names.
    pub fn vessel_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.vessels.values().map(|v| v.name.clone()).collect();
        names.sort();
        names
    }

    /// Get all vessel definitions sorted by name.
    pub fn vessels_sorted(&self) -> Vec<&VesselSpec> {
        let mut vessels: Vec<&VesselSpec> = self.vessels.values().collect();
        vessels.sort_by(|a, b| a.name.cmp(&b.name));
        vessels
    }

    pub fn len(&self) -> usize {
        self.vessels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Map each canonical field to its column index, failing on missing columns.
fn resolve_columns(headers: &StringRecord) -> Result<BTreeMap<&'static str, usize>> {
    let normalized_headers: Vec<String> = headers.iter().map(normalize_header).collect();

    let mut index_map = BTreeMap::new();
    for (canon, alts) in COLUMN_SYNONYMS {
        let found = alts.iter().find_map(|alt| {
            let alt_n = normalize_header(alt);
            normalized_headers.iter().position(|h| *h == alt_n)
        });
        if let Some(index) = found {
            index_map.insert(*canon, index);
        }
    }

    let missing: Vec<&str> = COLUMN_SYNONYMS
        .iter()
        .map(|(canon, _)| *canon)
        .filter(|canon| !index_map.contains_key(canon))
        .collect();

    if !missing.is_empty() {
        return Err(Error::VesselDataValidation {
            message: format!(
                "vessel catalog missing required columns: {}. Available: {}",
                missing.join(", "),
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        });
    }

    Ok(index_map)
}

fn parse_row(
    record: &StringRecord,
    index_map: &BTreeMap<&'static str, usize>,
    row: usize,
) -> Result<VesselSpec> {
    let name = cell(record, index_map, "name").unwrap_or_default().to_string();

    let max_speed_knots = parse_cell::<f64>(record, index_map, "max_speed_knots", &name, row)?;
    let max_container_count =
        parse_cell::<usize>(record, index_map, "max_container_count", &name, row)?;
    let max_weight_tons = parse_cell::<f64>(record, index_map, "max_weight_tons", &name, row)?;

    Ok(VesselSpec {
        name,
        max_speed_knots,
        max_container_count,
        max_weight_tons,
    })
}

fn cell<'r>(
    record: &'r StringRecord,
    index_map: &BTreeMap<&'static str, usize>,
    field: &str,
) -> Option<&'r str> {
    index_map
        .get(field)
        .and_then(|&i| record.get(i))
        .map(str::trim)
}

fn parse_cell<T>(
    record: &StringRecord,
    index_map: &BTreeMap<&'static str, usize>,
    field: &str,
    name: &str,
    row: usize,
) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    cell(record, index_map, field)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::VesselDataValidation {
            message: format!("missing {field} for vessel '{name}' at row {row}"),
        })?
        .parse::<T>()
        .map_err(|e| Error::VesselDataValidation {
            message: format!("invalid {field} for vessel '{name}' at row {row}: {e}"),
        })
}

/// Lowercase, map separators to `_`, and drop everything else that is not
/// alphanumeric, so `Max Weight (t)` becomes `max_weight_t`.
fn normalize_header(header: &str) -> String {
    let mut normalized = String::with_capacity(header.len());
    for c in header.trim().chars() {
        if c.is_ascii_alphanumeric() {
            normalized.push(c.to_ascii_lowercase());
        } else if matches!(c, '_' | ' ' | '-') && !normalized.ends_with('_') {
            normalized.push('_');
        }
    }
    normalized.trim_end_matches('_').to_string()
}

/// Normalize a vessel name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn header_with_units_in_parentheses_is_accepted() {
        assert_eq!(normalize_header("Max Weight (t)"), "max_weight_t");
        assert_eq!(normalize_header(" Max-Speed "), "max_speed");

        let csv = "Vessel,Speed,Max Containers,Max Weight (t)\nNordic Star,18,4,12.5\n";
        let catalog = VesselCatalog::from_reader(Cursor::new(csv)).expect("headers resolve");
        let spec = catalog.get("nordic star").expect("vessel exists");
        assert_eq!(spec.max_container_count, 4);
        assert_eq!(spec.max_weight_tons, 12.5);
    }

    #[test]
    fn builtin_catalog_has_demo_vessels() {
        let catalog = VesselCatalog::builtin();
        assert_eq!(
            catalog.vessel_names(),
            vec!["Atlantic Express", "Pacific Runner"]
        );
        assert_eq!(catalog.get("ATLANTIC EXPRESS").unwrap().max_container_count, 3);
    }
}
