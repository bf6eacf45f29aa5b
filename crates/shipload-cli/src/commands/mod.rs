// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and dispatches.

pub mod demo;
pub mod products;
pub mod vessels;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use shipload_lib::VesselCatalog;

/// Environment variable naming a vessel catalog CSV.
pub const VESSEL_DATA_ENV: &str = "SHIPLOAD_VESSEL_DATA";

/// Resolve the vessel catalog.
///
/// Searches in the following order:
/// 1. The `--vessels` path, if given
/// 2. `SHIPLOAD_VESSEL_DATA` environment variable
/// 3. The built-in catalog
pub fn load_vessel_catalog(explicit: Option<&Path>) -> Result<VesselCatalog> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(VESSEL_DATA_ENV).map(PathBuf::from));

    match path {
        Some(path) => VesselCatalog::from_path(&path)
            .with_context(|| format!("failed to load vessel data from {}", path.display())),
        None => {
            tracing::debug!("using built-in vessel catalog");
            Ok(VesselCatalog::builtin())
        }
    }
}
