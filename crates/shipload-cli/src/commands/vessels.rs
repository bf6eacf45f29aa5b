//! Vessels command handler for listing the vessel catalog.

use std::io;

use anyhow::Result;

use shipload_cli::output::OutputFormat;
use shipload_lib::VesselCatalog;

/// List catalog vessels sorted by name.
pub fn handle_list_vessels(catalog: &VesselCatalog, format: OutputFormat) -> Result<()> {
    if let Some(path) = catalog.source_path() {
        tracing::debug!(path = %path.display(), "listing vessels");
    }
    format.render_vessels(&catalog.vessels_sorted(), &mut io::stdout().lock())
}
