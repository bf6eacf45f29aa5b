//! Products command handler.

use std::io;

use anyhow::Result;

use shipload_cli::output::{OutputFormat, ProductRow};
use shipload_lib::ProductType;

/// List every product category with its minimum transport temperature.
pub fn handle_list_products(format: OutputFormat) -> Result<()> {
    let rows: Vec<ProductRow> = ProductType::ALL.into_iter().map(ProductRow::from).collect();
    format.render_products(&rows, &mut io::stdout().lock())
}
