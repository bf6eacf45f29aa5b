//! Output formatting for CLI reports.
//!
//! Every subcommand produces a serializable report. [`OutputFormat`] decides
//! whether it is written as an aligned text table or as pretty JSON.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use shipload_lib::{ProductType, VesselSpec, VesselSummary};

use crate::terminal::{format_kg, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// One step of the demo session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DemoEvent {
    Loaded {
        vessel: String,
        serial: String,
    },
    Refused {
        vessel: String,
        serial: String,
        reason: String,
    },
    Transferred {
        serial: String,
        from: String,
        to: String,
    },
    Replaced {
        vessel: String,
        old: String,
        new: String,
    },
}

/// Everything the demo did, and where the vessels ended up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub events: Vec<DemoEvent>,
    pub vessels: Vec<VesselSummary>,
}

/// A product category with its minimum transport temperature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub key: &'static str,
    pub name: String,
    pub min_temperature_c: f64,
}

impl From<ProductType> for ProductRow {
    fn from(product: ProductType) -> Self {
        Self {
            key: product.key(),
            name: product.to_string(),
            min_temperature_c: product.required_min_temperature_c(),
        }
    }
}

impl OutputFormat {
    pub fn render_demo<W: Write>(self, report: &DemoReport, out: &mut W) -> Result<()> {
        match self {
            OutputFormat::Json => write_json(report, out),
            OutputFormat::Text => write_demo_text(report, &ColorPalette::detect(), out),
        }
    }

    pub fn render_products<W: Write>(self, rows: &[ProductRow], out: &mut W) -> Result<()> {
        match self {
            OutputFormat::Json => write_json(rows, out),
            OutputFormat::Text => write_products_text(rows, out),
        }
    }

    pub fn render_vessels<W: Write>(self, vessels: &[&VesselSpec], out: &mut W) -> Result<()> {
        match self {
            OutputFormat::Json => write_json(vessels, out),
            OutputFormat::Text => write_vessels_text(vessels, out),
        }
    }
}

fn write_json<T: Serialize + ?Sized, W: Write>(value: &T, out: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Text rendering of the demo: the event log, then one block per vessel.
pub fn write_demo_text<W: Write>(
    report: &DemoReport,
    palette: &ColorPalette,
    out: &mut W,
) -> Result<()> {
    let ColorPalette {
        reset,
        cyan,
        green,
        yellow,
        ..
    } = *palette;

    writeln!(out, "Operations:")?;
    for event in &report.events {
        match event {
            DemoEvent::Loaded { vessel, serial } => writeln!(
                out,
                "  {green}loaded{reset}      {cyan}{serial}{reset} onto {vessel}"
            )?,
            DemoEvent::Refused {
                vessel,
                serial,
                reason,
            } => writeln!(
                out,
                "  {yellow}refused{reset}     {cyan}{serial}{reset} by {vessel}: {reason}"
            )?,
            DemoEvent::Transferred { serial, from, to } => writeln!(
                out,
                "  {green}transferred{reset} {cyan}{serial}{reset} from {from} to {to}"
            )?,
            DemoEvent::Replaced { vessel, old, new } => writeln!(
                out,
                "  {green}replaced{reset}    {cyan}{old}{reset} with {cyan}{new}{reset} on {vessel}"
            )?,
        }
    }

    for summary in &report.vessels {
        writeln!(out)?;
        write_summary_text(summary, palette, out)?;
    }
    Ok(())
}

pub fn write_summary_text<W: Write>(
    summary: &VesselSummary,
    palette: &ColorPalette,
    out: &mut W,
) -> Result<()> {
    let ColorPalette {
        reset,
        white_bold,
        gray,
        cyan,
        ..
    } = *palette;

    writeln!(
        out,
        "{white_bold}{}{reset} {gray}({} kn){reset}",
        summary.name, summary.max_speed_knots
    )?;
    writeln!(
        out,
        "  containers: {}/{}  weight: {} of {}",
        summary.container_count,
        summary.max_container_count,
        format_kg(summary.total_weight_kg),
        format_kg(summary.max_weight_kg)
    )?;

    if summary.containers.is_empty() {
        writeln!(out, "  {gray}(no containers){reset}")?;
        return Ok(());
    }

    for line in &summary.containers {
        writeln!(
            out,
            "  {cyan}{:<10}{reset} {:<12} {:<24} {:>12} {gray}total{reset} {:>12}",
            line.serial.to_string(),
            line.kind.to_string(),
            line.details,
            format_kg(line.current_load_kg),
            format_kg(line.total_weight_kg)
        )?;
    }
    Ok(())
}

fn write_products_text<W: Write>(rows: &[ProductRow], out: &mut W) -> Result<()> {
    writeln!(out, "Product categories ({}):", rows.len())?;
    writeln!(out, "{:<14} {:<14} {:>8}", "Name", "Key", "Min °C")?;
    for row in rows {
        writeln!(
            out,
            "{:<14} {:<14} {:>8}",
            row.name, row.key, row.min_temperature_c
        )?;
    }
    Ok(())
}

fn write_vessels_text<W: Write>(vessels: &[&VesselSpec], out: &mut W) -> Result<()> {
    if vessels.is_empty() {
        writeln!(out, "No vessels available in catalog.")?;
        return Ok(());
    }

    writeln!(out, "Available vessels ({}):", vessels.len())?;
    writeln!(
        out,
        "{:<20} {:>10} {:>14} {:>16}",
        "Name", "Speed (kn)", "Max containers", "Max weight (t)"
    )?;
    for vessel in vessels {
        writeln!(
            out,
            "{:<20} {:>10} {:>14} {:>16}",
            vessel.name, vessel.max_speed_knots, vessel.max_container_count, vessel.max_weight_tons
        )?;
    }
    Ok(())
}
