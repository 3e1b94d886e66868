use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Write;

use super::render::{render_record, render_value};
use crate::domain::models::Series;
use crate::infra::factory::RecordFactory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Seasons,
}

pub fn obtain_record(factory: &dyn RecordFactory) -> Result<Series> {
    let series = factory.create().context("Record factory failed")?;
    tracing::info!(name = series.name(), "obtained record");
    Ok(series)
}

pub fn print_field(out: &mut impl Write, series: &Series, field: Field) -> Result<()> {
    match field {
        Field::Name => writeln!(out, "{}", series.name())?,
        Field::Seasons => writeln!(out, "{}", render_value(&series.seasons.to_value()))?,
    }
    Ok(())
}

pub fn print_whole(out: &mut impl Write, series: &Series) -> Result<()> {
    writeln!(out, "{}", render_record(series)?)?;
    Ok(())
}

/// Serializes the record to JSON, parses the text back as a plain value and
/// prints that value. Returns the parsed value.
pub fn print_round_trip(out: &mut impl Write, series: &Series) -> Result<Value> {
    let text = serde_json::to_string(series).context("Failed to serialize record")?;
    tracing::debug!(json = %text, "serialized record");

    let parsed: Value = serde_json::from_str(&text).context("Failed to parse serialized record")?;
    writeln!(out, "{}", render_value(&parsed))?;
    Ok(parsed)
}

pub fn inspect(out: &mut impl Write, factory: &dyn RecordFactory) -> Result<Series> {
    let series = obtain_record(factory)?;

    print_field(out, &series, Field::Name)?;
    print_field(out, &series, Field::Seasons)?;
    print_whole(out, &series)?;
    print_round_trip(out, &series)?;

    out.flush()?;
    Ok(series)
}
