use clap::Parser;
use std::path::PathBuf;

use crate::infra::factory::Preset;

#[derive(Parser)]
#[command(name = "series-inspector")]
#[command(about = "Obtain a TV series record and print its fields, whole record and JSON round trip")]
pub struct Cli {
    /// Built-in series record to inspect
    #[arg(long, value_enum, conflicts_with = "record")]
    pub preset: Option<Preset>,

    /// Load the record from a JSON or TOML file instead (relative to the current directory)
    #[arg(long)]
    pub record: Option<PathBuf>,
}
