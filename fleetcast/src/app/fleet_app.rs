use super::FleetOperation;
use clap::Parser;

/// command line tool for generating, reconciling, and analyzing bus
/// arrival predictions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct FleetApp {
    #[command(subcommand)]
    pub op: FleetOperation,
    /// TOML predictor configuration; built-in defaults apply when omitted
    #[arg(long)]
    pub config_file: Option<String>,
}
