use clap::Parser;
use fleet_components::application::dto::ReportFormat;
use fleet_components::component_hierarchy::domain::{ComponentId, CriticalityFilter};
use std::path::PathBuf;

/// Browse the component hierarchy of a vessel from the fleet maintenance API
#[derive(Parser, Debug)]
#[command(name = "fleet-components")]
#[command(version)]
#[command(
    about = "Build, filter and render the installed component tree and inventory of a vessel",
    long_about = None
)]
pub struct Args {
    /// Vessel to load (defaults to `default_vessel_id` from the config file)
    #[arg(short, long)]
    pub vessel: Option<String>,

    /// Case-insensitive search over name, serial number and asset code
    #[arg(short, long)]
    pub search: Option<String>,

    /// Criticality filter: all, critical or not_critical
    #[arg(short, long)]
    pub criticality: Option<CriticalityFilter>,

    /// Expand every installed component that has sub-components
    #[arg(long)]
    pub expand_all: bool,

    /// Toggle expansion of a component; can be given multiple times
    #[arg(long = "expand", value_name = "ID")]
    pub expand: Vec<ComponentId>,

    /// Select a component to include its details in the report
    #[arg(long, value_name = "ID")]
    pub select: Option<ComponentId>,

    /// Output format: json or markdown (defaults to the --output extension, then markdown)
    #[arg(short, long, value_enum, ignore_case = true)]
    pub format: Option<ReportFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read components from `{DIR}/{vessel}.json` instead of the API
    #[arg(long, value_name = "DIR", conflicts_with = "api_url")]
    pub snapshot_dir: Option<PathBuf>,

    /// Base URL of the fleet API
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Config file (defaults to ./fleet-components.config.yml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
