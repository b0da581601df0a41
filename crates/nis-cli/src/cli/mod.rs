use clap::Parser;

pub mod global;

pub use global::{OutputFormat, Selection, Verbosity};

/// Top-level CLI parser for the `nextinspace` binary.
#[derive(Debug, Parser)]
#[command(name = "nextinspace", version, about = "Never miss a launch.")]
pub struct Cli {
    /// Number of items to display (defaults to `general.default_count`)
    #[arg(value_name = "COUNT", value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,

    /// Only show events (landings, engine tests, spacewalks...)
    #[arg(short, long, conflicts_with = "launches_only")]
    pub events_only: bool,

    /// Only show orbital and suborbital launches
    #[arg(short, long)]
    pub launches_only: bool,

    /// Show launch vehicle details and debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show name, location, date and type; log errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format: text, json, raw
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Shorthand for `--format json`
    #[arg(long, conflicts_with = "format")]
    pub json: bool,
}

impl Cli {
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    #[must_use]
    pub const fn selection(&self) -> Selection {
        if self.events_only {
            Selection::EventsOnly
        } else if self.launches_only {
            Selection::LaunchesOnly
        } else {
            Selection::All
        }
    }

    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        if self.verbose {
            Verbosity::Verbose
        } else if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}
