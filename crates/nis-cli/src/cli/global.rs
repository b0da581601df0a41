use clap::ValueEnum;

/// Output mode for the item list.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Plain per-item text blocks.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
    /// Single-line JSON array.
    Raw,
}

/// How much detail the text output shows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verbosity {
    /// Name, location, date and type only.
    Quiet,
    Normal,
    /// Normal plus launch vehicle details.
    Verbose,
}

/// Which feeds to query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Selection {
    All,
    EventsOnly,
    LaunchesOnly,
}
