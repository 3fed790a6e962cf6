//! Clap derive structures for the `wirecalc` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// wirecalc -- transfer-time and streaming-readiness calculator
#[derive(Debug, Parser)]
#[command(
    name = "wirecalc",
    version,
    about = "Estimate file transfer times and streaming readiness",
    long_about = "Answers two everyday bandwidth questions: how long a file\n\
        transfer will take on a given link, and whether an upload speed can\n\
        sustain a live stream at a chosen quality.\n\n\
        Speeds are line rates in Mbps; sizes are binary (1 GB = 1024 MB).",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Saved connection to read speeds from
    #[arg(long, short = 'c', env = "WIRECALC_CONNECTION", global = true)]
    pub connection: Option<String>,

    /// Output format (falls back to the configured default, then table)
    #[arg(long, short = 'o', env = "WIRECALC_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Reference instant for arrival times (RFC 3339) instead of the wall clock
    #[arg(long, value_name = "RFC3339", global = true, hide = true)]
    pub now: Option<String>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate how long a file transfer takes
    #[command(alias = "t")]
    Transfer(TransferArgs),

    /// Check an upload speed against a stream quality profile
    #[command(alias = "s")]
    Streaming(StreamingArgs),

    /// Built-in reference tables (link speeds, stream bitrates)
    Presets(PresetsArgs),

    /// Manage CLI configuration and saved connections
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TRANSFER
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TransferArgs {
    /// File size, optionally with an inline unit suffix (700, 4.7GB, 1.5tb)
    #[arg(value_name = "SIZE", allow_negative_numbers = true)]
    pub size: String,

    /// Unit for a bare SIZE value (an inline suffix wins)
    #[arg(long, short = 'u', value_enum, ignore_case = true)]
    pub unit: Option<UnitArg>,

    /// Link speed in Mbps
    #[arg(
        long,
        short = 's',
        value_name = "MBPS",
        allow_negative_numbers = true,
        conflicts_with = "preset"
    )]
    pub speed: Option<f64>,

    /// Use a named link preset instead of an explicit speed
    #[arg(long, short = 'p', value_enum)]
    pub preset: Option<PresetArg>,

    /// Transfer direction
    #[arg(long, short = 'd', value_enum)]
    pub direction: Option<DirectionArg>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum UnitArg {
    /// Megabytes
    #[value(name = "MB")]
    Megabytes,
    /// Gigabytes (1024 MB)
    #[value(name = "GB")]
    Gigabytes,
    /// Terabytes (1024 GB)
    #[value(name = "TB")]
    Terabytes,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum DirectionArg {
    Download,
    Upload,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum PresetArg {
    /// Dial-up modem (0.056 Mbps)
    Dial,
    /// Basic broadband (10 Mbps)
    Broadband,
    /// Fast broadband (100 Mbps)
    Fast,
    /// Very fast broadband (500 Mbps)
    #[value(name = "very-fast", alias = "very_fast")]
    VeryFast,
    /// Gigabit fiber (1000 Mbps)
    Gigabit,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  STREAMING
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct StreamingArgs {
    /// Upload speed in Mbps (omit to read it from the connection)
    #[arg(value_name = "UPLOAD_MBPS", allow_negative_numbers = true)]
    pub upload: Option<f64>,

    /// Stream quality profile
    #[arg(long, short = 'p', value_enum)]
    pub profile: ProfileArg,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ProfileArg {
    /// 720p at 30 fps (3 Mbps target)
    #[value(name = "720p30")]
    P720p30,
    /// 720p at 60 fps (4.5 Mbps target)
    #[value(name = "720p60")]
    P720p60,
    /// 1080p at 30 fps (5 Mbps target)
    #[value(name = "1080p30")]
    P1080p30,
    /// 1080p at 60 fps (8 Mbps target)
    #[value(name = "1080p60")]
    P1080p60,
    /// 1440p at 60 fps (12 Mbps target)
    #[value(name = "1440p60")]
    P1440p60,
    /// 4K at 30 fps (16 Mbps target)
    #[value(name = "4k30")]
    P4k30,
    /// 4K at 60 fps (25 Mbps target)
    #[value(name = "4k60")]
    P4k60,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PRESETS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    pub command: PresetsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PresetsCommand {
    /// Link-speed presets usable with `transfer --preset`
    #[command(alias = "ls")]
    Speeds,

    /// Stream profile bitrates and recommended upload speeds
    Bitrates,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Set a configuration value
    Set {
        /// Config key (output, color, unit, direction, download_mbps, upload_mbps)
        key: String,

        /// Value to set
        value: String,
    },

    /// List saved connections
    Connections,

    /// Set the default connection
    Use {
        /// Connection name to set as default
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
