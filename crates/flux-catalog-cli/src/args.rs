use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "flux-catalog")]
#[command(about = "Categorized catalog of ProtoFlux nodes from module metadata")]
#[command(version)]
pub struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Base directory holding config.toml (default: ~/.flux-catalog)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the category catalog from metadata dumps
    Generate {
        /// Module dump file, or directory of dumps
        source: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the catalog to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show how every type in the namespace was classified
    Inspect {
        /// Module dump file, or directory of dumps
        source: PathBuf,

        /// Only list types carrying the node name marker
        #[arg(long)]
        nodes_only: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value (e.g. markers.node_name)
    Get {
        /// Dot-notation key
        key: String,
    },

    /// Set a config value
    Set {
        /// Dot-notation key
        key: String,

        /// New value (lists: comma-separated or ["a", "b"])
        value: String,
    },

    /// List all config values
    List,

    /// Print the config file path
    Path,

    /// Create config.toml with defaults
    Init,
}
