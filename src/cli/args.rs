//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::handlers::TrackKind;

/// trackdb - Track registry for genome-browser datasets.
#[derive(Debug, Parser)]
#[command(name = "trackdb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Dataset directory holding trackList.json (defaults to current directory)
    #[arg(short, long, global = true, env = "TRACKDB_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to config file (overrides <data-dir>/trackdb.yml)
    #[arg(short = 'c', long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Print data only, no status messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List registered tracks in display order
    List(ListArgs),

    /// Resolve a track and show its handler
    Show(ShowArgs),

    /// Insert or update a track record
    Add(AddArgs),

    /// Remove a track record
    Remove(RemoveArgs),

    /// Create a feature or image track and register it
    Create(CreateArgs),

    /// List reference sequences
    Refseqs(RefseqsArgs),

    /// Print or write the .htaccess for compressed track data
    Htaccess(HtaccessArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Print the raw records as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Track label
    pub label: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AddArgs {
    /// Track label
    pub label: String,

    /// Display name (defaults to the label)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Dotted handler type, e.g. FeatureTrack or ImageTrack.Wiggle
    #[arg(short = 't', long = "type")]
    pub track_type: String,

    /// Extra configuration as a JSON object
    #[arg(long)]
    pub config: Option<String>,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveArgs {
    /// Track label
    pub label: String,
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
    /// Track family: feature or image
    pub kind: TrackKind,

    /// Track label
    pub label: String,

    /// Display name (defaults to the label)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Handler subtype, e.g. ImageTrack.Wiggle
    #[arg(short, long)]
    pub subtype: Option<String>,

    /// Extra configuration as a JSON object
    #[arg(long)]
    pub config: Option<String>,
}

/// Arguments for the `refseqs` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RefseqsArgs {
    /// Print the raw records as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `htaccess` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct HtaccessArgs {
    /// Write <data-dir>/.htaccess instead of printing
    #[arg(long)]
    pub write: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
