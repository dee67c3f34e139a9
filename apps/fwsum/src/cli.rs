//! Command line interface definition

use clap::{Parser, Subcommand};
use fwsum_types::FirmwareVersion;
use std::path::PathBuf;

/// fwsum - firmware manifest integrity tool
#[derive(Parser)]
#[command(name = "fwsum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate and verify firmware integrity manifests")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a manifest for a firmware image
    #[command(alias = "gen")]
    Generate {
        /// Path to the .bin artifact (prompted for when omitted)
        artifact: Option<PathBuf>,

        /// Firmware version in m.n.p form (prompted for when omitted)
        #[arg(short, long, value_parser = FirmwareVersion::parse)]
        version: Option<FirmwareVersion>,

        /// Manifest destination (defaults to the artifact path with a .json extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify a firmware image against its manifest
    Verify {
        /// Path to the .json manifest (prompted for when omitted)
        manifest: Option<PathBuf>,

        /// Path to the .bin artifact (prompted for when omitted)
        artifact: Option<PathBuf>,
    },

    /// Pick an artifact from the Output directory and verify it
    Pick {
        /// Directory to list candidates from (defaults to Output next to the executable)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}
