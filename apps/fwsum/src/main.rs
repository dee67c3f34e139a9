//! fwsum - firmware manifest integrity tool
//!
//! This is the CLI application that drives manifest generation and
//! verification through the ops crate. Prompts fill in any inputs not
//! supplied as arguments.

mod cli;
mod display;
mod error;
mod prompts;

use crate::cli::{Cli, Commands};
use crate::display::OutputRenderer;
use crate::error::CliError;
use clap::Parser;
use fwsum_errors::ValidationError;
use fwsum_ops::OperationResult;
use fwsum_types::{
    is_artifact_path, is_manifest_path, manifest_path_for, ARTIFACT_EXTENSION, MANIFEST_EXTENSION,
};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    init_tracing(cli.global.debug);

    match run(cli).await {
        Ok(result) => {
            // FAIL verifications report normally but exit nonzero
            if !result.is_success() {
                process::exit(1);
            }
        }
        Err(e) if e.is_cancelled() => {
            eprintln!("Operation cancelled by user.");
            process::exit(1);
        }
        Err(e) => {
            error!("Application error: {}", e);
            if !json_mode {
                eprintln!("Error: {e}");
            }
            process::exit(1);
        }
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<OperationResult, CliError> {
    info!("Starting fwsum v{}", env!("CARGO_PKG_VERSION"));

    let renderer = OutputRenderer::new(cli.global.json);

    let result = match cli.command {
        Commands::Generate {
            artifact,
            version,
            output,
        } => {
            let artifact = match artifact {
                Some(path) => path,
                None => prompts::prompt_artifact_path()?,
            };
            let version = match version {
                Some(version) => version,
                None => prompts::prompt_version()?,
            };
            let report = fwsum_ops::generate(&artifact, &version, output.as_deref()).await?;
            OperationResult::Generate(report)
        }

        Commands::Verify { manifest, artifact } => {
            let manifest = match manifest {
                Some(path) => {
                    require_extension(&path, MANIFEST_EXTENSION, is_manifest_path)?;
                    path
                }
                None => prompts::prompt_manifest_path()?,
            };
            let artifact = match artifact {
                Some(path) => {
                    require_extension(&path, ARTIFACT_EXTENSION, is_artifact_path)?;
                    path
                }
                None => prompts::prompt_artifact_path()?,
            };
            let report = fwsum_ops::verify(&manifest, &artifact).await?;
            OperationResult::Verification(report)
        }

        Commands::Pick { dir } => {
            let dir = dir.unwrap_or_else(default_candidate_dir);
            let candidates = fwsum_ops::candidate_artifacts(&dir).await?;
            let artifact = prompts::pick_artifact(&candidates)?;
            let manifest = manifest_path_for(&artifact);
            if !cli.global.json {
                println!("Using manifest {}", manifest.display());
            }
            let report = fwsum_ops::verify(&manifest, &artifact).await?;
            OperationResult::Verification(report)
        }
    };

    renderer.render_result(&result)?;
    Ok(result)
}

/// Reject an explicitly supplied path with the wrong extension before any I/O
fn require_extension(
    path: &Path,
    expected: &str,
    check: impl Fn(&Path) -> bool,
) -> Result<(), CliError> {
    if check(path) {
        Ok(())
    } else {
        Err(CliError::Ops(
            ValidationError::WrongExtension {
                path: path.display().to_string(),
                expected: expected.to_string(),
            }
            .into(),
        ))
    }
}

/// The fixed `Output` directory next to the executable
fn default_candidate_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Output")
}

fn init_tracing(debug_enabled_flag: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug_enabled_flag {
            tracing_subscriber::EnvFilter::new("info,fwsum=debug,fwsum_ops=debug")
        } else {
            tracing_subscriber::EnvFilter::new("warn")
        }
    });

    // Logs go to stderr so --json stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
