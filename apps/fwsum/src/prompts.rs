//! Interactive prompt loops
//!
//! Each prompt re-asks until the input passes validation, so callers only
//! ever see valid values. An interrupt surfaces as `Error::Cancelled` and
//! aborts the invocation with no partial output.

use dialoguer::{theme::ColorfulTheme, Input, Select};
use fwsum_errors::Error;
use fwsum_types::{
    is_artifact_path, is_manifest_path, FirmwareVersion, ARTIFACT_EXTENSION, MANIFEST_EXTENSION,
};
use std::path::{Path, PathBuf};

fn map_dialoguer(e: dialoguer::Error) -> Error {
    match e {
        dialoguer::Error::IO(io) => {
            if io.kind() == std::io::ErrorKind::Interrupted {
                Error::Cancelled
            } else {
                io.into()
            }
        }
    }
}

/// Strip surrounding whitespace and quote characters from a pasted path
fn clean_path_input(input: &str) -> &str {
    input.trim().trim_matches(|c| c == '"' || c == '\'')
}

fn prompt_path(
    prompt: &str,
    extension: &str,
    check: impl Fn(&Path) -> bool,
) -> Result<PathBuf, Error> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|value: &String| -> Result<(), String> {
            if check(Path::new(clean_path_input(value))) {
                Ok(())
            } else {
                Err(format!("File must have a .{extension} extension"))
            }
        })
        .interact_text()
        .map_err(map_dialoguer)?;

    Ok(PathBuf::from(clean_path_input(&input)))
}

/// Prompt for a `.bin` artifact path, re-prompting on a bad extension
pub fn prompt_artifact_path() -> Result<PathBuf, Error> {
    prompt_path("Enter path to .bin file", ARTIFACT_EXTENSION, is_artifact_path)
}

/// Prompt for a `.json` manifest path, re-prompting on a bad extension
pub fn prompt_manifest_path() -> Result<PathBuf, Error> {
    prompt_path("Enter path to .json file", MANIFEST_EXTENSION, is_manifest_path)
}

/// Prompt for a version string, re-prompting until it parses as `m.n.p`
pub fn prompt_version() -> Result<FirmwareVersion, Error> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter version (e.g., 1.0.0)")
        .validate_with(|value: &String| -> Result<(), String> {
            FirmwareVersion::parse(value)
                .map(|_| ())
                .map_err(|_| "Version must follow the format m.n.p (e.g., 1.0.0)".to_string())
        })
        .interact_text()
        .map_err(map_dialoguer)?;

    FirmwareVersion::parse(&input).map_err(Into::into)
}

/// Pick an artifact from a candidate list, or fall back to free-form entry
///
/// With candidates present the caller selects by index; the last entry
/// switches to typing an arbitrary path. With no candidates the path prompt
/// appears directly.
pub fn pick_artifact(candidates: &[PathBuf]) -> Result<PathBuf, Error> {
    if candidates.is_empty() {
        println!("No .bin files found in the candidate directory.");
        return prompt_existing_artifact_path();
    }

    let mut items: Vec<String> = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    items.push("Enter a path manually".to_string());

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a .bin file")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(map_dialoguer)?;

    match choice {
        Some(index) if index < candidates.len() => Ok(candidates[index].clone()),
        Some(_) => prompt_existing_artifact_path(),
        None => Err(Error::Cancelled),
    }
}

fn prompt_existing_artifact_path() -> Result<PathBuf, Error> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter .bin file path")
        .validate_with(|value: &String| -> Result<(), String> {
            let path = Path::new(clean_path_input(value));
            if !is_artifact_path(path) {
                Err("File must have a .bin extension".to_string())
            } else if !path.is_file() {
                Err("Invalid file path or file is not a .bin file".to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(map_dialoguer)?;

    Ok(PathBuf::from(clean_path_input(&input)))
}
