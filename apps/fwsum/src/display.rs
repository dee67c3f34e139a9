//! Output rendering and formatting

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};
use console::Style;
use fwsum_ops::{GenerateReport, OperationResult, VerificationReport};
use std::io;

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool) -> Self {
        Self { json_output }
    }

    /// Render operation result
    pub fn render_result(&self, result: &OperationResult) -> io::Result<()> {
        if self.json_output {
            self.render_json(result)
        } else {
            self.render_plain(result)
        }
    }

    /// Render as JSON
    fn render_json(&self, result: &OperationResult) -> io::Result<()> {
        let json = result.to_json().map_err(io::Error::other)?;
        println!("{json}");
        Ok(())
    }

    /// Render as human-readable text
    fn render_plain(&self, result: &OperationResult) -> io::Result<()> {
        match result {
            OperationResult::Generate(report) => Self::render_generate(report),
            OperationResult::Verification(report) => Self::render_verification(report),
        }
        Ok(())
    }

    fn render_generate(report: &GenerateReport) {
        println!("SHA-256 hash: {}", report.sha256_hash);
        println!("File size: {} bytes", report.file_size);
        println!("Saved to {}", report.manifest_path.display());
    }

    fn render_verification(report: &VerificationReport) {
        println!("File name: {}", report.file_name);
        println!("Version: {}", report.version);

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new("Field").add_attribute(Attribute::Bold),
            Cell::new("Stored").add_attribute(Attribute::Bold),
            Cell::new("Current").add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("Size (bytes)"),
            Cell::new(report.stored_size),
            Cell::new(report.current_size),
        ]);
        table.add_row(vec![
            Cell::new("SHA-256"),
            Cell::new(&report.stored_sha256),
            Cell::new(&report.current_sha256),
        ]);
        println!("{table}");

        let style = if report.outcome.is_pass() {
            Style::new().green().bold()
        } else {
            Style::new().red().bold()
        };
        println!("Result: {}", style.apply_to(report.outcome));
    }
}
