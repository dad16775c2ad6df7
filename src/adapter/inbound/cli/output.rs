//! CLI output formatting.
//!
//! Supports JSON mode (for scripting) and quiet mode. Bot replies are
//! printed verbatim so the CLI shows exactly what the bot would send.

use owo_colors::OwoColorize;
use parking_lot::RwLock;
use serde_json::json;

/// Flags shared by every subcommand's printer.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// One JSON object per line instead of text.
    pub json: bool,
    /// Skip the header.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT: RwLock<OutputConfig> = RwLock::new(OutputConfig::new(false, false));

/// Set the flags parsed from the command line.
pub fn configure(config: OutputConfig) {
    *OUTPUT.write() = config;
}

fn current() -> OutputConfig {
    *OUTPUT.read()
}

fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// Name and version line, suppressed by `--quiet`.
pub fn header(version: &str) {
    let config = current();
    if config.json {
        emit_json_line("header", json!({ "app": "dealwatch", "version": version }));
        return;
    }
    if config.quiet {
        return;
    }

    println!("{} {}", "dealwatch".bold(), version.dimmed());
    println!();
}

/// Print a bot reply. Always shown, even in quiet mode.
pub fn reply(text: &str) {
    if current().json {
        emit_json_line("reply", json!({ "text": text }));
        return;
    }

    println!("{text}");
}

/// Print an error line.
pub fn error(message: &str) {
    if current().json {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
        return;
    }

    eprintln!("{} {message}", "error:".red().bold());
}
