//! Terminal output for the CLI.
//!
//! Handlers print through these helpers so `--json` and `--quiet` are
//! honored in one place. In JSON mode each command prints exactly one
//! document on stdout.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// True when human-readable lines should be printed: not in JSON mode and
/// not silenced by `--quiet`.
fn human(config: OutputConfig) -> bool {
    !config.json && !config.quiet
}

fn when_human(print: impl FnOnce()) {
    if human(read_config()) {
        print();
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Global verbosity level from `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    read_config().verbose
}

pub fn header(version: &str) {
    when_human(|| println!("{} {}", "pennant".bold(), version.dimmed()));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    when_human(|| println!("  {:<12} {}", label.dimmed(), value));
}

pub fn section(title: &str) {
    when_human(|| println!("\n{}", title.bold()));
}

/// Print pre-rendered text (tables), indented.
pub fn lines(content: &str) {
    when_human(|| {
        for line in content.lines() {
            println!("  {line}");
        }
    });
}

pub fn note(message: &str) {
    when_human(|| println!("  {}", message.dimmed()));
}

pub fn hint(message: &str) {
    when_human(|| println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed()));
}

/// Verdict lines survive `--quiet`; they are the answer.
pub fn success(message: &str) {
    if !is_json() {
        println!("  {} {}", "✓".green(), message);
    }
}

/// See [`success`].
pub fn warning(message: &str) {
    if !is_json() {
        println!("  {} {}", "⚠".yellow(), message);
    }
}

/// Print an error to stderr, as a JSON object in JSON mode.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

/// Emit one JSON document on stdout.
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}

pub fn highlight(value: impl Display) -> String {
    if is_json() {
        value.to_string()
    } else {
        value.cyan().to_string()
    }
}

pub fn muted(value: impl Display) -> String {
    if is_json() {
        value.to_string()
    } else {
        value.dimmed().to_string()
    }
}
