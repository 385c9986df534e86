//! CLI argument definitions and shared statics.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Pdf,
    Html,
    Docx,
}

impl core::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OutputFormat::Pdf => write!(f, "pdf"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Docx => write!(f, "docx"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ptcalc", version, about = "Proficiency-testing round calculator")]
pub struct Cli {
    /// Log as JSON lines instead of pretty
    #[arg(long, global = true)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    /// Optional path to write structured JSON-lines logs to, in addition to stderr
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run only the input validation kernel over a dataset.
    Validate {
        /// Path to config TOML
        #[arg(long, value_name = "FILE")]
        config: PathBuf,
        /// Path to the dataset CSV
        #[arg(long, value_name = "FILE")]
        data: PathBuf,
    },
    /// Validate, compute the assigned value, and score every participant.
    Calculate {
        /// Path to config TOML
        #[arg(long, value_name = "FILE")]
        config: PathBuf,
        /// Path to the dataset CSV
        #[arg(long, value_name = "FILE")]
        data: PathBuf,
        /// Write the results record to this path instead of only stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Serialize a previously-computed results record through the external renderer.
    ReportOnly {
        /// Path to a results record previously produced by `calculate --out`
        #[arg(long, value_name = "FILE")]
        record: PathBuf,
        /// Report template path, passed through to the renderer unchanged
        #[arg(long, value_name = "FILE")]
        template: PathBuf,
        /// Output document format
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: OutputFormat,
        /// Where the renderer should write the rendered document
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Path to the renderer executable (defaults to `pt-render` on PATH)
        #[arg(long, value_name = "PATH", default_value = "pt-render")]
        renderer: PathBuf,
    },
}
