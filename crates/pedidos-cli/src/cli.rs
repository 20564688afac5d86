//! CLI argument definitions for the converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pedidos",
    version,
    about = "Sales-order spreadsheet converter - normalize exports to accounting CSV",
    long_about = "Convert semi-structured sales-order spreadsheet exports (.xlsx/.xls)\n\
                  into fixed-column semicolon-separated CSV.\n\n\
                  Columns are discovered by fuzzy header matching; due dates and\n\
                  batch numbers are derived from associated text when no dedicated\n\
                  column exists."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a spreadsheet export to semicolon-separated CSV.
    Convert(ConvertArgs),

    /// List the logical output fields and their candidate headers.
    Fields,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Spreadsheet export to convert (.xlsx or .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Extraction mode to apply. The upload server defaults to template;
    /// pass --mode template to match its output.
    #[arg(long = "mode", value_enum, default_value = "focused")]
    pub mode: ModeArg,

    /// Output CSV path (default: plantilla_llena_<timestamp>.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Extraction mode. Never inferred from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Five-column schema: NIT, DESCRIPCION, DETALLE, FECHA DE VENCIMIENTO, LOTE.
    Focused,
    /// Full accounting-template schema rebuilt from the raw export.
    Template,
}

impl ModeArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Focused => "focused",
            Self::Template => "template",
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
