use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::scanner::report::ReportFormat;

#[derive(Parser)]
#[command(name = "codesweep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Regex-based security scanner for source trees")]
#[command(
    long_about = "Scans C, JavaScript, PHP, Python, Rust, and Scala sources line by line against per-language security rule tables and reports findings as text or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a file or directory tree for security findings
    Scan {
        /// File or directory to scan
        #[arg(short, long, value_name = "PATH")]
        input: PathBuf,

        /// Write the report to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Worker thread count (defaults to the number of logical CPUs)
        #[arg(long, value_name = "N")]
        workers: Option<usize>,

        /// Abort the scan after this many seconds, reporting unfinished files
        #[arg(long, value_name = "SECONDS")]
        timeout: Option<u64>,

        /// Also run external checkers (gcc for C, php -l for PHP) when installed
        #[arg(long)]
        external_tools: bool,
    },

    /// List supported languages and their rule counts
    Languages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

impl Cli {
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
