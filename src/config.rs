//! Configuration for the `jpeg-header` command-line tool.
//!
//! Options come from command-line arguments via clap, with environment
//! variable fallbacks using the `JPEG_HEADER_` prefix:
//!
//! - `JPEG_HEADER_FORMAT` - Output format, `text` or `json` (default: text)
//! - `JPEG_HEADER_CHECK_ONLY` - Run only the quick validity check (default: false)
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use jpeg_header::config::Config;
//!
//! let config = Config::parse();
//! config.validate()?;
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

// =============================================================================
// Output Format
// =============================================================================

/// How probe results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per file
    #[default]
    Text,
    /// A pretty-printed JSON array of reports
    Json,
}

// =============================================================================
// CLI Arguments
// =============================================================================

/// jpeg-header - Read JPEG dimensions and EXIF orientation.
///
/// Only the marker segments at the start of each file are inspected;
/// image data is never decoded.
#[derive(Parser, Debug, Clone)]
#[command(name = "jpeg-header")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// JPEG files to inspect.
    #[arg(value_name = "FILE")]
    pub paths: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "JPEG_HEADER_FORMAT")]
    pub format: OutputFormat,

    /// Only run the quick validity check, without reading dimensions.
    #[arg(long, default_value_t = false, env = "JPEG_HEADER_CHECK_ONLY")]
    pub check_only: bool,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.paths.is_empty() {
            return Err("At least one FILE is required".to_string());
        }

        if self.paths.iter().any(|p| p.as_os_str().is_empty()) {
            return Err("File paths must not be empty".to_string());
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
