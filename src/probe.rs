//! File probing.
//!
//! Runs the validity check and the header scan over files on disk and
//! collects the outcome into a serializable [`ProbeReport`].

use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ProbeError;
use crate::format::{is_valid, ParsedHeader};

/// Outcome of probing one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Path or label the data came from
    pub path: String,

    /// Result of the quick validity check
    pub valid: bool,

    /// Parsed header, if the full scan succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ParsedHeader>,

    /// Parse error message, if the full scan failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeReport {
    /// Whether the header was parsed.
    pub fn is_ok(&self) -> bool {
        self.header.is_some()
    }
}

/// Probe an in-memory buffer.
///
/// Never fails: a parse error is recorded in the report.
pub fn probe_bytes(path: impl Into<String>, data: &[u8]) -> ProbeReport {
    let path = path.into();
    let valid = is_valid(data);

    match ParsedHeader::parse(data) {
        Ok(header) => {
            debug!(
                path = %path,
                width = header.width(),
                height = header.height(),
                orientation = header.image_orientation(),
                "Parsed JPEG header"
            );
            ProbeReport {
                path,
                valid,
                header: Some(header),
                error: None,
            }
        }
        Err(e) => {
            warn!(path = %path, valid, error = %e, "Failed to parse JPEG header");
            ProbeReport {
                path,
                valid,
                header: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Run only the validity check over an in-memory buffer.
pub fn check_bytes(path: impl Into<String>, data: &[u8]) -> ProbeReport {
    let path = path.into();
    let valid = is_valid(data);
    debug!(path = %path, valid, "Checked JPEG header");

    ProbeReport {
        path,
        valid,
        header: None,
        error: None,
    }
}

/// Read a file and probe it.
///
/// The whole file is read so the validity check sees every byte.
///
/// # Errors
/// Returns `ProbeError::Io` if the file cannot be read.
pub fn probe_path(path: &Path) -> Result<ProbeReport, ProbeError> {
    let data = read_file(path)?;
    Ok(probe_bytes(path.display().to_string(), &data))
}

/// Read a file and run only the validity check.
///
/// # Errors
/// Returns `ProbeError::Io` if the file cannot be read.
pub fn check_path(path: &Path) -> Result<ProbeReport, ProbeError> {
    let data = read_file(path)?;
    Ok(check_bytes(path.display().to_string(), &data))
}

/// Read a file and parse its header, surfacing the parse error.
///
/// # Errors
/// - `ProbeError::Io` if the file cannot be read
/// - `ProbeError::Format` if the header cannot be parsed
pub fn parse_path(path: &Path) -> Result<ParsedHeader, ProbeError> {
    let data = read_file(path)?;
    Ok(ParsedHeader::parse(&data)?)
}

fn read_file(path: &Path) -> Result<Vec<u8>, ProbeError> {
    debug!(path = %path.display(), "Reading file");
    std::fs::read(path).map_err(|e| ProbeError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
