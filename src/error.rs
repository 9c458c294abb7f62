use thiserror::Error;

/// Errors raised while scanning a JPEG header.
///
/// Both variants are final for the buffer being parsed: the input is static,
/// so retrying cannot change the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The buffer does not begin with the JPEG start-of-image marker (0xFFD8).
    #[error("missing start-of-image marker")]
    MissingStartOfImage,

    /// No usable frame header was found inside the scan window, or the buffer
    /// ended before its width and height could be read.
    #[error("invalid or incomplete JPEG header")]
    IncompleteHeader,
}

/// Errors that can occur when probing an image file on disk
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    /// The file could not be read
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// The file was read but its header could not be parsed
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}
