//! Error types for IFC Assistant.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading an IFC file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the IFC file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The STEP format is invalid or malformed.
    #[error("invalid STEP format: {message}")]
    InvalidStep { message: String },
}

/// Errors raised while walking an opened model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A reference points at an entity that does not exist in the file.
    #[error("#{from} references missing entity #{to}")]
    DanglingReference { from: u64, to: u64 },

    /// An attribute holds a value of the wrong kind.
    #[error("attribute {attribute} of #{id} ({entity_type}) is not {expected}")]
    UnexpectedValue {
        id: u64,
        entity_type: String,
        attribute: &'static str,
        expected: &'static str,
    },
}

/// Fatal extraction failure. No partial tables survive it.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Error processing IFC file: {0}")]
    Parse(#[from] ParseError),

    #[error("Error processing IFC file: {0}")]
    Model(#[from] ModelError),
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file or directory.
    #[error("failed to create '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// Errors talking to the chat service.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The request never produced a response.
    #[error("chat request failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("chat service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("unexpected chat response: {message}")]
    InvalidResponse { message: String },
}
