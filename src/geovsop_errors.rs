use thiserror::Error;

use crate::metadata::Metadata;

#[derive(Error, Debug)]
pub enum GeoVsopError {
    #[error("Metadata mismatch: expected {expected}, found {found}")]
    MetadataMismatch { expected: Metadata, found: Metadata },

    #[error("Invalid geocentric parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Malformed VSOP87 file at line {line}: {reason}")]
    MalformedVsopFile { line: usize, reason: String },

    #[error("Unsupported VSOP87 version: {0} (only version A is rectangular J2000 ecliptic)")]
    UnsupportedVsopVersion(char),

    #[error("VSOP87 file not found at: {0}")]
    VsopFileNotFound(String),

    #[error("Invalid regular expression: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "vsop-download")]
    #[error("HTTP reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Base dir creation error for VSOP87 file: {0}")]
    UnableToCreateBaseDir(String),
}

impl PartialEq for GeoVsopError {
    fn eq(&self, other: &Self) -> bool {
        use GeoVsopError::*;
        match (self, other) {
            (
                MetadataMismatch {
                    expected: e1,
                    found: f1,
                },
                MetadataMismatch {
                    expected: e2,
                    found: f2,
                },
            ) => e1 == e2 && f1 == f2,
            (InvalidParameter(a), InvalidParameter(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (
                MalformedVsopFile {
                    line: l1,
                    reason: r1,
                },
                MalformedVsopFile {
                    line: l2,
                    reason: r2,
                },
            ) => l1 == l2 && r1 == r2,
            (UnsupportedVsopVersion(a), UnsupportedVsopVersion(b)) => a == b,
            (VsopFileNotFound(a), VsopFileNotFound(b)) => a == b,
            (UnableToCreateBaseDir(a), UnableToCreateBaseDir(b)) => a == b,
            (RegexError(a), RegexError(b)) => a == b,

            // Not comparable: equal when the variant matches
            (IoError(_), IoError(_)) => true,
            #[cfg(feature = "vsop-download")]
            (ReqwestError(_), ReqwestError(_)) => true,

            _ => false,
        }
    }
}
