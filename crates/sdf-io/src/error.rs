//! Error types raised at the I/O boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading a mesh from disk.
#[derive(Error, Debug)]
pub enum LoadError {
  #[error("{path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("{path}:{line}: {reason}")]
  Parse { path: PathBuf, line: usize, reason: String },

  #[error("{path}: file truncated before triangle data ended")]
  Truncated { path: PathBuf },
}

/// Failure while writing or reading a binary field file.
#[derive(Error, Debug)]
pub enum IoError {
  #[error("{path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("{path}: truncated header (expected 36 bytes)")]
  TruncatedHeader { path: PathBuf },

  #[error("{path}: header describes an invalid grid: {reason}")]
  InvalidHeader { path: PathBuf, reason: String },

  #[error("{path}: expected {expected} phi values, found {found}")]
  PhiCountMismatch { path: PathBuf, expected: usize, found: usize },
}
