//! Error types for pattern filtering and settings loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the pattern filter pipeline itself.
///
/// Errors of the equality delegate are never wrapped in this type; they reach
/// the caller unchanged through the host's own error type.
#[derive(Debug, Error)]
pub enum PatternFilterError {
	#[error("Filter spec must be an object of field names, got {found}")]
	NotAnObject { found: String },

	#[error("Malformed term for field '{field}': {reason}")]
	MalformedTerm { field: String, reason: String },

	#[error(
		"Equality predicate for field '{field}' is not `column = value` or `column IN (values)`"
	)]
	MalformedPredicate { field: String },
}

pub type PatternFilterResult<T> = Result<T, PatternFilterError>;

/// Settings loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("IO error reading {path}: {source}")]
	IoError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse configuration: {message}")]
	ParseError { message: String },
}
