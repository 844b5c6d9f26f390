//! Errors raised while building query sets.

use crate::model::FieldType;
use thiserror::Error;
use trawl_filters::PatternFilterError;

#[derive(Debug, Error)]
pub enum OrmError {
	#[error("Unknown field '{field}' on model '{model}'")]
	UnknownField { model: String, field: String },

	#[error("Cannot use '{value}' as {expected} for field '{field}'")]
	TypeMismatch {
		field: String,
		expected: FieldType,
		value: String,
	},

	#[error("Empty IN list for field '{field}'")]
	EmptyInList { field: String },

	#[error(transparent)]
	Pattern(#[from] PatternFilterError),
}

pub type OrmResult<T> = Result<T, OrmError>;
