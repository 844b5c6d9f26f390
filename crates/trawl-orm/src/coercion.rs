//! Coercion of filter values into typed SQL values.

use crate::error::{OrmError, OrmResult};
use crate::model::{FieldDef, FieldType};
use chrono::{NaiveDate, NaiveDateTime};
use trawl_query::Value;
use uuid::Uuid;

/// A raw filter value, before coercion.
pub type FilterValue = trawl_filters::Scalar;

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Coerce `value` into the SQL value for `field`.
///
/// Text fields accept any value in its textual form. Other types accept
/// their native scalar or a string that parses as that type.
///
/// # Errors
///
/// Returns [`OrmError::TypeMismatch`] when the value cannot represent the
/// field's type.
pub fn coerce_value(field: &FieldDef, value: &FilterValue) -> OrmResult<Value> {
	let mismatch = || OrmError::TypeMismatch {
		field: field.name.clone(),
		expected: field.field_type,
		value: value.to_string(),
	};

	let coerced = match (field.field_type, value) {
		(FieldType::Text, v) => Some(Value::from(v.to_string())),

		(FieldType::Integer, FilterValue::Integer(i)) => i32::try_from(*i).ok().map(Value::from),
		(FieldType::Integer, FilterValue::Text(s)) => s.trim().parse::<i32>().ok().map(Value::from),

		(FieldType::BigInteger, FilterValue::Integer(i)) => Some(Value::from(*i)),
		(FieldType::BigInteger, FilterValue::Text(s)) => {
			s.trim().parse::<i64>().ok().map(Value::from)
		}

		(FieldType::Float, FilterValue::Float(x)) => Some(Value::from(*x)),
		(FieldType::Float, FilterValue::Integer(i)) => Some(Value::from(*i as f64)),
		(FieldType::Float, FilterValue::Text(s)) => s.trim().parse::<f64>().ok().map(Value::from),

		(FieldType::Boolean, FilterValue::Boolean(b)) => Some(Value::from(*b)),
		(FieldType::Boolean, FilterValue::Text(s)) => parse_bool(s).map(Value::from),

		(FieldType::Date, FilterValue::Text(s)) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
			.ok()
			.map(Value::from),
		(FieldType::DateTime, FilterValue::Text(s)) => parse_datetime(s).map(Value::from),

		(FieldType::Uuid, FilterValue::Text(s)) => Uuid::parse_str(s.trim()).ok().map(Value::from),

		_ => None,
	};

	coerced.ok_or_else(mismatch)
}

fn parse_bool(s: &str) -> Option<bool> {
	match s.trim().to_ascii_lowercase().as_str() {
		"true" | "t" | "1" | "yes" => Some(true),
		"false" | "f" | "0" | "no" => Some(false),
		_ => None,
	}
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
	let s = s.trim();
	DATETIME_FORMATS
		.iter()
		.find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
