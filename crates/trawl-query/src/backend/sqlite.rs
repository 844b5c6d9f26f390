//! SQLite.

use super::QueryBuilder;
use crate::types::BinOper;

/// `"quoted"` identifiers and `?` placeholders.
///
/// SQLite's `LIKE` already ignores ASCII case, so `ILIKE` renders as `LIKE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteQueryBuilder;

impl SqliteQueryBuilder {
	pub fn new() -> Self {
		Self
	}
}

impl QueryBuilder for SqliteQueryBuilder {
	fn escape_identifier(&self, ident: &str) -> String {
		format!("\"{}\"", ident.replace('"', "\"\""))
	}

	fn format_placeholder(&self, _index: usize) -> String {
		"?".to_string()
	}

	fn pattern_oper(&self, op: BinOper) -> BinOper {
		op.case_sensitive()
	}
}
