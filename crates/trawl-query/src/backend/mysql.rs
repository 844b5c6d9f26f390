//! MySQL.

use super::QueryBuilder;
use crate::types::BinOper;

/// `` `quoted` `` identifiers and `?` placeholders.
///
/// MySQL has no `ILIKE`; pattern operators render as `LIKE` and case
/// folding comes from the column collation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlQueryBuilder;

impl MySqlQueryBuilder {
	pub fn new() -> Self {
		Self
	}
}

impl QueryBuilder for MySqlQueryBuilder {
	fn escape_identifier(&self, ident: &str) -> String {
		format!("`{}`", ident.replace('`', "``"))
	}

	fn format_placeholder(&self, _index: usize) -> String {
		"?".to_string()
	}

	fn pattern_oper(&self, op: BinOper) -> BinOper {
		op.case_sensitive()
	}

	fn escape_char_literal(&self, escape: char) -> String {
		// Backslash escapes inside MySQL string literals too.
		match escape {
			'\\' => "'\\\\'".to_string(),
			'\'' => "''''".to_string(),
			c => format!("'{}'", c),
		}
	}
}
