//! SELECT statements.

use crate::{
	expr::{ConditionExpression, ConditionHolder},
	types::{IntoTableRef, TableRef},
};

/// `SELECT * FROM table [WHERE ...] [LIMIT n] [OFFSET m]`
///
/// Conditions added through [`and_where`](Self::and_where) are AND-ed in the
/// order they were added.
///
/// ```rust
/// use trawl_query::prelude::*;
///
/// let mut stmt = Query::select();
/// stmt.from("jobs")
///     .and_where(Expr::col("remote").eq(true))
///     .limit(10);
/// assert_eq!(stmt.where_condition().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectStatement {
	pub(crate) from: Option<TableRef>,
	pub(crate) r#where: ConditionHolder,
	pub(crate) limit: Option<u64>,
	pub(crate) offset: Option<u64>,
}

impl SelectStatement {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the table to select from, replacing any earlier one.
	pub fn from<T>(&mut self, tbl: T) -> &mut Self
	where
		T: IntoTableRef,
	{
		self.from = Some(tbl.into_table_ref());
		self
	}

	pub fn and_where<C>(&mut self, condition: C) -> &mut Self
	where
		C: Into<ConditionExpression>,
	{
		self.r#where.add_and(condition);
		self
	}

	pub fn limit(&mut self, limit: u64) -> &mut Self {
		self.limit = Some(limit);
		self
	}

	pub fn offset(&mut self, offset: u64) -> &mut Self {
		self.offset = Some(offset);
		self
	}

	pub fn where_condition(&self) -> &ConditionHolder {
		&self.r#where
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expr::{Condition, Expr, ExprTrait};
	use crate::value::Value;
	use rstest::rstest;

	#[rstest]
	fn test_from_replaces_table() {
		let mut stmt = SelectStatement::new();
		stmt.from("jobs").from(TableRef::alias("jobs", "j")).limit(5);

		assert_eq!(stmt.from, Some(TableRef::alias("jobs", "j")));
		assert_eq!(stmt.limit, Some(5));
		assert!(stmt.where_condition().is_empty());
	}

	#[rstest]
	fn test_where_accumulates_in_order() {
		let mut stmt = SelectStatement::new();
		stmt.and_where(Expr::col("a").eq("x"))
			.and_where(Condition::any().add(Expr::col("b").eq("y")).add(Expr::col("c").eq("z")))
			.and_where(Condition::all());

		let values: Vec<_> = stmt
			.where_condition()
			.values()
			.into_iter()
			.filter_map(Value::as_str)
			.collect();
		assert_eq!(stmt.where_condition().len(), 2);
		assert_eq!(values, vec!["x", "y", "z"]);
	}
}
