//! SQL rendering.
//!
//! A backend supplies identifier quoting, the placeholder format and its
//! spelling of the pattern operators; the provided methods of
//! [`QueryBuilder`] do the rest. Values are bound in the same walk that
//! writes their placeholders.

use crate::{
	expr::{Condition, ConditionExpression, ConditionHolder, SimpleExpr},
	query::SelectStatement,
	types::{BinOper, ColumnRef, TableRef},
	value::{Value, Values},
};

mod mysql;
mod postgres;
mod sql_writer;
mod sqlite;

pub use mysql::MySqlQueryBuilder;
pub use postgres::PostgresQueryBuilder;
pub use sql_writer::SqlWriter;
pub use sqlite::SqliteQueryBuilder;

/// Renders statements and conditions for one SQL dialect.
///
/// ```rust
/// use trawl_query::prelude::*;
///
/// let mut stmt = Query::select();
/// stmt.from("jobs")
///     .and_where(Expr::col("status").eq("a").or(Expr::col("status").eq("b")))
///     .and_where(Expr::col("title").ilike("%rust%"));
///
/// let (sql, values) = PostgresQueryBuilder::new().build_select(&stmt);
/// assert_eq!(
///     sql,
///     r#"SELECT * FROM "jobs" WHERE ("status" = $1 OR "status" = $2) AND "title" ILIKE $3"#
/// );
/// assert_eq!(values.len(), 3);
/// ```
pub trait QueryBuilder {
	/// Quote an identifier: `"user"` or `` `user` ``.
	fn escape_identifier(&self, ident: &str) -> String;

	/// The placeholder for the parameter at `index` (1-based).
	fn format_placeholder(&self, index: usize) -> String;

	/// The operator actually emitted for `op`.
	///
	/// Backends without a native `ILIKE` map the case-insensitive pattern
	/// operators onto `LIKE`.
	fn pattern_oper(&self, op: BinOper) -> BinOper {
		op
	}

	/// The character of an `ESCAPE` clause as a string literal.
	fn escape_char_literal(&self, escape: char) -> String {
		if escape == '\'' {
			"''''".to_string()
		} else {
			format!("'{}'", escape)
		}
	}

	fn write_identifier(&self, writer: &mut SqlWriter, ident: &str) {
		writer.push_identifier(ident, |s| self.escape_identifier(s));
	}

	fn write_table_ref(&self, writer: &mut SqlWriter, table: &TableRef) {
		self.write_identifier(writer, table.name());
		if let Some(alias) = table.alias_name() {
			writer.push_keyword("AS");
			writer.push_space();
			self.write_identifier(writer, alias);
		}
	}

	fn write_column_ref(&self, writer: &mut SqlWriter, column: &ColumnRef) {
		if let Some(table) = column.table() {
			self.write_identifier(writer, table);
			writer.push(".");
		}
		self.write_identifier(writer, column.name());
	}

	fn write_value(&self, writer: &mut SqlWriter, value: Value) {
		writer.push_value(value, |i| self.format_placeholder(i));
	}

	fn write_simple_expr(&self, writer: &mut SqlWriter, expr: &SimpleExpr) {
		match expr {
			SimpleExpr::Column(column) => self.write_column_ref(writer, column),
			SimpleExpr::Value(value) => self.write_value(writer, value.clone()),
			SimpleExpr::Binary(left, op, right) => {
				self.write_operand(writer, left);
				writer.push_space();
				writer.push(self.pattern_oper(*op).as_str());
				writer.push_space();
				self.write_operand(writer, right);
			}
			SimpleExpr::Tuple(items) => {
				writer.push("(");
				writer.push_list(items, ", ", |w, item| self.write_simple_expr(w, item));
				writer.push(")");
			}
			SimpleExpr::Escape(pattern, escape) => {
				self.write_simple_expr(writer, pattern);
				writer.push_keyword("ESCAPE");
				writer.push_space();
				writer.push(&self.escape_char_literal(*escape));
			}
		}
	}

	/// Write `expr`, parenthesized if it is an AND/OR expression.
	fn write_operand(&self, writer: &mut SqlWriter, expr: &SimpleExpr) {
		if expr.is_logical() {
			writer.push("(");
			self.write_simple_expr(writer, expr);
			writer.push(")");
		} else {
			self.write_simple_expr(writer, expr);
		}
	}

	/// Write a group.
	///
	/// A group of one member renders as that member; longer groups are
	/// parenthesized. `delimit` is set when the output sits beside a sibling
	/// predicate or under `NOT`, and forces a bare AND/OR member into
	/// parentheses.
	fn write_condition(&self, writer: &mut SqlWriter, condition: &Condition, delimit: bool) {
		if condition.is_negated() {
			writer.push("NOT ");
		}
		let delimit = delimit || condition.is_negated();

		match condition.members() {
			[] => {}
			[only] => self.write_condition_expr(writer, only, delimit),
			members => {
				writer.push("(");
				writer.push_list(members, condition.kind().separator(), |w, member| {
					self.write_condition_expr(w, member, true);
				});
				writer.push(")");
			}
		}
	}

	fn write_condition_expr(
		&self,
		writer: &mut SqlWriter,
		member: &ConditionExpression,
		delimit: bool,
	) {
		match member {
			ConditionExpression::Condition(cond) => self.write_condition(writer, cond, delimit),
			ConditionExpression::SimpleExpr(expr) if delimit => self.write_operand(writer, expr),
			ConditionExpression::SimpleExpr(expr) => self.write_simple_expr(writer, expr),
		}
	}

	/// Write the members of `holder` joined with AND.
	fn write_condition_holder(&self, writer: &mut SqlWriter, holder: &ConditionHolder) {
		let delimit = holder.len() > 1;
		writer.push_list(holder, " AND ", |w, member| {
			self.write_condition_expr(w, member, delimit);
		});
	}

	/// Render the body of a WHERE clause, without the keyword.
	///
	/// An empty holder renders as an empty string.
	fn build_condition(&self, holder: &ConditionHolder) -> (String, Values) {
		let mut writer = SqlWriter::new();
		self.write_condition_holder(&mut writer, holder);
		writer.finish()
	}

	fn build_select(&self, stmt: &SelectStatement) -> (String, Values) {
		let mut writer = SqlWriter::new();
		writer.push("SELECT *");

		if let Some(table) = &stmt.from {
			writer.push_keyword("FROM");
			writer.push_space();
			self.write_table_ref(&mut writer, table);
		}

		if !stmt.r#where.is_empty() {
			writer.push_keyword("WHERE");
			writer.push_space();
			self.write_condition_holder(&mut writer, &stmt.r#where);
		}

		for (keyword, count) in [("LIMIT", stmt.limit), ("OFFSET", stmt.offset)] {
			if let Some(count) = count {
				writer.push_keyword(keyword);
				writer.push_space();
				let count = i64::try_from(count).unwrap_or(i64::MAX);
				self.write_value(&mut writer, Value::BigInt(count));
			}
		}

		writer.finish()
	}
}
