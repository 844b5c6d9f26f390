//! PostgreSQL.

use super::QueryBuilder;

/// `"quoted"` identifiers, `$n` placeholders and native `ILIKE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresQueryBuilder;

impl PostgresQueryBuilder {
	pub fn new() -> Self {
		Self
	}
}

impl QueryBuilder for PostgresQueryBuilder {
	fn escape_identifier(&self, ident: &str) -> String {
		format!("\"{}\"", ident.replace('"', "\"\""))
	}

	fn format_placeholder(&self, index: usize) -> String {
		format!("${}", index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		expr::{Condition, Expr, ExprTrait},
		query::Query,
		types::TableRef,
		value::Value,
	};
	use rstest::rstest;

	#[rstest]
	fn test_escape_identifier() {
		let builder = PostgresQueryBuilder::new();
		assert_eq!(builder.escape_identifier("user"), "\"user\"");
		assert_eq!(builder.escape_identifier("user\"name"), "\"user\"\"name\"");
	}

	#[rstest]
	#[case(1, "$1")]
	#[case(2, "$2")]
	#[case(10, "$10")]
	fn test_format_placeholder(#[case] index: usize, #[case] expected: &str) {
		assert_eq!(PostgresQueryBuilder::new().format_placeholder(index), expected);
	}

	#[rstest]
	fn test_select_alias_with_limit_offset() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::select();
		stmt.from(TableRef::alias("jobs", "j")).limit(10).offset(20);

		let (sql, values) = builder.build_select(&stmt);
		assert_eq!(sql, r#"SELECT * FROM "jobs" AS "j" LIMIT $1 OFFSET $2"#);
		assert_eq!(values.as_slice(), &[Value::BigInt(10), Value::BigInt(20)]);
	}

	#[rstest]
	fn test_or_group_inside_and() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::select();
		stmt.from("jobs")
			.and_where(Expr::col("remote").eq(true))
			.and_where(
				Condition::any()
					.add(Expr::col("title").ilike("%rust%"))
					.add(Expr::col("title").ilike("%sql%")),
			);

		let (sql, values) = builder.build_select(&stmt);
		assert_eq!(
			sql,
			r#"SELECT * FROM "jobs" WHERE "remote" = $1 AND ("title" ILIKE $2 OR "title" ILIKE $3)"#
		);
		assert_eq!(values.as_slice()[2], Value::from("%sql%"));
	}

	#[rstest]
	#[case::single_member(
		Condition::all().add(Expr::col("title").not_ilike("%spam%")),
		r#""title" NOT ILIKE $1"#
	)]
	#[case::bare_or_alone(
		Condition::all().add(Expr::col("a").eq(1i32).or(Expr::col("b").eq(2i32))),
		r#""a" = $1 OR "b" = $2"#
	)]
	#[case::negated_or(
		Condition::all().add(Expr::col("a").eq(1i32).or(Expr::col("b").eq(2i32))).not(),
		r#"NOT ("a" = $1 OR "b" = $2)"#
	)]
	#[case::or_inside_and_group(
		Condition::all()
			.add(Expr::col("a").eq(1i32).or(Expr::col("b").eq(2i32)))
			.add(Expr::col("c").eq(3i32)),
		r#"(("a" = $1 OR "b" = $2) AND "c" = $3)"#
	)]
	#[case::negated_group(
		Condition::any()
			.add(Expr::col("a").eq(1i32))
			.add(Expr::col("b").eq(2i32))
			.not(),
		r#"NOT ("a" = $1 OR "b" = $2)"#
	)]
	fn test_condition_rendering(#[case] condition: Condition, #[case] expected: &str) {
		let mut stmt = Query::select();
		stmt.and_where(condition);

		let (sql, _) = PostgresQueryBuilder::new().build_condition(stmt.where_condition());
		assert_eq!(sql, expected);
	}

	#[rstest]
	fn test_logical_members_keep_precedence() {
		let mut stmt = Query::select();
		stmt.from("jobs")
			.and_where(Expr::col("status").eq("a").or(Expr::col("status").eq("b")))
			.and_where(Condition::all())
			.and_where(Condition::all().add(Expr::col("x").eq(1i32).and(Expr::col("y").eq(2i32))))
			.and_where(Expr::col("title").ilike("%rust%"));

		let (sql, values) = PostgresQueryBuilder::new().build_select(&stmt);
		assert_eq!(
			sql,
			r#"SELECT * FROM "jobs" WHERE ("status" = $1 OR "status" = $2) AND ("x" = $3 AND "y" = $4) AND "title" ILIKE $5"#
		);
		assert_eq!(values.len(), 5);
	}

	#[rstest]
	fn test_escape_clause() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::select();
		stmt.from("jobs")
			.and_where(Expr::col("title").ilike(Expr::val("%50\\%%").escape('\\')));

		let (sql, _) = builder.build_select(&stmt);
		assert_eq!(sql, r#"SELECT * FROM "jobs" WHERE "title" ILIKE $1 ESCAPE '\'"#);
	}

	#[rstest]
	fn test_in_list() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::select();
		stmt.from("jobs")
			.and_where(Expr::col("id").is_in([1i32, 2i32]))
			.and_where(Expr::col("status").ne("closed"));

		let (sql, values) = builder.build_select(&stmt);
		assert_eq!(
			sql,
			r#"SELECT * FROM "jobs" WHERE "id" IN ($1, $2) AND "status" <> $3"#
		);
		assert_eq!(values.len(), 3);
	}

	#[rstest]
	fn test_build_condition_without_keyword() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::select();
		stmt.and_where(Expr::col(("j", "title")).eq("x"));

		let (sql, values) = builder.build_condition(stmt.where_condition());
		assert_eq!(sql, r#""j"."title" = $1"#);
		assert_eq!(values.len(), 1);
	}
}
