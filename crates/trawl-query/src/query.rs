//! Statement builders.
//!
//! ```rust
//! use trawl_query::prelude::*;
//!
//! let mut stmt = Query::select();
//! stmt.from("jobs").and_where(Expr::col("title").ilike("%rust%"));
//!
//! let (sql, values) = PostgresQueryBuilder::new().build_select(&stmt);
//! assert_eq!(sql, r#"SELECT * FROM "jobs" WHERE "title" ILIKE $1"#);
//! assert_eq!(values.len(), 1);
//! ```

mod select;

pub use select::SelectStatement;

#[derive(Debug, Clone, Copy)]
pub struct Query;

impl Query {
	pub fn select() -> SelectStatement {
		SelectStatement::new()
	}
}
