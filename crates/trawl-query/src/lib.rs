//! # trawl-query
//!
//! WHERE-clause expressions for the trawl filtering layer.
//!
//! Predicates are built as a tree ([`SimpleExpr`], [`Condition`]) that owns its
//! bound values, and rendered into parameterized SQL for PostgreSQL, MySQL and
//! SQLite. Placeholders and parameters come out of one left-to-right walk, so
//! they cannot drift apart.
//!
//! - [`value`]: bound values
//! - [`types`]: column and table references, operators
//! - [`expr`]: expressions and condition groups
//! - [`query`]: [`SelectStatement`]
//! - [`backend`]: [`PostgresQueryBuilder`], [`MySqlQueryBuilder`],
//!   [`SqliteQueryBuilder`]
//!
//! ```rust
//! use trawl_query::prelude::*;
//!
//! let mut stmt = Query::select();
//! stmt.from("jobs")
//!     .and_where(Condition::any()
//!         .add(Expr::col("title").ilike("%rust%"))
//!         .add(Expr::col("title").ilike("%sql%")))
//!     .limit(10);
//!
//! let (sql, values) = PostgresQueryBuilder::new().build_select(&stmt);
//! assert_eq!(
//!     sql,
//!     r#"SELECT * FROM "jobs" WHERE ("title" ILIKE $1 OR "title" ILIKE $2) LIMIT $3"#
//! );
//! assert_eq!(values.len(), 3);
//! ```
//!
//! | | PostgreSQL | MySQL | SQLite |
//! |---|-----------|-------|--------|
//! | Identifiers | `"name"` | `` `name` `` | `"name"` |
//! | Placeholders | `$1, $2, ...` | `?, ?, ...` | `?, ?, ...` |
//! | `ILIKE` | native | rendered as `LIKE` | rendered as `LIKE` |

pub mod backend;
pub mod expr;
pub mod query;
pub mod types;
pub mod value;

pub mod prelude {
	pub use crate::backend::{
		MySqlQueryBuilder, PostgresQueryBuilder, QueryBuilder, SqlWriter, SqliteQueryBuilder,
	};
	pub use crate::expr::{
		Condition, ConditionExpression, ConditionHolder, ConditionType, Expr, ExprTrait,
		SimpleExpr,
	};
	pub use crate::query::{Query, SelectStatement};
	pub use crate::types::{BinOper, ColumnRef, IntoColumnRef, IntoTableRef, TableRef};
	pub use crate::value::{Value, Values};
}

pub use prelude::*;
