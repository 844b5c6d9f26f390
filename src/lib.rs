//! # trawl
//!
//! Pattern-match ("contains") filtering for a relational query builder.
//!
//! A filter spec maps field names to search terms. Each term becomes a
//! parameterized `ILIKE '%term%'` predicate, grouped per field and AND-ed
//! onto the query's WHERE clause:
//!
//! - `match_any`: a row matches if any term of a field matches
//! - `match_all_independently`: every term of a field must match
//! - `exclude_all`: no term of a field may match
//!
//! ## Feature Flags
//!
//! - `filters` - The pattern filter pipeline ([`filters`])
//! - `orm` - Model schemas and query sets hosting the filters ([`orm`])
//! - `with-chrono`, `with-uuid` - Date/time and UUID values
//! - `full` (default) - All of the above
//!
//! The query builder ([`query`]) is always available.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "orm")]
//! # fn main() -> Result<(), trawl::orm::OrmError> {
//! use trawl::filters::{FilterSpec, PatternFilterExt};
//! use trawl::orm::{FieldType, ModelSchema, QuerySet};
//! use trawl::query::PostgresQueryBuilder;
//!
//! let schema = ModelSchema::new("jobs")
//!     .field("title", FieldType::Text)
//!     .field("status", FieldType::Text);
//!
//! let qs = QuerySet::new(schema)
//!     .match_any(FilterSpec::new().field("title", ["Engineer", "Remote"]))?
//!     .exclude_all(FilterSpec::new().field("status", "closed"))?;
//!
//! let (sql, values) = qs.build(&PostgresQueryBuilder::new());
//! assert_eq!(
//!     sql,
//!     r#"SELECT * FROM "jobs" WHERE ("title" ILIKE $1 OR "title" ILIKE $2) AND "status" NOT ILIKE $3"#
//! );
//! assert_eq!(values.len(), 3);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "orm"))]
//! # fn main() {}
//! ```

pub use trawl_query as query;

#[cfg(feature = "filters")]
pub use trawl_filters as filters;

#[cfg(feature = "orm")]
pub use trawl_orm as orm;

// Commonly used types at crate root
pub use trawl_query::{
	Condition, Expr, ExprTrait, MySqlQueryBuilder, PostgresQueryBuilder, Query, QueryBuilder,
	SqliteQueryBuilder, Value, Values,
};

#[cfg(feature = "filters")]
pub use trawl_filters::{
	FilterSpec, MergePolicy, Mode, PatternFilterError, PatternFilterExt, PatternHost,
	PatternSettings, Term, WildcardPolicy,
};

#[cfg(feature = "orm")]
pub use trawl_orm::{FieldType, LookupOptions, ModelSchema, OrmError, QuerySet};
