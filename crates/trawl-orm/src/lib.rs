//! # trawl-orm
//!
//! A small model layer on top of `trawl-query`.
//!
//! A [`ModelSchema`] declares the filterable fields of a table and their
//! types. A [`QuerySet`] resolves field names against the schema, coerces
//! filter values to the field types and accumulates WHERE conditions. It
//! implements [`PatternHost`](trawl_filters::PatternHost), so the pattern
//! filters of `trawl-filters` chain directly on it:
//!
//! ```rust
//! use trawl_filters::{FilterSpec, PatternFilterExt};
//! use trawl_orm::{FieldType, ModelSchema, QuerySet};
//! use trawl_query::MySqlQueryBuilder;
//!
//! let schema = ModelSchema::new("jobs")
//!     .field("title", FieldType::Text)
//!     .field("location", FieldType::Text);
//!
//! let qs = QuerySet::new(schema)
//!     .match_all_independently(FilterSpec::new().field("title", ["senior", "rust"]))
//!     .unwrap()
//!     .exclude_all(FilterSpec::new().field("location", "onsite"))
//!     .unwrap();
//!
//! assert_eq!(
//!     qs.to_sql(&MySqlQueryBuilder::new()),
//!     "SELECT * FROM `jobs` WHERE (`title` LIKE ? AND `title` LIKE ?) AND `location` NOT LIKE ?"
//! );
//! ```

pub mod coercion;
pub mod equality;
pub mod error;
pub mod model;
pub mod queryset;

pub use coercion::{FilterValue, coerce_value};
pub use equality::{EqualityBuilder, LookupOptions};
pub use error::{OrmError, OrmResult};
pub use model::{FieldDef, FieldType, ModelSchema};
pub use queryset::QuerySet;
