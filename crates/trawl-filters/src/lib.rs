//! # trawl-filters
//!
//! Pattern-match ("contains", case-insensitive) filters for a query builder.
//!
//! A [`FilterSpec`] maps field names to one or more search terms. The
//! translation functions turn it into `ILIKE` predicates and merge them into
//! the host builder's running WHERE clause:
//!
//! | Mode | Within a field | Across fields |
//! |------|----------------|---------------|
//! | [`match_any`] | `OR` of `ILIKE` | `AND` |
//! | [`match_all_independently`] | `AND` of `ILIKE` | `AND` |
//! | [`exclude_all`] | `AND` of `NOT ILIKE` | `AND` |
//!
//! Terms are wrapped as `%term%` and stay bound parameters. Column resolution
//! and value coercion are left to the host through [`EqualityDelegate`]; the
//! host receives the finished conditions through [`ClauseMerge`].
//!
//! ## Pipeline
//!
//! 1. [`normalize`]: empty lists become the empty-string sentinel, terms get
//!    wildcards.
//! 2. [`EqualityDelegate::resolve_equality`]: the host builds `field = term`
//!    or `field IN (terms)`; the result is split into operand and values.
//! 3. [`pattern::construct`]: one [`PatternNode`] per bound value.
//! 4. [`combinator::combine`]: the nodes of one field are grouped.
//! 5. [`ClauseMerge::merge_condition`]: each field's group is AND-ed onto the
//!    running clause, atomically by default (see [`MergePolicy`]).

pub mod bridge;
pub mod combinator;
pub mod error;
pub mod filter_spec;
pub mod merge;
pub mod normalize;
pub mod pattern;
pub mod settings;
pub mod translate;

pub use bridge::{Bound, EqualityDelegate, ResolvedPredicate};
pub use error::{ConfigError, PatternFilterError, PatternFilterResult};
pub use filter_spec::{FilterSpec, Scalar, Term, parse_search_terms};
pub use merge::ClauseMerge;
pub use normalize::{Mode, NormalizedField, NormalizedSpec, normalize};
pub use pattern::{PatternNode, Polarity};
pub use settings::{MergePolicy, PatternSettings, WildcardPolicy};
pub use translate::{
	PatternFilterExt, PatternHost, apply, exclude_all, match_all_independently, match_any,
};
