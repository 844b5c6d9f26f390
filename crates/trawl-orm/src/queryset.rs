//! Query sets.
//!
//! A [`QuerySet`] accumulates WHERE conditions for one model and renders them
//! as a SELECT through any backend. It is the host for the pattern filters of
//! `trawl-filters`: it builds the equality predicates the pattern pipeline
//! rewrites and receives the finished conditions.
//!
//! ```rust
//! use trawl_filters::{FilterSpec, PatternFilterExt};
//! use trawl_orm::{FieldType, ModelSchema, QuerySet};
//! use trawl_query::PostgresQueryBuilder;
//!
//! let schema = ModelSchema::new("jobs").field("title", FieldType::Text);
//! let qs = QuerySet::new(schema)
//!     .match_any(FilterSpec::new().field("title", ["Engineer", "Remote"]))
//!     .unwrap();
//!
//! let (sql, values) = qs.build(&PostgresQueryBuilder::new());
//! assert_eq!(
//!     sql,
//!     r#"SELECT * FROM "jobs" WHERE ("title" ILIKE $1 OR "title" ILIKE $2)"#
//! );
//! assert_eq!(values.len(), 2);
//! ```

use crate::equality::{EqualityBuilder, LookupOptions};
use crate::error::{OrmError, OrmResult};
use crate::model::ModelSchema;
use trawl_filters::{ClauseMerge, EqualityDelegate, PatternHost, PatternSettings, Term};
use trawl_query::{
	ConditionExpression, ConditionHolder, Query, QueryBuilder, SelectStatement, SimpleExpr,
	TableRef, Values,
};

#[derive(Debug, Clone)]
pub struct QuerySet {
	schema: ModelSchema,
	alias: Option<String>,
	clause: ConditionHolder,
	settings: PatternSettings,
	limit: Option<u64>,
	offset: Option<u64>,
}

impl QuerySet {
	pub fn new(schema: ModelSchema) -> Self {
		Self {
			schema,
			alias: None,
			clause: ConditionHolder::new(),
			settings: PatternSettings::default(),
			limit: None,
			offset: None,
		}
	}

	/// Replace the pattern filter settings.
	pub fn with_settings(mut self, settings: PatternSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Select `FROM table AS alias`.
	///
	/// Lookups without an explicit table alias are qualified with this one.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.alias = Some(alias.into());
		self
	}

	pub fn schema(&self) -> &ModelSchema {
		&self.schema
	}

	/// Add `field = value`, or `field IN (values)` for a list term.
	///
	/// # Errors
	///
	/// See [`EqualityBuilder::build`].
	pub fn filter(self, field: &str, term: impl Into<Term>) -> OrmResult<Self> {
		self.filter_with(field, term, &LookupOptions::default())
	}

	/// [`filter`](Self::filter) with explicit lookup options.
	pub fn filter_with(
		mut self,
		field: &str,
		term: impl Into<Term>,
		options: &LookupOptions,
	) -> OrmResult<Self> {
		let expr = self.build_equality(field, &term.into(), options)?;
		self.clause.add_and(expr);
		Ok(self)
	}

	/// AND an arbitrary condition onto the WHERE clause.
	pub fn where_cond<C: Into<ConditionExpression>>(mut self, condition: C) -> Self {
		self.clause.add_and(condition);
		self
	}

	pub fn limit(mut self, limit: u64) -> Self {
		self.limit = Some(limit);
		self
	}

	pub fn offset(mut self, offset: u64) -> Self {
		self.offset = Some(offset);
		self
	}

	/// The accumulated WHERE conditions.
	pub fn condition(&self) -> &ConditionHolder {
		&self.clause
	}

	/// The SELECT this query set stands for.
	pub fn select_statement(&self) -> SelectStatement {
		let mut stmt = Query::select();
		match &self.alias {
			Some(alias) => stmt.from(TableRef::alias(
				self.schema.table().to_string(),
				alias.clone(),
			)),
			None => stmt.from(self.schema.table().to_string()),
		};
		for condition in &self.clause {
			stmt.and_where(condition.clone());
		}
		if let Some(limit) = self.limit {
			stmt.limit(limit);
		}
		if let Some(offset) = self.offset {
			stmt.offset(offset);
		}
		stmt
	}

	/// Render the SELECT and its bound values.
	pub fn build<B>(&self, builder: &B) -> (String, Values)
	where
		B: QueryBuilder + ?Sized,
	{
		builder.build_select(&self.select_statement())
	}

	/// Render the SELECT only.
	pub fn to_sql<B>(&self, builder: &B) -> String
	where
		B: QueryBuilder + ?Sized,
	{
		self.build(builder).0
	}
}

impl EqualityDelegate for QuerySet {
	type Error = OrmError;
	type Extra = LookupOptions;

	fn build_equality(
		&self,
		field: &str,
		term: &Term,
		extra: &LookupOptions,
	) -> OrmResult<SimpleExpr> {
		let builder = EqualityBuilder::new(&self.schema);
		match (&extra.table_alias, &self.alias) {
			(None, Some(alias)) => builder.build(field, term, &LookupOptions::with_alias(alias.clone())),
			_ => builder.build(field, term, extra),
		}
	}
}

impl ClauseMerge for QuerySet {
	fn merge_condition(&mut self, condition: ConditionExpression) {
		self.clause.merge_condition(condition);
	}
}

impl PatternHost for QuerySet {
	fn settings(&self) -> &PatternSettings {
		&self.settings
	}
}
