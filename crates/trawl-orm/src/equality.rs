//! Equality and IN predicates over model fields.

use crate::coercion::coerce_value;
use crate::error::{OrmError, OrmResult};
use crate::model::ModelSchema;
use trawl_filters::Term;
use trawl_query::{ColumnRef, Expr, ExprTrait, SimpleExpr};

/// Extra lookup arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupOptions {
	/// Qualify columns with this table alias.
	pub table_alias: Option<String>,
}

impl LookupOptions {
	pub fn with_alias(alias: impl Into<String>) -> Self {
		Self {
			table_alias: Some(alias.into()),
		}
	}
}

/// Builds `column = value` and `column IN (values)` for a schema.
#[derive(Debug, Clone, Copy)]
pub struct EqualityBuilder<'a> {
	schema: &'a ModelSchema,
}

impl<'a> EqualityBuilder<'a> {
	pub fn new(schema: &'a ModelSchema) -> Self {
		Self { schema }
	}

	/// Build the predicate for `field` and `term`.
	///
	/// A scalar term gives `column = value`; a list gives
	/// `column IN (values)` with nested lists flattened in order. Every value
	/// is coerced to the field's type.
	///
	/// ```rust
	/// use trawl_orm::{EqualityBuilder, FieldType, LookupOptions, ModelSchema};
	/// use trawl_query::{PostgresQueryBuilder, QueryBuilder, Query};
	///
	/// let schema = ModelSchema::new("jobs").field("salary", FieldType::Integer);
	/// let expr = EqualityBuilder::new(&schema)
	///     .build("salary", &vec!["100", "200"].into(), &LookupOptions::with_alias("j"))
	///     .unwrap();
	///
	/// let mut stmt = Query::select();
	/// stmt.and_where(expr);
	/// let (sql, values) = PostgresQueryBuilder::new().build_condition(stmt.where_condition());
	/// assert_eq!(sql, r#""j"."salary" IN ($1, $2)"#);
	/// assert_eq!(values.len(), 2);
	/// ```
	///
	/// # Errors
	///
	/// - [`OrmError::UnknownField`] if the schema has no such field or column
	/// - [`OrmError::TypeMismatch`] if a value cannot be coerced
	/// - [`OrmError::EmptyInList`] for a list without values
	pub fn build(&self, field: &str, term: &Term, options: &LookupOptions) -> OrmResult<SimpleExpr> {
		let def = self
			.schema
			.resolve(field)
			.ok_or_else(|| OrmError::UnknownField {
				model: self.schema.table().to_string(),
				field: field.to_string(),
			})?;

		let column = match &options.table_alias {
			Some(alias) => ColumnRef::table_column(alias.clone(), def.column.clone()),
			None => ColumnRef::column(def.column.clone()),
		};

		match term {
			Term::Scalar(scalar) => Ok(Expr::col(column).eq(coerce_value(def, scalar)?)),
			Term::List(_) => {
				let values = term
					.flatten()
					.into_iter()
					.map(|scalar| coerce_value(def, scalar))
					.collect::<OrmResult<Vec<_>>>()?;
				if values.is_empty() {
					return Err(OrmError::EmptyInList {
						field: field.to_string(),
					});
				}
				tracing::trace!(field = %def.name, values = values.len(), "built IN lookup");
				Ok(Expr::col(column).is_in(values))
			}
		}
	}
}
