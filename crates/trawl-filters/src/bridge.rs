//! Equality delegate bridge.
//!
//! Column resolution and type coercion belong to the host query builder. The
//! bridge asks the host for the equality predicate it would build for a term
//! and takes it apart into an operand and its coerced bound values.

use crate::error::PatternFilterError;
use crate::filter_spec::Term;
use trawl_query::{BinOper, SimpleExpr, Value};

/// Coerced value(s) of a resolved equality predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
	/// From `column = value`
	Single(Value),
	/// From `column IN (values)`, in order
	List(Vec<Value>),
}

impl Bound {
	pub fn len(&self) -> usize {
		match self {
			Self::Single(_) => 1,
			Self::List(values) => values.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn into_values(self) -> Vec<Value> {
		match self {
			Self::Single(value) => vec![value],
			Self::List(values) => values,
		}
	}
}

/// An equality predicate split into its parts.
#[derive(Debug, Clone)]
pub struct ResolvedPredicate {
	/// The resolved left-hand side, normally a column.
	pub operand: SimpleExpr,
	pub bound: Bound,
}

/// Builds equality predicates for field/term pairs.
///
/// This is the host builder's own `field = value` / `field IN (values)`
/// construction. Implementations resolve the field and coerce the term; the
/// pattern pipeline only rewrites the result.
pub trait EqualityDelegate {
	/// The host's error type, returned unchanged by the pattern pipeline.
	type Error;

	/// Extra arguments forwarded untouched to [`build_equality`](Self::build_equality).
	type Extra;

	/// Build `field = term` for a scalar term or `field IN (terms)` for a list.
	fn build_equality(
		&self,
		field: &str,
		term: &Term,
		extra: &Self::Extra,
	) -> Result<SimpleExpr, Self::Error>;

	/// Build the equality predicate and split it into operand and values.
	///
	/// # Errors
	///
	/// Errors of [`build_equality`](Self::build_equality) are returned as they
	/// are. A predicate that is neither `= value` nor `IN (values)` yields
	/// [`PatternFilterError::MalformedPredicate`].
	fn resolve_equality(
		&self,
		field: &str,
		term: &Term,
		extra: &Self::Extra,
	) -> Result<ResolvedPredicate, Self::Error>
	where
		Self::Error: From<PatternFilterError>,
	{
		let expr = self.build_equality(field, term, extra)?;
		Ok(decompose(field, expr)?)
	}
}

/// Split an equality or IN predicate into operand and bound values.
pub fn decompose(field: &str, expr: SimpleExpr) -> Result<ResolvedPredicate, PatternFilterError> {
	let malformed = || PatternFilterError::MalformedPredicate {
		field: field.to_string(),
	};

	let SimpleExpr::Binary(left, op, right) = expr else {
		return Err(malformed());
	};

	let bound = match (op, *right) {
		(BinOper::Equal, SimpleExpr::Value(value)) => Bound::Single(value),
		(BinOper::In, SimpleExpr::Tuple(items)) => Bound::List(
			items
				.into_iter()
				.map(|item| match item {
					SimpleExpr::Value(value) => Ok(value),
					_ => Err(malformed()),
				})
				.collect::<Result<Vec<_>, _>>()?,
		),
		_ => return Err(malformed()),
	};

	Ok(ResolvedPredicate {
		operand: *left,
		bound,
	})
}
