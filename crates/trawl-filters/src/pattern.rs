//! Pattern predicate construction.

use crate::bridge::{Bound, ResolvedPredicate};
use crate::settings::PatternSettings;
use trawl_query::{BinOper, Expr, ExprTrait, SimpleExpr, Value};

/// Whether a predicate matches or excludes its pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
	Matches,
	NotMatches,
}

impl Polarity {
	/// The pattern operator for this polarity.
	pub fn operator(self, case_sensitive: bool) -> BinOper {
		match (self, case_sensitive) {
			(Self::Matches, false) => BinOper::ILike,
			(Self::NotMatches, false) => BinOper::NotILike,
			(Self::Matches, true) => BinOper::Like,
			(Self::NotMatches, true) => BinOper::NotLike,
		}
	}
}

/// One pattern predicate: `operand [NOT] ILIKE value`.
#[derive(Debug, Clone)]
pub struct PatternNode {
	pub polarity: Polarity,
	pub operand: SimpleExpr,
	pub value: Value,
}

impl PatternNode {
	/// Render into an expression.
	///
	/// With wildcard escaping enabled the value carries an `ESCAPE` clause.
	pub fn into_expr(self, settings: &PatternSettings) -> SimpleExpr {
		let op = self.polarity.operator(settings.case_sensitive);
		let pattern = if settings.escapes_wildcards() {
			Expr::val(self.value).escape(settings.escape_char)
		} else {
			SimpleExpr::Value(self.value)
		};
		self.operand.binary(op, pattern)
	}
}

/// Build one [`PatternNode`] per bound value, sharing the operand.
pub fn construct(resolved: ResolvedPredicate, polarity: Polarity) -> Vec<PatternNode> {
	let ResolvedPredicate { operand, bound } = resolved;
	match bound {
		Bound::Single(value) => vec![PatternNode {
			polarity,
			operand,
			value,
		}],
		Bound::List(values) => values
			.into_iter()
			.map(|value| PatternNode {
				polarity,
				operand: operand.clone(),
				value,
			})
			.collect(),
	}
}
