//! Joining the predicates of one field.

use crate::normalize::Mode;
use trawl_query::{Condition, ConditionExpression, SimpleExpr};

/// Combine the predicates of one field according to `mode`.
///
/// No predicates yield `None`. A single predicate is returned bare; several
/// are grouped in a [`Condition`] joined with OR (match-any) or AND (the other
/// modes), which renders in parentheses.
pub fn combine(predicates: Vec<SimpleExpr>, mode: Mode) -> Option<ConditionExpression> {
	let mut predicates = predicates;
	match predicates.len() {
		0 => None,
		1 => predicates.pop().map(ConditionExpression::SimpleExpr),
		_ => {
			let group = predicates
				.into_iter()
				.fold(Condition::new(mode.combine_type()), Condition::add);
			Some(ConditionExpression::Condition(group))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use trawl_query::{ConditionType, Expr, ExprTrait};

	fn preds(n: usize) -> Vec<SimpleExpr> {
		(0..n)
			.map(|i| Expr::col("title").ilike(format!("%{}%", i)))
			.collect()
	}

	#[rstest]
	fn test_no_predicates() {
		assert!(combine(Vec::new(), Mode::MatchAny).is_none());
	}

	#[rstest]
	#[case::any(Mode::MatchAny)]
	#[case::exclude(Mode::ExcludeAll)]
	fn test_single_predicate_not_grouped(#[case] mode: Mode) {
		assert!(matches!(
			combine(preds(1), mode),
			Some(ConditionExpression::SimpleExpr(_))
		));
	}

	#[rstest]
	#[case::any(Mode::MatchAny, ConditionType::Any)]
	#[case::all(Mode::MatchAllIndependently, ConditionType::All)]
	#[case::exclude(Mode::ExcludeAll, ConditionType::All)]
	fn test_many_predicates_grouped(#[case] mode: Mode, #[case] expected: ConditionType) {
		match combine(preds(3), mode) {
			Some(ConditionExpression::Condition(group)) => {
				assert_eq!(group.kind(), expected);
				assert_eq!(group.len(), 3);
				assert!(!group.is_negated());
			}
			other => panic!("Expected group, got {:?}", other),
		}
	}
}
