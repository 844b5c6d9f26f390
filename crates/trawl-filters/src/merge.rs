//! Merging translated predicates into the host's running clause.

use trawl_query::{ConditionExpression, ConditionHolder};

/// The host's accumulated WHERE conditions.
///
/// Merged conditions are AND-ed with everything merged before them. Bound
/// values travel inside the condition, so a merge appends the condition's
/// values after the values already present.
pub trait ClauseMerge {
	fn merge_condition(&mut self, condition: ConditionExpression);
}

impl ClauseMerge for ConditionHolder {
	fn merge_condition(&mut self, condition: ConditionExpression) {
		self.add_and(condition);
	}
}

/// Translated field predicates waiting to be merged.
///
/// Used by the atomic merge policy: nothing reaches the host until every
/// field has translated.
#[derive(Debug, Default)]
pub(crate) struct PendingClause {
	conditions: Vec<ConditionExpression>,
}

impl PendingClause {
	pub(crate) fn push(&mut self, condition: ConditionExpression) {
		self.conditions.push(condition);
	}

	/// Merge everything into `target`, returning the number of conditions merged.
	pub(crate) fn commit<M: ClauseMerge + ?Sized>(self, target: &mut M) -> usize {
		let count = self.conditions.len();
		for condition in self.conditions {
			target.merge_condition(condition);
		}
		count
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use trawl_query::{Expr, ExprTrait, Value};

	#[rstest]
	fn test_holder_merge_appends_after_existing() {
		let mut holder = ConditionHolder::new();
		holder.add_and(Expr::col("a").eq("first"));

		holder.merge_condition(Expr::col("b").ilike("%second%").into());

		let values: Vec<_> = holder.values().into_iter().filter_map(Value::as_str).collect();
		assert_eq!(values, vec!["first", "%second%"]);
	}

	#[rstest]
	fn test_pending_commit_preserves_order() {
		let mut pending = PendingClause::default();
		pending.push(Expr::col("a").eq("1").into());
		pending.push(Expr::col("b").eq("2").into());

		let mut holder = ConditionHolder::new();
		assert_eq!(pending.commit(&mut holder), 2);

		let values: Vec<_> = holder.values().into_iter().filter_map(Value::as_str).collect();
		assert_eq!(values, vec!["1", "2"]);
	}
}
