//! Grouped conditions.
//!
//! A [`Condition`] joins its members with AND or OR and may be negated as a
//! whole. A [`ConditionHolder`] is the list of conditions a statement AND-s
//! together in its WHERE clause. Both drop empty groups on insertion, so a
//! stored member always renders to at least one predicate.

use super::expr::Expr;
use super::simple_expr::SimpleExpr;
use crate::value::Value;

/// How the members of a [`Condition`] are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConditionType {
	/// AND
	#[default]
	All,
	/// OR
	Any,
}

impl ConditionType {
	pub(crate) fn separator(self) -> &'static str {
		match self {
			Self::All => " AND ",
			Self::Any => " OR ",
		}
	}
}

/// One member of a condition: a predicate or a nested group.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionExpression {
	SimpleExpr(SimpleExpr),
	Condition(Condition),
}

impl ConditionExpression {
	pub fn values(&self) -> Vec<&Value> {
		match self {
			Self::SimpleExpr(expr) => expr.values(),
			Self::Condition(cond) => cond.values(),
		}
	}

	fn is_empty_group(&self) -> bool {
		matches!(self, Self::Condition(cond) if cond.is_empty())
	}
}

impl From<SimpleExpr> for ConditionExpression {
	fn from(expr: SimpleExpr) -> Self {
		Self::SimpleExpr(expr)
	}
}

impl From<Expr> for ConditionExpression {
	fn from(expr: Expr) -> Self {
		Self::SimpleExpr(expr.into_simple_expr())
	}
}

impl From<Condition> for ConditionExpression {
	fn from(cond: Condition) -> Self {
		Self::Condition(cond)
	}
}

/// An AND or OR group.
///
/// ```rust
/// use trawl_query::{Condition, ConditionType, Expr, ExprTrait};
///
/// let cond = Condition::any()
///     .add(Expr::col("title").ilike("%rust%"))
///     .add(Expr::col("title").ilike("%sql%"))
///     .add(Condition::all());
/// assert_eq!(cond.kind(), ConditionType::Any);
/// assert_eq!(cond.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Condition {
	kind: ConditionType,
	negated: bool,
	members: Vec<ConditionExpression>,
}

impl Condition {
	pub fn new(kind: ConditionType) -> Self {
		Self {
			kind,
			negated: false,
			members: Vec::new(),
		}
	}

	pub fn all() -> Self {
		Self::new(ConditionType::All)
	}

	pub fn any() -> Self {
		Self::new(ConditionType::Any)
	}

	/// Append a member. An empty group is ignored.
	#[must_use]
	// Builder method, not std::ops::Add
	#[allow(clippy::should_implement_trait)]
	pub fn add<C>(mut self, member: C) -> Self
	where
		C: Into<ConditionExpression>,
	{
		let member = member.into();
		if !member.is_empty_group() {
			self.members.push(member);
		}
		self
	}

	/// Negate the whole group.
	#[must_use]
	// Builder method, not std::ops::Not
	#[allow(clippy::should_implement_trait)]
	pub fn not(mut self) -> Self {
		self.negated = !self.negated;
		self
	}

	pub fn kind(&self) -> ConditionType {
		self.kind
	}

	pub fn is_negated(&self) -> bool {
		self.negated
	}

	pub fn members(&self) -> &[ConditionExpression] {
		&self.members
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn values(&self) -> Vec<&Value> {
		self.members
			.iter()
			.flat_map(ConditionExpression::values)
			.collect()
	}
}

/// The WHERE conditions of a statement, AND-ed in insertion order.
///
/// Each member carries its own bound values, so appending a member appends
/// its values after every value already held.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionHolder {
	members: Vec<ConditionExpression>,
}

impl ConditionHolder {
	pub fn new() -> Self {
		Self::default()
	}

	/// AND a member onto the clause. An empty group is ignored.
	pub fn add_and<C>(&mut self, member: C)
	where
		C: Into<ConditionExpression>,
	{
		let member = member.into();
		if !member.is_empty_group() {
			self.members.push(member);
		}
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, ConditionExpression> {
		self.members.iter()
	}

	/// Every bound value in render order.
	pub fn values(&self) -> Vec<&Value> {
		self.members
			.iter()
			.flat_map(ConditionExpression::values)
			.collect()
	}
}

impl<'a> IntoIterator for &'a ConditionHolder {
	type Item = &'a ConditionExpression;
	type IntoIter = std::slice::Iter<'a, ConditionExpression>;

	fn into_iter(self) -> Self::IntoIter {
		self.members.iter()
	}
}
