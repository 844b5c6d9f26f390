//! Operators shared by [`Expr`] and [`SimpleExpr`].

use super::expr::Expr;
use super::simple_expr::SimpleExpr;
use crate::types::BinOper;

/// Expression operators.
///
/// Every method consumes the left operand and returns the new node.
pub trait ExprTrait: Sized {
	fn into_simple_expr(self) -> SimpleExpr;

	/// `self <op> right`
	fn binary<R>(self, op: BinOper, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		SimpleExpr::Binary(
			Box::new(self.into_simple_expr()),
			op,
			Box::new(right.into()),
		)
	}

	fn eq<R>(self, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::Equal, right)
	}

	fn ne<R>(self, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::NotEqual, right)
	}

	fn gt<R>(self, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::GreaterThan, right)
	}

	/// `self IN (v1, v2, ...)`
	fn is_in<I, V>(self, values: I) -> SimpleExpr
	where
		I: IntoIterator<Item = V>,
		V: Into<SimpleExpr>,
	{
		self.binary(
			BinOper::In,
			SimpleExpr::Tuple(values.into_iter().map(Into::into).collect()),
		)
	}

	fn like<P>(self, pattern: P) -> SimpleExpr
	where
		P: Into<SimpleExpr>,
	{
		self.binary(BinOper::Like, pattern)
	}

	fn not_like<P>(self, pattern: P) -> SimpleExpr
	where
		P: Into<SimpleExpr>,
	{
		self.binary(BinOper::NotLike, pattern)
	}

	fn ilike<P>(self, pattern: P) -> SimpleExpr
	where
		P: Into<SimpleExpr>,
	{
		self.binary(BinOper::ILike, pattern)
	}

	fn not_ilike<P>(self, pattern: P) -> SimpleExpr
	where
		P: Into<SimpleExpr>,
	{
		self.binary(BinOper::NotILike, pattern)
	}

	/// Follow a pattern operand with `ESCAPE 'c'`.
	fn escape(self, escape: char) -> SimpleExpr {
		SimpleExpr::Escape(Box::new(self.into_simple_expr()), escape)
	}

	fn and<R>(self, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::And, right)
	}

	fn or<R>(self, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		self.binary(BinOper::Or, right)
	}
}

impl ExprTrait for SimpleExpr {
	fn into_simple_expr(self) -> SimpleExpr {
		self
	}
}

impl ExprTrait for Expr {
	fn into_simple_expr(self) -> SimpleExpr {
		Expr::into_simple_expr(self)
	}
}
