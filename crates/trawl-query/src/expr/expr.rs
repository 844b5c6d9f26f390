//! Entry points for building expressions.

use super::simple_expr::SimpleExpr;
use crate::types::IntoColumnRef;
use crate::value::Value;

/// Starts an expression from a column or a bound value.
///
/// Operators come from [`ExprTrait`](super::ExprTrait).
///
/// ```rust
/// use trawl_query::{Expr, ExprTrait};
///
/// let expr = Expr::col("salary").gt(50i32).and(Expr::col("remote").eq(true));
/// assert_eq!(expr.values().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Expr(SimpleExpr);

impl Expr {
	pub fn col<C>(col: C) -> Self
	where
		C: IntoColumnRef,
	{
		Self(SimpleExpr::Column(col.into_column_ref()))
	}

	pub fn val<V>(val: V) -> Self
	where
		V: Into<Value>,
	{
		Self(SimpleExpr::Value(val.into()))
	}

	pub fn into_simple_expr(self) -> SimpleExpr {
		self.0
	}
}

impl From<Expr> for SimpleExpr {
	fn from(e: Expr) -> Self {
		e.0
	}
}
