//! The expression tree.
//!
//! Bound values live inside [`SimpleExpr::Value`] nodes, so a tree carries its
//! own parameters and renders them in left-to-right order.

use crate::types::{BinOper, ColumnRef};
use crate::value::Value;

/// A predicate or one of its operands.
///
/// ```rust
/// use trawl_query::{BinOper, ColumnRef, SimpleExpr, Value};
///
/// let eq = SimpleExpr::Binary(
///     Box::new(SimpleExpr::Column(ColumnRef::column("salary"))),
///     BinOper::Equal,
///     Box::new(SimpleExpr::Value(Value::Int(100))),
/// );
/// assert_eq!(eq.values(), vec![&Value::Int(100)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SimpleExpr {
	Column(ColumnRef),

	/// Rendered as a placeholder.
	Value(Value),

	Binary(Box<SimpleExpr>, BinOper, Box<SimpleExpr>),

	/// `(a, b, c)`, the right-hand side of `IN`
	Tuple(Vec<SimpleExpr>),

	/// A pattern followed by `ESCAPE 'c'`
	Escape(Box<SimpleExpr>, char),
}

impl SimpleExpr {
	/// The bound values of this tree in render order.
	pub fn values(&self) -> Vec<&Value> {
		let mut out = Vec::new();
		self.collect_values(&mut out);
		out
	}

	fn collect_values<'a>(&'a self, out: &mut Vec<&'a Value>) {
		match self {
			Self::Column(_) => {}
			Self::Value(v) => out.push(v),
			Self::Escape(inner, _) => inner.collect_values(out),
			Self::Binary(left, _, right) => {
				left.collect_values(out);
				right.collect_values(out);
			}
			Self::Tuple(items) => items.iter().for_each(|item| item.collect_values(out)),
		}
	}

	/// True for an AND/OR expression, which must be parenthesized when it
	/// sits beside another predicate.
	pub fn is_logical(&self) -> bool {
		matches!(self, Self::Binary(_, op, _) if op.is_logical())
	}
}

impl From<Value> for SimpleExpr {
	fn from(v: Value) -> Self {
		Self::Value(v)
	}
}

impl From<ColumnRef> for SimpleExpr {
	fn from(c: ColumnRef) -> Self {
		Self::Column(c)
	}
}

macro_rules! value_operand {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for SimpleExpr {
				fn from(v: $ty) -> Self {
					Self::Value(Value::from(v))
				}
			}
		)*
	};
}

value_operand!(bool, i32, i64, f64, &str, String);
