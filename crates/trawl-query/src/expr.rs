//! WHERE-clause expressions.
//!
//! - [`SimpleExpr`]: a single predicate or operand
//! - [`Expr`] and [`ExprTrait`]: builders for [`SimpleExpr`]
//! - [`Condition`]: an AND/OR group of predicates, optionally negated
//! - [`ConditionHolder`]: the AND-ed conditions of one statement

mod condition;
mod expr;
mod expr_trait;
mod simple_expr;

pub use condition::{Condition, ConditionExpression, ConditionHolder, ConditionType};
pub use expr::Expr;
pub use expr_trait::ExprTrait;
pub use simple_expr::SimpleExpr;
