use crate::CalcError;
use crate::functions::apply_function;
use crate::syntax::{BinaryOperator, Expr, UnaryOperator};

/// Evaluate an expression AST to a numeric value.
///
/// Arithmetic follows IEEE 754: division by zero and domain errors produce
/// non-finite values rather than errors, and the caller decides how to
/// surface them. Only an invalid factorial argument fails eagerly.
pub fn evaluate_expr(expr: &Expr) -> Result<f64, CalcError> {
  match expr {
    Expr::Number(n) => Ok(*n),
    Expr::UnaryOp {
      op: UnaryOperator::Negate,
      operand,
    } => Ok(-evaluate_expr(operand)?),
    Expr::BinaryOp { op, left, right } => {
      let lhs = evaluate_expr(left)?;
      let rhs = evaluate_expr(right)?;
      Ok(match op {
        BinaryOperator::Plus => lhs + rhs,
        BinaryOperator::Minus => lhs - rhs,
        BinaryOperator::Times => lhs * rhs,
        BinaryOperator::Divide => lhs / rhs,
        BinaryOperator::Power => lhs.powf(rhs),
      })
    }
    Expr::FunctionCall { function, arg } => {
      let value = evaluate_expr(arg)?;
      apply_function(*function, value)
    }
  }
}
