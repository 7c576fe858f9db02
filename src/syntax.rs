use pest::iterators::Pair;

use crate::Rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
  Plus,
  Minus,
  Times,
  Divide,
  Power,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
  Negate,
}

/// Single-argument functions the evaluator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFunction {
  Sqrt,
  Cbrt,
  Factorial,
  Ln,
  Log10,
  Sin,
  Cos,
  Tan,
  Asin,
  Acos,
  Atan,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Number(f64),
  UnaryOp {
    op: UnaryOperator,
    operand: Box<Expr>,
  },
  BinaryOp {
    op: BinaryOperator,
    left: Box<Expr>,
    right: Box<Expr>,
  },
  FunctionCall {
    function: MathFunction,
    arg: Box<Expr>,
  },
}

/// Convert a parsed pair into an expression AST. The grammar guarantees the
/// pair shapes matched here, so other rules are unreachable.
pub fn pair_to_expr(pair: Pair<Rule>) -> Expr {
  match pair.as_rule() {
    Rule::Expression | Rule::Term => fold_left_assoc(pair),
    Rule::Factor => {
      let mut inner = pair.into_inner();
      let base = pair_to_expr(inner.next().unwrap());
      match inner.next() {
        // PowOp ~ Factor: right-associative exponentiation
        Some(_pow_op) => {
          let exponent = pair_to_expr(inner.next().unwrap());
          Expr::BinaryOp {
            op: BinaryOperator::Power,
            left: Box::new(base),
            right: Box::new(exponent),
          }
        }
        None => base,
      }
    }
    Rule::Unary => {
      let mut inner = pair.into_inner();
      let first = inner.next().unwrap();
      if first.as_rule() == Rule::NegOp {
        Expr::UnaryOp {
          op: UnaryOperator::Negate,
          operand: Box::new(pair_to_expr(inner.next().unwrap())),
        }
      } else {
        pair_to_expr(first)
      }
    }
    Rule::Primary => pair_to_expr(pair.into_inner().next().unwrap()),
    Rule::FunctionCall => {
      let mut inner = pair.into_inner();
      let name = inner.next().unwrap();
      let function = match name.as_str() {
        "sqrt" => MathFunction::Sqrt,
        "cbrt" => MathFunction::Cbrt,
        "fact" => MathFunction::Factorial,
        "ln" => MathFunction::Ln,
        "log10" => MathFunction::Log10,
        "sin" => MathFunction::Sin,
        "cos" => MathFunction::Cos,
        "tan" => MathFunction::Tan,
        "asin" => MathFunction::Asin,
        "acos" => MathFunction::Acos,
        "atan" => MathFunction::Atan,
        other => unreachable!("unknown function name: {other}"),
      };
      Expr::FunctionCall {
        function,
        arg: Box::new(pair_to_expr(inner.next().unwrap())),
      }
    }
    Rule::Number => Expr::Number(pair.as_str().parse().unwrap()),
    rule => unreachable!("unexpected rule: {rule:?}"),
  }
}

/// Fold `operand (op operand)*` pairs into a left-associative tree.
fn fold_left_assoc(pair: Pair<Rule>) -> Expr {
  let mut inner = pair.into_inner();
  let mut expr = pair_to_expr(inner.next().unwrap());
  while let Some(op_pair) = inner.next() {
    let op = match op_pair.as_str() {
      "+" => BinaryOperator::Plus,
      "-" => BinaryOperator::Minus,
      "*" => BinaryOperator::Times,
      "/" => BinaryOperator::Divide,
      other => unreachable!("unknown operator: {other}"),
    };
    let right = pair_to_expr(inner.next().unwrap());
    expr = Expr::BinaryOp {
      op,
      left: Box::new(expr),
      right: Box::new(right),
    };
  }
  expr
}
