use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

pub mod engine;
pub mod evaluator;
pub mod functions;
pub mod syntax;

#[derive(Parser)]
#[grammar = "calculator.pest"]
pub struct CalculatorParser;

#[derive(Error, Debug)]
pub enum CalcError {
  #[error("Parse error: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
  #[error("Empty input")]
  EmptyInput,
  #[error("Evaluation error: {0}")]
  EvaluationError(String),
}

impl CalculatorParser {
  pub fn parse_expression(
    input: &str,
  ) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>>
  {
    Self::parse(Rule::Program, input).map_err(Box::new)
  }
}

pub fn parse(
  input: &str,
) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
  CalculatorParser::parse_expression(input)
}

pub use engine::{Calculator, HistoryEntry, Mode};
pub use evaluator::evaluate_expr;

/// Parse and evaluate an expression in evaluable form (ASCII operators,
/// `sqrt(`/`cbrt(`/`fact(` call syntax). The returned value may be
/// non-finite, e.g. after a division by zero.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(CalcError::EmptyInput);
  }
  let mut pairs = parse(trimmed)?;
  let program = pairs.next().ok_or(CalcError::EmptyInput)?;
  let expression = program.into_inner().next().ok_or(CalcError::EmptyInput)?;
  let expr = syntax::pair_to_expr(expression);
  evaluate_expr(&expr)
}

/// Evaluate an expression and format the result for display. Non-finite
/// results are reported as evaluation errors.
pub fn interpret(input: &str) -> Result<String, CalcError> {
  let result = evaluate(input)?;
  if !result.is_finite() {
    return Err(CalcError::EvaluationError(
      "result is not a finite number".to_string(),
    ));
  }
  Ok(format_result(result))
}

/// Format a finite result for display: integral values render without a
/// decimal point, everything else is rounded to 6 fractional digits with
/// trailing zeros stripped.
pub fn format_result(result: f64) -> String {
  if result.fract() == 0.0 {
    format!("{}", result)
  } else {
    format!("{:.6}", result)
      .trim_end_matches('0')
      .trim_end_matches('.')
      .to_string()
  }
}
