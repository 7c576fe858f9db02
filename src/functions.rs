use crate::CalcError;
use crate::syntax::MathFunction;

/// Apply a math function to its already-evaluated argument. Domain errors
/// (negative square roots, logarithms of non-positive values, arcsine out of
/// range) surface as NaN per IEEE semantics.
pub fn apply_function(
  function: MathFunction,
  value: f64,
) -> Result<f64, CalcError> {
  Ok(match function {
    MathFunction::Sqrt => value.sqrt(),
    MathFunction::Cbrt => value.cbrt(),
    MathFunction::Factorial => factorial(value)?,
    MathFunction::Ln => value.ln(),
    MathFunction::Log10 => value.log10(),
    MathFunction::Sin => value.sin(),
    MathFunction::Cos => value.cos(),
    MathFunction::Tan => value.tan(),
    MathFunction::Asin => value.asin(),
    MathFunction::Acos => value.acos(),
    MathFunction::Atan => value.atan(),
  })
}

/// `n!` for non-negative integral `n` (0! = 1! = 1). Negative or fractional
/// arguments are rejected, which poisons the surrounding evaluation.
pub fn factorial(n: f64) -> Result<f64, CalcError> {
  if n < 0.0 || n.fract() != 0.0 {
    return Err(CalcError::EvaluationError(
      "factorial argument must be a non-negative integer".to_string(),
    ));
  }
  if n == 0.0 || n == 1.0 {
    return Ok(1.0);
  }
  let mut result = 1.0;
  let mut i = 2.0;
  while i <= n {
    result *= i;
    i += 1.0;
  }
  Ok(result)
}
