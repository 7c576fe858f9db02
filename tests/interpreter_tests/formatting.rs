use super::*;
use dualcalc::format_result;

#[test]
fn integer_results_have_no_decimal_point() {
  assert_eq!(interpret("2").unwrap(), "2");
  assert_eq!(interpret("2.0").unwrap(), "2");
  assert_eq!(interpret("4/2").unwrap(), "2");
}

#[test]
fn fractional_results_keep_six_digits_at_most() {
  assert_eq!(interpret("2.5").unwrap(), "2.5");
  assert_eq!(interpret("1/3").unwrap(), "0.333333");
  assert_eq!(interpret("2/3").unwrap(), "0.666667");
}

#[test]
fn trailing_zeros_are_stripped() {
  assert_eq!(interpret("1/4").unwrap(), "0.25");
  assert_eq!(interpret("0.1+0.2").unwrap(), "0.3");
}

#[test]
fn sign_is_preserved() {
  assert_eq!(interpret("0-2.5").unwrap(), "-2.5");
  assert_eq!(interpret("(-1)/3").unwrap(), "-0.333333");
}

#[test]
fn tiny_magnitudes_collapse_to_zero() {
  assert_eq!(interpret("1/10000000").unwrap(), "0");
}

#[test]
fn format_result_direct() {
  assert_eq!(format_result(2.0), "2");
  assert_eq!(format_result(2.5), "2.5");
  assert_eq!(format_result(-120.0), "-120");
}
