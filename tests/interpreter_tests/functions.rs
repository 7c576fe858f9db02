use super::*;

mod roots {
  use super::*;

  #[test]
  fn square_root() {
    assert_eq!(interpret("sqrt(9)").unwrap(), "3");
    assert_eq!(interpret("sqrt(2)").unwrap(), "1.414214");
  }

  #[test]
  fn cube_root() {
    assert_eq!(interpret("cbrt(27)").unwrap(), "3");
    assert_eq!(interpret("cbrt(8)").unwrap(), "2");
  }

  #[test]
  fn nested_roots() {
    assert_eq!(interpret("sqrt(cbrt(64))").unwrap(), "2");
  }

  #[test]
  fn negative_square_root_is_an_error() {
    assert!(interpret("sqrt(0-1)").is_err());
  }
}

mod factorial {
  use super::*;

  #[test]
  fn base_cases() {
    assert_eq!(interpret("fact(0)").unwrap(), "1");
    assert_eq!(interpret("fact(1)").unwrap(), "1");
  }

  #[test]
  fn iterative_product() {
    assert_eq!(interpret("fact(5)").unwrap(), "120");
    assert_eq!(interpret("fact(10)").unwrap(), "3628800");
  }

  #[test]
  fn inside_larger_expression() {
    assert_eq!(interpret("2*fact(3)").unwrap(), "12");
    // key-inserted calls are complete per occurrence, so repeats work
    assert_eq!(interpret("fact(3)+fact(3)").unwrap(), "12");
  }

  #[test]
  fn negative_argument_is_an_error() {
    assert!(interpret("fact(0-1)").is_err());
  }

  #[test]
  fn fractional_argument_is_an_error() {
    assert!(interpret("fact(2.5)").is_err());
  }

  #[test]
  fn error_poisons_surrounding_expression() {
    assert!(interpret("1+fact(2.5)").is_err());
  }
}

mod logarithms {
  use super::*;

  #[test]
  fn natural_log() {
    assert_eq!(interpret("ln(1)").unwrap(), "0");
    // ln of the keypad's e literal rounds back to 1
    assert_eq!(interpret("ln(2.7182818284)").unwrap(), "1");
  }

  #[test]
  fn base_10_log() {
    assert_eq!(interpret("log10(10)").unwrap(), "1");
    assert_eq!(interpret("log10(1000)").unwrap(), "3");
  }

  #[test]
  fn log_of_non_positive_is_an_error() {
    assert!(interpret("ln(0-1)").is_err());
  }
}

mod trigonometry {
  use super::*;

  #[test]
  fn basic_functions() {
    assert_eq!(interpret("sin(0)").unwrap(), "0");
    assert_eq!(interpret("cos(0)").unwrap(), "1");
    assert_eq!(interpret("tan(0)").unwrap(), "0");
  }

  #[test]
  fn sin_of_pi_literal_rounds_to_zero() {
    assert_eq!(interpret("sin(3.1415926535)").unwrap(), "0");
  }

  #[test]
  fn inverse_functions() {
    assert_eq!(interpret("asin(1)").unwrap(), "1.570796");
    assert_eq!(interpret("acos(1)").unwrap(), "0");
    assert_eq!(interpret("atan(1)").unwrap(), "0.785398");
  }

  #[test]
  fn arcsine_out_of_range_is_an_error() {
    assert!(interpret("asin(2)").is_err());
  }
}
