use std::fmt;
use std::time::{Duration, Instant};

use crate::{evaluate, format_result};

/// Decimal literal appended in place of the π key.
pub const PI_LITERAL: &str = "3.1415926535";
/// Decimal literal appended in place of the e key.
pub const E_LITERAL: &str = "2.7182818284";
/// Buffer contents shown after a failed evaluation.
pub const ERROR_TEXT: &str = "Error";
/// How long an `Error` buffer stays up before the deferred clear fires.
pub const ERROR_CLEAR_DELAY: Duration = Duration::from_secs(2);

const OPERATORS: [char; 6] = ['+', '-', '*', '/', '%', '^'];

const FUNCTION_TOKENS: [&str; 8] = [
  "ln(", "log10(", "sin(", "cos(", "tan(", "asin(", "acos(", "atan(",
];

/// Which keypad is active. Each mode keeps its own entry buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  Standard,
  Scientific,
}

impl Mode {
  fn index(self) -> usize {
    match self {
      Mode::Standard => 0,
      Mode::Scientific => 1,
    }
  }
}

/// One recorded evaluation, in display notation. Newest entries sit at the
/// front of the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
  pub expression: String,
  pub result: String,
}

impl fmt::Display for HistoryEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} = {}", self.expression, self.result)
  }
}

/// Calculator session state: one entry buffer per mode, the shared history
/// list, and the pending error-clear deadline.
pub struct Calculator {
  mode: Mode,
  buffers: [String; 2],
  history: Vec<HistoryEntry>,
  pending_clear: Option<Instant>,
  clear_delay: Duration,
}

impl Default for Calculator {
  fn default() -> Self {
    Self::new()
  }
}

impl Calculator {
  pub fn new() -> Self {
    Self::with_clear_delay(ERROR_CLEAR_DELAY)
  }

  /// Build a calculator with a custom error-clear delay.
  pub fn with_clear_delay(clear_delay: Duration) -> Self {
    Calculator {
      mode: Mode::Standard,
      buffers: [String::new(), String::new()],
      history: Vec::new(),
      pending_clear: None,
      clear_delay,
    }
  }

  pub fn mode(&self) -> Mode {
    self.mode
  }

  /// Current contents of the active buffer.
  pub fn display(&self) -> &str {
    &self.buffers[self.mode.index()]
  }

  /// Recorded evaluations, newest first.
  pub fn history(&self) -> &[HistoryEntry] {
    &self.history
  }

  /// Make `mode` the active buffer. Neither buffer is cleared.
  pub fn switch_mode(&mut self, mode: Mode) {
    self.fire_pending_clear();
    self.mode = mode;
  }

  /// Append a keypad token to the active buffer, or ignore it when operator
  /// validation rejects it.
  pub fn append_char(&mut self, token: &str) {
    self.fire_pending_clear();
    let buffer = &mut self.buffers[self.mode.index()];

    // Special keys first: constants, sign toggle, and the shorthand markers
    // consumed again at evaluation time.
    match token {
      "π" => {
        buffer.push_str(PI_LITERAL);
        return;
      }
      "e" => {
        buffer.push_str(E_LITERAL);
        return;
      }
      "(-)" => {
        *buffer = if buffer.is_empty() {
          "-".to_string()
        } else {
          format!("(-{buffer})")
        };
        return;
      }
      "²" => {
        buffer.push_str("**2");
        return;
      }
      "³" => {
        buffer.push_str("**3");
        return;
      }
      "√" => {
        buffer.push_str("sqrt(");
        return;
      }
      "∛" => {
        buffer.push_str("cbrt(");
        return;
      }
      "1/" => {
        buffer.push_str("1/");
        return;
      }
      "!" => {
        buffer.push_str("fact(");
        return;
      }
      _ => {}
    }

    // Scientific function keys carry their own opening parenthesis and are
    // appended as-is.
    if FUNCTION_TOKENS.contains(&token) {
      buffer.push_str(token);
      return;
    }

    // Binary operators may not start an expression or follow another
    // operator. Only the single last character is inspected, so a marker
    // ending in a digit (e.g. `**2`) does not block a following operator.
    if is_operator(token) {
      let last = buffer.chars().last();
      if buffer.is_empty() || last.is_some_and(|c| OPERATORS.contains(&c)) {
        return;
      }
    }

    buffer.push_str(token);
  }

  /// Remove the last character of the active buffer. Multi-character markers
  /// take one press per character.
  pub fn delete_last(&mut self) {
    self.fire_pending_clear();
    self.buffers[self.mode.index()].pop();
  }

  /// Empty the active buffer.
  pub fn clear_all(&mut self) {
    self.fire_pending_clear();
    self.buffers[self.mode.index()].clear();
  }

  /// Evaluate the active buffer. On success the buffer is replaced with the
  /// formatted result and a history entry is recorded; on failure the buffer
  /// shows `Error` and a deferred clear is scheduled.
  pub fn calculate_result(&mut self) {
    self.fire_pending_clear();
    if self.display().is_empty() {
      return;
    }
    let buffer = self.buffers[self.mode.index()].clone();
    let display_expr = to_display_expression(&buffer);
    let evaluable = to_evaluable_expression(&buffer);

    match evaluate(&evaluable) {
      Ok(value) if value.is_finite() => {
        let result = format_result(value);
        self.buffers[self.mode.index()] = result.clone();
        self.add_to_history(display_expr, result);
      }
      _ => {
        self.buffers[self.mode.index()] = ERROR_TEXT.to_string();
        self.pending_clear = Some(Instant::now() + self.clear_delay);
      }
    }
  }

  /// Fire the deferred error clear if its deadline has passed. Mutating
  /// operations call this implicitly; hosts drive it from a timer so the
  /// clear also fires without further key presses.
  pub fn poll_deferred_clear(&mut self) {
    self.fire_pending_clear();
  }

  fn add_to_history(&mut self, expression: String, result: String) {
    self.history.insert(0, HistoryEntry { expression, result });
  }

  // The deadline survives any input typed after the error and wipes the
  // buffer active at fire time.
  fn fire_pending_clear(&mut self) {
    if let Some(deadline) = self.pending_clear {
      if Instant::now() >= deadline {
        self.buffers[self.mode.index()].clear();
        self.pending_clear = None;
      }
    }
  }
}

fn is_operator(token: &str) -> bool {
  let mut chars = token.chars();
  matches!(
    (chars.next(), chars.next()),
    (Some(c), None) if OPERATORS.contains(&c)
  )
}

/// Rewrite evaluation markers back into display glyphs for history output.
/// Purely cosmetic; the buffer used for computation is left untouched.
fn to_display_expression(buffer: &str) -> String {
  buffer
    .replace("sqrt(", "√")
    .replace("cbrt(", "∛")
    .replace("**2", "²")
    .replace("**3", "³")
    .replace("fact(", "!")
    .replace(PI_LITERAL, "π")
    .replace(E_LITERAL, "e")
}

/// Rewrite display glyphs into evaluator-safe tokens. Each substitution is
/// first-occurrence-only, so repeated manual shorthands in one expression
/// keep their later occurrences unconverted; key-inserted long forms are
/// already complete and unaffected.
fn to_evaluable_expression(buffer: &str) -> String {
  buffer
    .replacen('×', "*", 1)
    .replacen('÷', "/", 1)
    .replacen('−', "-", 1)
    .replacen('%', "/100", 1)
    .replacen('^', "**", 1)
    .replacen('√', "sqrt(", 1)
    .replacen('∛', "cbrt(", 1)
    .replacen('!', "fact(", 1)
}
