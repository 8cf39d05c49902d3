use thiserror::Error;

/// Everything that can abort the conversion of a single tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
  /// A terminal or nonterminal token didn't have the field layout its dialect requires.
  #[error("malformed token {token:?}: expected {expected}")]
  Format { token: String, expected: &'static str },

  /// The tree handed to us breaks an invariant that upstream code should have upheld.
  #[error("internal consistency error: {0}")]
  Internal(String),

  /// A bracketed tree couldn't be read.
  #[error("syntax error at byte {pos}: {msg}")]
  Syntax { pos: usize, msg: String },
}

impl Error {
  pub(crate) fn format(token: &str, expected: &'static str) -> Self {
    Self::Format {
      token: token.to_string(),
      expected,
    }
  }

  pub(crate) fn syntax(pos: usize, msg: impl Into<String>) -> Self {
    Self::Syntax {
      pos,
      msg: msg.into(),
    }
  }

  pub fn is_format(&self) -> bool {
    matches!(self, Self::Format { .. })
  }

  pub fn is_internal(&self) -> bool {
    matches!(self, Self::Internal(_))
  }
}

pub type Result<T> = std::result::Result<T, Error>;
