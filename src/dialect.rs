use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::format::{JapaneseFormat, LabelFormat, SimpleFormat};
use crate::reader::{read_auto_tree, read_japanese_tree};
use crate::syntree::ParseTree;

/// The treebank serialization a corpus is written in. Picked once per corpus.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Dialect {
  /// Japanese CCGbank, `{rule category ...}` brackets
  Japanese,
  /// English CCGbank AUTO, `(<T ...> ...)` brackets
  Simple,
}

impl Dialect {
  pub fn format(self) -> &'static dyn LabelFormat {
    match self {
      Self::Japanese => &JapaneseFormat,
      Self::Simple => &SimpleFormat,
    }
  }

  pub fn read_tree(self, s: &str) -> Result<ParseTree<String>> {
    match self {
      Self::Japanese => read_japanese_tree(s),
      Self::Simple => read_auto_tree(s),
    }
  }

  /// Reads every tree in a document, one tree per line, paired with its 1-based line number.
  /// Blank lines and AUTO `ID=` header lines are skipped.
  pub fn read_trees(
    self,
    document: &str,
  ) -> impl Iterator<Item = (usize, Result<ParseTree<String>>)> + '_ {
    document
      .lines()
      .enumerate()
      .map(|(idx, line)| (idx + 1, line.trim()))
      .filter(move |(_, line)| {
        !line.is_empty() && !(self == Self::Simple && line.starts_with("ID="))
      })
      .map(move |(line_no, line)| (line_no, self.read_tree(line)))
  }
}

impl FromStr for Dialect {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "ja" | "japanese" => Ok(Self::Japanese),
      "simple" | "en" | "english" | "auto" => Ok(Self::Simple),
      other => Err(format!(
        "unknown dialect {:?}, expected one of: japanese, simple",
        other
      )),
    }
  }
}

impl fmt::Display for Dialect {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Japanese => write!(f, "japanese"),
      Self::Simple => write!(f, "simple"),
    }
  }
}
