use std::fmt;

use crate::dictionary::{Category, PoS, Word};

/// Which child a nonterminal takes its head from
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
  Left,
  Right,
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Left => write!(f, "left"),
      Self::Right => write!(f, "right"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalLabel {
  /// A terminal whose surface form doubles as its base form
  Normal {
    word: Word,
    pos: PoS,
    category: Category,
  },
  /// A terminal that carries a separate base (dictionary) form
  WithBase {
    word: Word,
    base_form: Word,
    pos: PoS,
    category: Category,
  },
}

impl TerminalLabel {
  pub fn word(&self) -> Word {
    match self {
      Self::Normal { word, .. } | Self::WithBase { word, .. } => *word,
    }
  }

  pub fn base_form(&self) -> Word {
    match self {
      Self::Normal { word, .. } => *word,
      Self::WithBase { base_form, .. } => *base_form,
    }
  }

  pub fn pos(&self) -> PoS {
    match self {
      Self::Normal { pos, .. } | Self::WithBase { pos, .. } => *pos,
    }
  }

  pub fn category(&self) -> Category {
    match self {
      Self::Normal { category, .. } | Self::WithBase { category, .. } => *category,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonterminalLabel {
  pub direction: Direction,
  pub category: Category,
  /// Combinatory rule that built this node; empty when the format doesn't say.
  pub rule_type: String,
}

impl NonterminalLabel {
  pub fn new(direction: Direction, category: Category, rule_type: impl Into<String>) -> Self {
    Self {
      direction,
      category,
      rule_type: rule_type.into(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeLabel {
  Terminal(TerminalLabel),
  Nonterminal(NonterminalLabel),
}

impl NodeLabel {
  pub fn category(&self) -> Category {
    match self {
      Self::Terminal(t) => t.category(),
      Self::Nonterminal(n) => n.category,
    }
  }

  /// Rule-type tag of the node; terminals have none.
  pub fn rule_type(&self) -> &str {
    match self {
      Self::Terminal(_) => "",
      Self::Nonterminal(n) => &n.rule_type,
    }
  }

  pub fn is_terminal(&self) -> bool {
    matches!(self, Self::Terminal(_))
  }

  pub fn terminal(&self) -> Option<&TerminalLabel> {
    match self {
      Self::Terminal(t) => Some(t),
      _ => None,
    }
  }
}

impl From<TerminalLabel> for NodeLabel {
  fn from(t: TerminalLabel) -> Self {
    Self::Terminal(t)
  }
}

impl From<NonterminalLabel> for NodeLabel {
  fn from(n: NonterminalLabel) -> Self {
    Self::Nonterminal(n)
  }
}

impl fmt::Display for NodeLabel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Terminal(t) => write!(f, "{} {} {}", t.category(), t.word(), t.pos()),
      Self::Nonterminal(n) if n.rule_type.is_empty() => {
        write!(f, "{} {}", n.category, n.direction)
      }
      Self::Nonterminal(n) => write!(f, "{} {} {}", n.rule_type, n.category, n.direction),
    }
  }
}

#[test]
fn test_base_form_falls_back_to_surface() {
  let normal = TerminalLabel::Normal {
    word: Word(3),
    pos: PoS(0),
    category: Category(1),
  };
  assert_eq!(normal.base_form(), Word(3));

  let with_base = TerminalLabel::WithBase {
    word: Word(3),
    base_form: Word(4),
    pos: PoS(0),
    category: Category(1),
  };
  assert_eq!(with_base.base_form(), Word(4));
  assert_eq!(NodeLabel::from(with_base).rule_type(), "");
}
