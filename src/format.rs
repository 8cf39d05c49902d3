//! Per-dialect parsing of individual node tokens into labels.

use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::label::{Direction, NonterminalLabel, TerminalLabel};
use crate::utils::fields;

/// Turns the raw text of one tree node into a typed label, interning any new
/// words, parts of speech and categories along the way.
pub trait LabelFormat {
  fn parse_terminal(&self, token: &str, dict: &mut Dictionary) -> Result<TerminalLabel>;

  fn parse_nonterminal(&self, token: &str, dict: &mut Dictionary) -> Result<NonterminalLabel>;
}

/// Japanese CCGbank tokens:
///
/// ```text
/// terminal:    NP[nc,nm] 太郎/太郎/名詞-固有名詞/_
/// nonterminal: < S[mod=nm,form=base]
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct JapaneseFormat;

impl LabelFormat for JapaneseFormat {
  fn parse_terminal(&self, token: &str, dict: &mut Dictionary) -> Result<TerminalLabel> {
    let (category, word) = match fields(token)[..] {
      [category, word] => (category, word),
      _ => return Err(Error::format(token, "`category surface/base/pos`")),
    };

    // the pos part may contain further slashes of its own
    let (surface, base_form, pos) = match word.splitn(3, '/').collect::<Vec<_>>()[..] {
      [surface, base_form, pos] => (surface, base_form, pos),
      _ => return Err(Error::format(token, "`surface/base/pos` after the category")),
    };

    Ok(TerminalLabel::WithBase {
      word: dict.get_or_create_word(surface),
      base_form: dict.get_or_create_word(base_form),
      pos: dict.get_or_create_pos(pos),
      category: dict.get_or_create_category(category),
    })
  }

  fn parse_nonterminal(&self, token: &str, dict: &mut Dictionary) -> Result<NonterminalLabel> {
    match fields(token)[..] {
      // the bracket format has no head marking at this level
      [rule_type, category] => Ok(NonterminalLabel::new(
        Direction::Left,
        dict.get_or_create_category(category),
        rule_type,
      )),
      _ => Err(Error::format(token, "`rule category`")),
    }
  }
}

/// CCGbank AUTO tokens, as found between `<` and `>`:
///
/// ```text
/// terminal:    L N/N NNP NNP Dutch N_126/N_126
/// nonterminal: T S[dcl] 0 2
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SimpleFormat;

impl LabelFormat for SimpleFormat {
  fn parse_terminal(&self, token: &str, dict: &mut Dictionary) -> Result<TerminalLabel> {
    match fields(token)[..] {
      [_, category, _, pos, word, _] => Ok(TerminalLabel::Normal {
        word: dict.get_or_create_word(word),
        pos: dict.get_or_create_pos(pos),
        category: dict.get_or_create_category(category),
      }),
      _ => Err(Error::format(token, "6 fields `L cat pos pos word predarg`")),
    }
  }

  fn parse_nonterminal(&self, token: &str, dict: &mut Dictionary) -> Result<NonterminalLabel> {
    match fields(token)[..] {
      [_, category, head, _] => {
        let direction = if head == "0" {
          Direction::Left
        } else {
          Direction::Right
        };
        Ok(NonterminalLabel::new(
          direction,
          dict.get_or_create_category(category),
          "",
        ))
      }
      _ => Err(Error::format(token, "4 fields `T cat head children`")),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_japanese_terminal() {
    let mut dict = Dictionary::new();
    let label = JapaneseFormat
      .parse_terminal(
        "(NP[nc,nm]1／NP[nc,nm]1)＼NP[nc,nm] の/の/助詞-連体化/_",
        &mut dict,
      )
      .unwrap();

    assert!(matches!(label, TerminalLabel::WithBase { .. }));
    assert_eq!(dict.word(label.word()), Some("の"));
    assert_eq!(dict.word(label.base_form()), Some("の"));
    assert!(dict.pos(label.pos()).unwrap().starts_with("助詞-連体化"));
    assert_eq!(
      dict.category(label.category()),
      Some("(NP[nc,nm]1／NP[nc,nm]1)＼NP[nc,nm]")
    );
  }

  #[test]
  fn test_japanese_terminal_distinct_base_form() {
    let mut dict = Dictionary::new();
    let label = JapaneseFormat
      .parse_terminal("S[mod=nm,form=base]＼NP[ga,nm] 走っ/走る/動詞-自立/_", &mut dict)
      .unwrap();

    assert_eq!(dict.word(label.word()), Some("走っ"));
    assert_eq!(dict.word(label.base_form()), Some("走る"));
    assert_eq!(dict.pos(label.pos()), Some("動詞-自立/_"));
  }

  #[test]
  fn test_japanese_terminal_errors() {
    let mut dict = Dictionary::new();
    let err = JapaneseFormat
      .parse_terminal("only one field", &mut dict)
      .unwrap_err();
    assert!(err.is_format());
    assert!(matches!(err, Error::Format { ref token, .. } if token == "only one field"));

    // two fields but only one slash
    assert!(
      JapaneseFormat
        .parse_terminal("NP 太郎/名詞", &mut dict)
        .unwrap_err()
        .is_format()
    );
  }

  #[test]
  fn test_japanese_nonterminal() {
    let mut dict = Dictionary::new();
    let label = JapaneseFormat.parse_nonterminal("< NP[ga,nm]", &mut dict).unwrap();

    assert_eq!(label.direction, Direction::Left);
    assert_eq!(dict.category(label.category), Some("NP[ga,nm]"));
    assert_eq!(label.rule_type, "<");

    assert!(
      JapaneseFormat
        .parse_nonterminal("< NP[ga,nm] extra", &mut dict)
        .unwrap_err()
        .is_format()
    );
  }

  #[test]
  fn test_simple_terminal() {
    let mut dict = Dictionary::new();
    let label = SimpleFormat
      .parse_terminal("L N/N NNP NNP Dutch N_126/N_126", &mut dict)
      .unwrap();

    assert!(matches!(label, TerminalLabel::Normal { .. }));
    assert_eq!(dict.category(label.category()), Some("N/N"));
    assert_eq!(dict.pos(label.pos()), Some("NNP"));
    assert_eq!(dict.word(label.word()), Some("Dutch"));
    assert_eq!(label.base_form(), label.word());

    assert!(
      SimpleFormat
        .parse_terminal("L N/N NNP NNP Dutch", &mut dict)
        .unwrap_err()
        .is_format()
    );
  }

  #[test]
  fn test_simple_nonterminal() {
    let mut dict = Dictionary::new();
    let left = SimpleFormat.parse_nonterminal("T S[dcl] 0 2", &mut dict).unwrap();
    assert_eq!(left.direction, Direction::Left);
    assert_eq!(dict.category(left.category), Some("S[dcl]"));
    assert_eq!(left.rule_type, "");

    let right = SimpleFormat.parse_nonterminal("T NP 1 2", &mut dict).unwrap();
    assert_eq!(right.direction, Direction::Right);

    assert!(
      SimpleFormat
        .parse_nonterminal("T S[dcl] 0", &mut dict)
        .unwrap_err()
        .is_format()
    );
  }

  #[test]
  fn test_repeated_parses_share_handles() {
    let mut dict = Dictionary::new();
    let a = SimpleFormat
      .parse_terminal("L N/N NNP NNP Dutch N_126/N_126", &mut dict)
      .unwrap();
    let b = SimpleFormat
      .parse_terminal("L N/N NNP NNP Dutch N_126/N_126", &mut dict)
      .unwrap();

    assert_eq!(a, b);
    assert_eq!(dict.num_words(), 1);
    assert_eq!(dict.num_categories(), 1);
  }
}
