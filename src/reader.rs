//! Simple recursive-descent reading of bracketed treebank trees into raw string trees.
//!
//! Two bracket styles are understood:
//!
//! ```text
//! Japanese: {< S[mod=nm,form=base] {NP[nc,nm] 太郎/太郎/名詞-固有名詞/_} {S\NP 走る/走る/動詞/_}}
//! AUTO:     (<T S[dcl] 0 2> (<L NP NNP NNP Pierre N_73>) (<L S[dcl]\NP VBZ VBZ runs S\NP_1>) )
//! ```
//!
//! Node labels are returned verbatim (trimmed); turning them into typed labels
//! is the job of a [`LabelFormat`](crate::format::LabelFormat).

use regex::Regex;

use crate::error::{Error, Result};
use crate::syntree::ParseTree;
use crate::utils::fields;

type Infallible<'a, T> = (T, &'a str);
type ParseResult<'a, T> = Result<(T, &'a str)>;

/// Keeps the full input around so errors can point at a byte offset.
struct Source<'a> {
  src: &'a str,
}

impl<'a> Source<'a> {
  fn pos(&self, rest: &str) -> usize {
    self.src.len() - rest.len()
  }

  fn error(&self, rest: &str, msg: impl Into<String>) -> Error {
    Error::syntax(self.pos(rest), msg)
  }

  /// Try to consume a char, failing if it doesn't match
  fn needed_char(&self, c: char, s: &'a str) -> ParseResult<'a, char> {
    if let (Some(c), rest) = optional_char(c, s) {
      Ok((c, rest))
    } else {
      let found = s.chars().next().map_or("end of input".to_string(), |c| format!("{:?}", c));
      Err(self.error(s, format!("expected {:?}, found {}", c, found)))
    }
  }

  /// `{label child*}`
  fn japanese_node(&self, s: &'a str) -> ParseResult<'a, ParseTree<String>> {
    regex_static!(JA_LABEL, r"^[^{}]*");

    let start = skip_whitespace(s);
    let (_, s) = self.needed_char('{', start)?;
    let (label, s) = optional_re(&JA_LABEL, s);
    let label = label.unwrap_or("").trim();
    if label.is_empty() {
      return Err(self.error(s, "empty node label"));
    }

    let mut children = Vec::new();
    let mut rem = s;
    loop {
      rem = skip_whitespace(rem);
      if let (Some(_), s) = optional_char('}', rem) {
        rem = s;
        break;
      }
      if rem.is_empty() {
        return Err(self.error(rem, format!("unclosed node {:?}", label)));
      }
      let (child, s) = self.japanese_node(rem)?;
      children.push(child);
      rem = s;
    }

    Ok((self.build_node(start, label, children)?, rem))
  }

  /// `(<label> child*)`
  fn auto_node(&self, s: &'a str) -> ParseResult<'a, ParseTree<String>> {
    regex_static!(AUTO_LABEL, r"^[^>]*");

    let start = skip_whitespace(s);
    let (_, s) = self.needed_char('(', start)?;
    let s = skip_whitespace(s);
    let (_, s) = self.needed_char('<', s)?;
    let (label, s) = optional_re(&AUTO_LABEL, s);
    let label = label.unwrap_or("").trim();
    let (_, s) = self.needed_char('>', s)?;

    let mut children = Vec::new();
    let mut rem = s;
    loop {
      rem = skip_whitespace(rem);
      if let (Some(_), s) = optional_char(')', rem) {
        rem = s;
        break;
      }
      if rem.is_empty() {
        return Err(self.error(rem, format!("unclosed node <{}>", label)));
      }
      let (child, s) = self.auto_node(rem)?;
      children.push(child);
      rem = s;
    }

    match (fields(label).first().copied(), children.is_empty()) {
      (Some("L"), true) | (Some("T"), false) => {}
      (Some("L"), false) => return Err(self.error(start, "leaf node <L ...> has children")),
      (Some("T"), true) => return Err(self.error(start, "interior node <T ...> has no children")),
      _ => return Err(self.error(start, format!("node <{}> is neither L nor T", label))),
    }

    Ok((self.build_node(start, label, children)?, rem))
  }

  fn build_node(
    &self,
    at: &str,
    label: &str,
    mut children: Vec<ParseTree<String>>,
  ) -> Result<ParseTree<String>> {
    let label = label.to_string();
    match children.len() {
      0 => Ok(ParseTree::leaf(label)),
      1 => Ok(ParseTree::unary(children.remove(0), label)),
      2 => {
        let right = children.remove(1);
        let left = children.remove(0);
        Ok(ParseTree::binary(left, right, label))
      }
      n => Err(self.error(at, format!("node {:?} has {} children, at most 2 allowed", label, n))),
    }
  }

  fn finish(&self, (tree, rest): Infallible<'a, ParseTree<String>>) -> Result<ParseTree<String>> {
    let rest = skip_whitespace(rest);
    if rest.is_empty() {
      Ok(tree)
    } else {
      Err(self.error(rest, "trailing input after tree"))
    }
  }
}

/// Try to consume a regex, returning None if it doesn't match at the start of `s`
fn optional_re<'a>(re: &Regex, s: &'a str) -> Infallible<'a, Option<&'a str>> {
  match re.find(s) {
    Some(m) if m.start() == 0 => (Some(m.as_str()), &s[m.end()..]),
    _ => (None, s),
  }
}

/// Try to consume a char, returning None if it doesn't match
fn optional_char(c: char, s: &str) -> Infallible<'_, Option<char>> {
  match s.strip_prefix(c) {
    Some(rest) => (Some(c), rest),
    None => (None, s),
  }
}

fn skip_whitespace(s: &str) -> &str {
  regex_static!(WHITESPACE, r"^\s+");
  optional_re(&WHITESPACE, s).1
}

/// Reads one tree in the Japanese CCGbank brace format.
pub fn read_japanese_tree(s: &str) -> Result<ParseTree<String>> {
  let src = Source { src: s };
  let parsed = src.japanese_node(s)?;
  src.finish(parsed)
}

/// Reads one tree in the English CCGbank AUTO format.
pub fn read_auto_tree(s: &str) -> Result<ParseTree<String>> {
  let src = Source { src: s };
  let parsed = src.auto_node(s)?;
  src.finish(parsed)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_read_japanese() {
    let tree = read_japanese_tree(
      "{< S[mod=nm,form=base] {NP[nc,nm] 太郎/太郎/名詞-固有名詞/_} \
       {S[mod=nm,form=base]＼NP[ga,nm] 走る/走る/動詞-自立/_}}",
    )
    .unwrap();

    assert_eq!(
      tree,
      ParseTree::binary(
        ParseTree::leaf("NP[nc,nm] 太郎/太郎/名詞-固有名詞/_".to_string()),
        ParseTree::leaf("S[mod=nm,form=base]＼NP[ga,nm] 走る/走る/動詞-自立/_".to_string()),
        "< S[mod=nm,form=base]".to_string(),
      )
    );
  }

  #[test]
  fn test_read_japanese_unary() {
    let tree = read_japanese_tree("{ADN NP[nc,nm] {NP[nc,nm] 本/本/名詞-一般/_}}").unwrap();
    assert_eq!(
      tree,
      ParseTree::unary(
        ParseTree::leaf("NP[nc,nm] 本/本/名詞-一般/_".to_string()),
        "ADN NP[nc,nm]".to_string(),
      )
    );
  }

  #[test]
  fn test_read_auto() {
    let tree = read_auto_tree(
      "(<T NP 0 2> (<L N/N NNP NNP Dutch N_126/N_126>) (<T N 0 1> (<L N NN NN publisher N>) ) )",
    )
    .unwrap();

    assert_eq!(
      tree,
      ParseTree::binary(
        ParseTree::leaf("L N/N NNP NNP Dutch N_126/N_126".to_string()),
        ParseTree::unary(
          ParseTree::leaf("L N NN NN publisher N".to_string()),
          "T N 0 1".to_string(),
        ),
        "T NP 0 2".to_string(),
      )
    );
  }

  #[test]
  fn test_reader_errors() {
    // unbalanced
    let err = read_japanese_tree("{< S {NP a/a/b}").unwrap_err();
    assert!(matches!(err, Error::Syntax { .. }));

    // three children
    assert!(read_japanese_tree("{< S {A a/a/a} {B b/b/b} {C c/c/c}}").is_err());

    // trailing garbage
    let err = read_japanese_tree("{NP a/a/b} x").unwrap_err();
    assert_eq!(err, Error::syntax(11, "trailing input after tree"));

    // leaf marked as interior and vice versa
    assert!(read_auto_tree("(<T N 0 1>)").is_err());
    assert!(read_auto_tree("(<L N NN NN a N> (<L N NN NN b N>))").is_err());
    assert!(read_auto_tree("(<X N NN NN a N>)").is_err());

    assert!(read_auto_tree("").is_err());
  }
}
