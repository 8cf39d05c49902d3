use crate::dictionary::{Category, Dictionary, PoS, Word};
use crate::error::{Error, Result};
use crate::format::LabelFormat;
use crate::label::{NodeLabel, TerminalLabel};
use crate::syntree::ParseTree;

/// Gold-standard supertag annotation of one sentence: four parallel sequences,
/// one element per terminal, in reading order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GoldSuperTaggedSentence {
  pub words: Vec<Word>,
  pub base_forms: Vec<Word>,
  pub pos: Vec<PoS>,
  pub categories: Vec<Category>,
}

impl GoldSuperTaggedSentence {
  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// Parses the leaves of a raw tree and collects them into a sentence.
  pub fn from_string_tree<F>(
    tree: &ParseTree<String>,
    format: &F,
    dict: &mut Dictionary,
  ) -> Result<Self>
  where
    F: LabelFormat + ?Sized,
  {
    let terminals = tree
      .leaves()
      .into_iter()
      .map(|leaf| format.parse_terminal(leaf, dict))
      .collect::<Result<Vec<_>>>()?;
    Ok(Self::from_terminals(terminals.iter()))
  }

  /// Collects the leaves of an already labeled tree. Every leaf must carry a terminal label.
  pub fn from_label_tree(tree: &ParseTree<NodeLabel>) -> Result<Self> {
    let terminals = tree
      .leaves()
      .into_iter()
      .enumerate()
      .map(|(idx, label)| {
        label
          .terminal()
          .ok_or_else(|| Error::Internal(format!("leaf {} carries a nonterminal label", idx)))
      })
      .collect::<Result<Vec<_>>>()?;
    Ok(Self::from_terminals(terminals.into_iter()))
  }

  fn from_terminals<'a>(terminals: impl ExactSizeIterator<Item = &'a TerminalLabel>) -> Self {
    let n = terminals.len();
    let mut sentence = Self {
      words: Vec::with_capacity(n),
      base_forms: Vec::with_capacity(n),
      pos: Vec::with_capacity(n),
      categories: Vec::with_capacity(n),
    };
    for t in terminals {
      sentence.words.push(t.word());
      sentence.base_forms.push(t.base_form());
      sentence.pos.push(t.pos());
      sentence.categories.push(t.category());
    }
    sentence
  }

  /// `word/pos/category` tokens joined by spaces, for inspection and output.
  pub fn render(&self, dict: &Dictionary) -> String {
    (0..self.len())
      .map(|i| {
        format!(
          "{}/{}/{}",
          dict.word(self.words[i]).unwrap_or("?"),
          dict.pos(self.pos[i]).unwrap_or("?"),
          dict.category(self.categories[i]).unwrap_or("?"),
        )
      })
      .collect::<Vec<_>>()
      .join(" ")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::format::{JapaneseFormat, SimpleFormat};
  use crate::label::{Direction, NonterminalLabel};
  use crate::labeler::label_tree;
  use crate::reader::{read_auto_tree, read_japanese_tree};

  #[test]
  fn test_string_and_label_paths_agree() {
    let raw = read_japanese_tree(
      "{< S {NP 太郎/太郎/名詞-固有名詞/_} {> S＼NP {(S＼NP)／(S＼NP) 速く/速い/形容詞/_} {S＼NP 走っ/走る/動詞-自立/_}}}",
    )
    .unwrap();

    let mut dict = Dictionary::new();
    let from_strings =
      GoldSuperTaggedSentence::from_string_tree(&raw, &JapaneseFormat, &mut dict).unwrap();
    let labeled = label_tree(&raw, &JapaneseFormat, &mut dict).unwrap();
    let from_labels = GoldSuperTaggedSentence::from_label_tree(&labeled).unwrap();

    assert_eq!(from_strings, from_labels);
    assert_eq!(from_strings.len(), 3);
    assert_eq!(dict.word(from_strings.words[2]), Some("走っ"));
    assert_eq!(dict.word(from_strings.base_forms[2]), Some("走る"));
  }

  #[test]
  fn test_render_simple() {
    let raw = read_auto_tree(
      "(<T NP 0 2> (<L NP/N DT DT the NP/N>) (<L N NN NN dog N>) )",
    )
    .unwrap();

    let mut dict = Dictionary::new();
    let sentence =
      GoldSuperTaggedSentence::from_string_tree(&raw, &SimpleFormat, &mut dict).unwrap();
    assert_eq!(sentence.render(&dict), "the/DT/NP/N dog/NN/N");
    assert_eq!(sentence.words, sentence.base_forms);
  }

  #[test]
  fn test_nonterminal_leaf_is_internal_error() {
    let tree = ParseTree::leaf(NodeLabel::Nonterminal(NonterminalLabel::new(
      Direction::Left,
      Category(0),
      "",
    )));
    let err = GoldSuperTaggedSentence::from_label_tree(&tree).unwrap_err();
    assert!(err.is_internal());
  }

  #[test]
  fn test_bad_leaf_is_format_error() {
    let raw = ParseTree::binary(
      ParseTree::leaf("L N NN NN dog N".to_string()),
      ParseTree::leaf("L N NN".to_string()),
      "T N 0 2".to_string(),
    );
    let mut dict = Dictionary::new();
    let err =
      GoldSuperTaggedSentence::from_string_tree(&raw, &SimpleFormat, &mut dict).unwrap_err();
    assert!(err.is_format());
  }
}
