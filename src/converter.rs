use tracing::debug;

use crate::derivation::{build_derivation, Derivation};
use crate::dialect::Dialect;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::label::NodeLabel;
use crate::labeler::label_tree;
use crate::sentence::GoldSuperTaggedSentence;
use crate::syntree::ParseTree;

/// Everything produced from one treebank tree
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
  pub tree: ParseTree<NodeLabel>,
  pub sentence: GoldSuperTaggedSentence,
  pub derivation: Derivation,
}

/// Converts trees of one dialect, interning into a dictionary shared by all of them.
#[derive(Debug, Clone)]
pub struct Converter {
  dialect: Dialect,
  dict: Dictionary,
}

impl Converter {
  pub fn new(dialect: Dialect) -> Self {
    Self::with_dictionary(dialect, Dictionary::new())
  }

  /// Continues interning into an existing dictionary, so handles stay comparable across corpora.
  pub fn with_dictionary(dialect: Dialect, dict: Dictionary) -> Self {
    Self { dialect, dict }
  }

  pub fn dialect(&self) -> Dialect {
    self.dialect
  }

  pub fn dictionary(&self) -> &Dictionary {
    &self.dict
  }

  pub fn into_dictionary(self) -> Dictionary {
    self.dict
  }

  pub fn read_tree(&self, s: &str) -> Result<ParseTree<String>> {
    self.dialect.read_tree(s)
  }

  pub fn label_tree(&mut self, raw: &ParseTree<String>) -> Result<ParseTree<NodeLabel>> {
    label_tree(raw, self.dialect.format(), &mut self.dict)
  }

  pub fn to_sentence(&mut self, raw: &ParseTree<String>) -> Result<GoldSuperTaggedSentence> {
    GoldSuperTaggedSentence::from_string_tree(raw, self.dialect.format(), &mut self.dict)
  }

  pub fn derive(&self, tree: &ParseTree<NodeLabel>) -> Result<Derivation> {
    build_derivation(tree)
  }

  /// Labels a raw tree and builds its sentence and derivation.
  pub fn convert_tree(&mut self, raw: &ParseTree<String>) -> Result<Conversion> {
    let tree = self.label_tree(raw)?;
    let sentence = GoldSuperTaggedSentence::from_label_tree(&tree)?;
    let derivation = self.derive(&tree)?;
    Ok(Conversion {
      tree,
      sentence,
      derivation,
    })
  }

  pub fn convert(&mut self, s: &str) -> Result<Conversion> {
    let raw = self.read_tree(s)?;
    self.convert_tree(&raw)
  }

  /// Converts every tree of a document, paired with the 1-based line it was read from.
  /// A failing tree doesn't stop the ones after it.
  pub fn convert_document<'a>(
    &'a mut self,
    document: &'a str,
  ) -> impl Iterator<Item = (usize, Result<Conversion>)> + 'a {
    let dialect = self.dialect;
    dialect.read_trees(document).map(move |(line, raw)| {
      let converted = raw.and_then(|raw| self.convert_tree(&raw));
      if let Ok(c) = &converted {
        debug!(
          line,
          words = c.sentence.len(),
          entries = c.derivation.num_entries(),
          "converted tree"
        );
      }
      (line, converted)
    })
  }
}
