use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::format::LabelFormat;
use crate::label::NodeLabel;
use crate::syntree::ParseTree;

/// Turns a tree of raw node strings into a tree of typed labels. Leaves go
/// through `parse_terminal`, unary and binary nodes through `parse_nonterminal`.
/// Children are labeled before their parent; the first malformed token aborts
/// the whole tree.
pub fn label_tree<F>(
  tree: &ParseTree<String>,
  format: &F,
  dict: &mut Dictionary,
) -> Result<ParseTree<NodeLabel>>
where
  F: LabelFormat + ?Sized,
{
  Ok(match tree {
    ParseTree::Leaf(raw) => ParseTree::Leaf(NodeLabel::Terminal(format.parse_terminal(raw, dict)?)),
    ParseTree::Unary(child, raw) => {
      let child = label_tree(child, format, dict)?;
      let label = format.parse_nonterminal(raw, dict)?;
      ParseTree::unary(child, NodeLabel::Nonterminal(label))
    }
    ParseTree::Binary(left, right, raw) => {
      let left = label_tree(left, format, dict)?;
      let right = label_tree(right, format, dict)?;
      let label = format.parse_nonterminal(raw, dict)?;
      ParseTree::binary(left, right, NodeLabel::Nonterminal(label))
    }
  })
}
