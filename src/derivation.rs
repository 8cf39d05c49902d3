//! Span assignment and derivation-chart construction.
//!
//! A [`Derivation`] is a chart indexed by `(begin, end)` whose cells map each
//! category built over that span to the [`AppliedRule`] that built it. Following
//! the child points of a root entry down to `ChildPoint::None` entries replays the
//! whole derivation. A unary rule that keeps its child's category shares the
//! child's key, so its entry replaces the child's and points back at its own key.

use std::fmt;

use tracing::{debug, trace};

use crate::dictionary::{Category, Dictionary};
use crate::error::{Error, Result};
use crate::label::NodeLabel;
use crate::syntree::{Constituent, ParseTree, Span};

/// One chart key: a category over a span
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
  pub begin: usize,
  pub end: usize,
  pub category: Category,
}

impl Point {
  pub fn new(span: Span, category: Category) -> Self {
    Self {
      begin: span.begin,
      end: span.end,
      category,
    }
  }

  pub fn span(&self) -> Span {
    Span::new(self.begin, self.end)
  }

  fn of(node: &ParseTree<Constituent<&NodeLabel>>) -> Self {
    let cons = node.label();
    Self::new(cons.span, cons.value.category())
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}..{}: {}", self.begin, self.end, self.category)
  }
}

/// Where the children of a chart entry live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildPoint {
  /// A terminal; nothing was combined
  None,
  Unary(Point),
  Binary(Point, Point),
}

/// One step of a derivation: the rule applied and the entries it combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedRule {
  pub children: ChildPoint,
  pub rule_type: String,
}

impl AppliedRule {
  pub fn new(children: ChildPoint, rule_type: impl Into<String>) -> Self {
    Self {
      children,
      rule_type: rule_type.into(),
    }
  }

  pub fn is_terminal(&self) -> bool {
    matches!(self.children, ChildPoint::None)
  }
}

/// Category -> rule entries of one span, in insertion order. Categories are unique.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Cell(Vec<(Category, AppliedRule)>);

impl Cell {
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn get(&self, category: Category) -> Option<&AppliedRule> {
    self.0.iter().find(|(c, _)| *c == category).map(|(_, rule)| rule)
  }

  pub fn contains(&self, category: Category) -> bool {
    self.get(category).is_some()
  }

  pub fn iter(&self) -> impl Iterator<Item = (Category, &AppliedRule)> {
    self.0.iter().map(|(c, rule)| (*c, rule))
  }

  /// Sets the rule for a category. An existing entry is replaced in place, keeping
  /// its position. Returns the rule that was replaced.
  fn set(&mut self, category: Category, rule: AppliedRule) -> Option<AppliedRule> {
    match self.0.iter_mut().find(|(c, _)| *c == category) {
      Some((_, old)) => Some(std::mem::replace(old, rule)),
      None => {
        self.0.push((category, rule));
        None
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
  /// Number of terminals in the sentence
  len: usize,
  /// (len + 1) x (len + 1) cells, row-major by begin; only begin <= end is ever filled
  cells: Vec<Cell>,
  roots: Vec<Point>,
}

impl Derivation {
  pub fn new(len: usize) -> Self {
    Self {
      len,
      cells: vec![Cell::default(); (len + 1) * (len + 1)],
      roots: Vec::new(),
    }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  fn index(&self, begin: usize, end: usize) -> Option<usize> {
    if begin <= end && end <= self.len {
      Some(begin * (self.len + 1) + end)
    } else {
      None
    }
  }

  /// Entries built over `begin..end`, or None if the span isn't inside the sentence.
  pub fn cell(&self, begin: usize, end: usize) -> Option<&Cell> {
    self.index(begin, end).map(|idx| &self.cells[idx])
  }

  pub fn get(&self, point: &Point) -> Option<&AppliedRule> {
    self.cell(point.begin, point.end)?.get(point.category)
  }

  /// Points spanning the whole sentence that a derivation starts from
  pub fn roots(&self) -> &[Point] {
    &self.roots
  }

  pub fn num_entries(&self) -> usize {
    self.cells.iter().map(Cell::len).sum()
  }

  /// Every entry, ordered by begin, then end, then insertion.
  pub fn iter(&self) -> impl Iterator<Item = (Point, &AppliedRule)> + '_ {
    (0..=self.len).flat_map(move |begin| {
      (begin..=self.len).flat_map(move |end| {
        self.cells[begin * (self.len + 1) + end]
          .iter()
          .map(move |(category, rule)| (Point::new(Span::new(begin, end), category), rule))
      })
    })
  }

  fn insert(&mut self, point: Point, rule: AppliedRule) -> Result<()> {
    let idx = self.index(point.begin, point.end).ok_or_else(|| {
      Error::Internal(format!(
        "span {}..{} lies outside a sentence of length {}",
        point.begin, point.end, self.len
      ))
    })?;

    trace!(%point, rule_type = %rule.rule_type, "chart insert");
    if let Some(old) = self.cells[idx].set(point.category, rule) {
      debug!(%point, replaced = %old.rule_type, "category already present in cell, replaced");
    }
    Ok(())
  }

  /// Walks the tree bottom-up, filling in one entry per child node, and returns the rule
  /// that built `node` itself.
  fn populate(&mut self, node: &ParseTree<Constituent<&NodeLabel>>) -> Result<AppliedRule> {
    match node {
      ParseTree::Leaf(_) => Ok(AppliedRule::new(ChildPoint::None, "")),
      ParseTree::Unary(child, cons) => {
        let child_rule = self.populate(child)?;
        let child_point = Point::of(child);
        self.insert(child_point, child_rule)?;
        Ok(AppliedRule::new(
          ChildPoint::Unary(child_point),
          cons.value.rule_type(),
        ))
      }
      ParseTree::Binary(left, right, cons) => {
        let left_rule = self.populate(left)?;
        let right_rule = self.populate(right)?;
        let left_point = Point::of(left);
        let right_point = Point::of(right);
        self.insert(left_point, left_rule)?;
        self.insert(right_point, right_rule)?;
        Ok(AppliedRule::new(
          ChildPoint::Binary(left_point, right_point),
          cons.value.rule_type(),
        ))
      }
    }
  }

  pub fn display<'a>(&'a self, dict: &'a Dictionary) -> DerivationDisplay<'a> {
    DerivationDisplay {
      derivation: self,
      dict,
    }
  }
}

/// Gives every node the span of leaves it covers: the k-th leaf from the left gets
/// `k..k+1`, unary nodes inherit their child's span and binary nodes stretch from
/// their left child's begin to their right child's end.
pub fn assign_spans<T>(tree: &ParseTree<T>) -> Result<ParseTree<Constituent<&T>>> {
  let mut next_leaf = 0;
  let spanned = assign(tree, &mut next_leaf)?;

  let root = spanned.span();
  if root.begin != 0 || root.end != next_leaf {
    return Err(Error::Internal(format!(
      "root span {} doesn't cover all {} leaves",
      root, next_leaf
    )));
  }
  Ok(spanned)
}

fn assign<'a, T>(
  tree: &'a ParseTree<T>,
  next_leaf: &mut usize,
) -> Result<ParseTree<Constituent<&'a T>>> {
  Ok(match tree {
    ParseTree::Leaf(value) => {
      let span = Span::new(*next_leaf, *next_leaf + 1);
      *next_leaf += 1;
      ParseTree::Leaf(Constituent { value, span })
    }
    ParseTree::Unary(child, value) => {
      let child = assign(child, next_leaf)?;
      let span = child.span();
      ParseTree::unary(child, Constituent { value, span })
    }
    ParseTree::Binary(left, right, value) => {
      let left = assign(left, next_leaf)?;
      let right = assign(right, next_leaf)?;
      let (l, r) = (left.span(), right.span());
      if l.end != r.begin {
        return Err(Error::Internal(format!("children {} and {} aren't adjacent", l, r)));
      }
      let span = Span::new(l.begin, r.end);
      ParseTree::binary(left, right, Constituent { value, span })
    }
  })
}

/// Builds the derivation chart of a labeled tree. The tree's root becomes the
/// derivation's single root point. Nothing is returned unless the whole chart was built.
pub fn build_derivation(tree: &ParseTree<NodeLabel>) -> Result<Derivation> {
  let spanned = assign_spans(tree)?;
  let root = Point::of(&spanned);

  let mut derivation = Derivation::new(root.end);
  let root_rule = derivation.populate(&spanned)?;
  derivation.insert(root, root_rule)?;
  derivation.roots.push(root);

  debug!(
    leaves = derivation.len(),
    entries = derivation.num_entries(),
    "built derivation"
  );
  Ok(derivation)
}

/// Helper struct for displaying a derivation with category names resolved
#[derive(Clone)]
pub struct DerivationDisplay<'a> {
  pub derivation: &'a Derivation,
  pub dict: &'a Dictionary,
}

impl DerivationDisplay<'_> {
  fn point(&self, f: &mut fmt::Formatter<'_>, p: &Point) -> fmt::Result {
    write!(
      f,
      "{}..{} {}",
      p.begin,
      p.end,
      self.dict.category(p.category).unwrap_or("?")
    )
  }
}

impl fmt::Display for DerivationDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (point, rule) in self.derivation.iter() {
      self.point(f, &point)?;
      write!(f, " <-")?;
      if !rule.rule_type.is_empty() {
        write!(f, " {}", rule.rule_type)?;
      }
      match &rule.children {
        ChildPoint::None => write!(f, " [lexical]")?,
        ChildPoint::Unary(child) => {
          write!(f, " [")?;
          self.point(f, child)?;
          write!(f, "]")?;
        }
        ChildPoint::Binary(left, right) => {
          write!(f, " [")?;
          self.point(f, left)?;
          write!(f, ", ")?;
          self.point(f, right)?;
          write!(f, "]")?;
        }
      }
      writeln!(f)?;
    }
    for root in self.derivation.roots() {
      write!(f, "root: ")?;
      self.point(f, root)?;
      writeln!(f)?;
    }
    Ok(())
  }
}
