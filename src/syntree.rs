use std::fmt;

/// Contiguous range of leaf positions, `begin..end`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
  pub begin: usize,
  pub end: usize,
}

impl Span {
  pub fn new(begin: usize, end: usize) -> Self {
    debug_assert!(begin <= end, "span {}..{} runs backwards", begin, end);
    Self { begin, end }
  }
}

impl fmt::Display for Span {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}..{}", self.begin, self.end)
  }
}

/// A node value paired with the span it covers
#[derive(Debug, PartialEq, Clone)]
pub struct Constituent<T> {
  pub value: T,
  pub span: Span,
}

/// A binarized parse tree. Every node owns its children.
#[derive(Debug, PartialEq, Clone)]
pub enum ParseTree<T> {
  Leaf(T),
  Unary(Box<ParseTree<T>>, T),
  Binary(Box<ParseTree<T>>, Box<ParseTree<T>>, T),
}

impl<T> ParseTree<T> {
  pub fn leaf(label: T) -> Self {
    Self::Leaf(label)
  }

  pub fn unary(child: ParseTree<T>, label: T) -> Self {
    Self::Unary(Box::new(child), label)
  }

  pub fn binary(left: ParseTree<T>, right: ParseTree<T>, label: T) -> Self {
    Self::Binary(Box::new(left), Box::new(right), label)
  }

  pub fn label(&self) -> &T {
    match self {
      Self::Leaf(t) | Self::Unary(_, t) | Self::Binary(_, _, t) => t,
    }
  }

  /// Leaf labels in left-to-right reading order
  pub fn leaves(&self) -> Vec<&T> {
    let mut leaves = Vec::new();
    self.collect_leaves(&mut leaves);
    leaves
  }

  fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a T>) {
    match self {
      Self::Leaf(t) => out.push(t),
      Self::Unary(child, _) => child.collect_leaves(out),
      Self::Binary(left, right, _) => {
        left.collect_leaves(out);
        right.collect_leaves(out);
      }
    }
  }

  pub fn num_leaves(&self) -> usize {
    match self {
      Self::Leaf(_) => 1,
      Self::Unary(child, _) => child.num_leaves(),
      Self::Binary(left, right, _) => left.num_leaves() + right.num_leaves(),
    }
  }

  /// Number of nodes that aren't leaves
  pub fn num_interior(&self) -> usize {
    match self {
      Self::Leaf(_) => 0,
      Self::Unary(child, _) => 1 + child.num_interior(),
      Self::Binary(left, right, _) => 1 + left.num_interior() + right.num_interior(),
    }
  }

  /// Structure-preserving map. Children are mapped before their parent, left before right.
  pub fn map<U>(&self, f: &mut impl FnMut(&T) -> U) -> ParseTree<U> {
    match self {
      Self::Leaf(t) => ParseTree::Leaf(f(t)),
      Self::Unary(child, t) => {
        let child = child.map(f);
        ParseTree::unary(child, f(t))
      }
      Self::Binary(left, right, t) => {
        let left = left.map(f);
        let right = right.map(f);
        ParseTree::binary(left, right, f(t))
      }
    }
  }
}

impl<T> ParseTree<Constituent<T>> {
  pub fn span(&self) -> Span {
    self.label().span
  }
}

impl<T> fmt::Display for ParseTree<T>
where
  T: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Leaf(t) => write!(f, "({})", t),
      Self::Unary(child, t) => write!(f, "({} {})", t, child),
      Self::Binary(left, right, t) => {
        write!(f, "({}", t)?;
        for child in [left, right] {
          let fmt = format!("{}", child);
          for line in fmt.lines() {
            write!(f, "\n  {}", line)?;
          }
        }
        write!(f, ")")
      }
    }
  }
}
