//! Converts bracketed CCG treebank trees into typed parse trees, gold supertagged
//! sentences and derivation charts.
//!
//! ```
//! use ccgchart::{Converter, Dialect};
//!
//! let mut converter = Converter::new(Dialect::Simple);
//! let conversion = converter
//!   .convert("(<T NP 0 2> (<L NP/N DT DT the NP/N>) (<L N NN NN dog N>) )")
//!   .unwrap();
//!
//! assert_eq!(conversion.sentence.len(), 2);
//! assert_eq!(conversion.derivation.roots().len(), 1);
//! ```

#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod utils;

pub mod converter;
pub mod derivation;
pub mod dialect;
pub mod dictionary;
pub mod error;
pub mod format;
pub mod label;
pub mod labeler;
pub mod reader;
pub mod sentence;
pub mod syntree;

pub use crate::converter::{Conversion, Converter};
pub use crate::derivation::{
  assign_spans, build_derivation, AppliedRule, ChildPoint, Derivation, Point,
};
pub use crate::dialect::Dialect;
pub use crate::dictionary::{Category, Dictionary, PoS, Word};
pub use crate::error::{Error, Result};
pub use crate::format::{JapaneseFormat, LabelFormat, SimpleFormat};
pub use crate::label::{Direction, NodeLabel, NonterminalLabel, TerminalLabel};
pub use crate::labeler::label_tree;
pub use crate::sentence::GoldSuperTaggedSentence;
pub use crate::syntree::{Constituent, ParseTree, Span};
