use std::collections::HashMap;
use std::fmt;

macro_rules! handle {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct $name(pub u32);

    impl $name {
      pub fn index(self) -> usize {
        self.0 as usize
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", stringify!($name), self.0)
      }
    }
  };
}

handle!(
  /// Interned surface form or base form
  Word
);
handle!(
  /// Interned part-of-speech tag
  PoS
);
handle!(
  /// Interned CCG category, e.g. `S[dcl]\NP`
  Category
);

/// Bidirectional string <-> dense index table. Inserting the same key twice
/// returns the same index.
#[derive(Debug, Default, Clone)]
struct Interner {
  keys: Vec<String>,
  map: HashMap<String, u32>,
}

impl Interner {
  fn get_or_insert(&mut self, key: &str) -> u32 {
    if let Some(&idx) = self.map.get(key) {
      idx
    } else {
      let idx = u32::try_from(self.keys.len()).expect("more than u32::MAX interned keys");
      self.keys.push(key.to_string());
      self.map.insert(key.to_string(), idx);
      idx
    }
  }

  fn get(&self, key: &str) -> Option<u32> {
    self.map.get(key).copied()
  }

  fn key(&self, idx: usize) -> Option<&str> {
    self.keys.get(idx).map(String::as_str)
  }

  fn len(&self) -> usize {
    self.keys.len()
  }
}

/// Shared intern table for the words, parts of speech and categories seen
/// across a corpus. Handles from one dictionary are meaningless in another.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
  words: Interner,
  pos: Interner,
  categories: Interner,
}

impl Dictionary {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get_or_create_word(&mut self, s: &str) -> Word {
    Word(self.words.get_or_insert(s))
  }

  pub fn get_or_create_pos(&mut self, s: &str) -> PoS {
    PoS(self.pos.get_or_insert(s))
  }

  pub fn get_or_create_category(&mut self, s: &str) -> Category {
    Category(self.categories.get_or_insert(s))
  }

  pub fn get_word(&self, s: &str) -> Option<Word> {
    self.words.get(s).map(Word)
  }

  pub fn get_pos(&self, s: &str) -> Option<PoS> {
    self.pos.get(s).map(PoS)
  }

  pub fn get_category(&self, s: &str) -> Option<Category> {
    self.categories.get(s).map(Category)
  }

  pub fn word(&self, w: Word) -> Option<&str> {
    self.words.key(w.index())
  }

  pub fn pos(&self, p: PoS) -> Option<&str> {
    self.pos.key(p.index())
  }

  pub fn category(&self, c: Category) -> Option<&str> {
    self.categories.key(c.index())
  }

  pub fn num_words(&self) -> usize {
    self.words.len()
  }

  pub fn num_pos(&self) -> usize {
    self.pos.len()
  }

  pub fn num_categories(&self) -> usize {
    self.categories.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_interning_is_idempotent() {
    let mut dict = Dictionary::new();

    let np = dict.get_or_create_category("NP[nc,nm]");
    let s = dict.get_or_create_category("S[dcl]");
    assert_eq!(dict.get_or_create_category("NP[nc,nm]"), np);
    assert_ne!(np, s);
    assert_eq!(dict.num_categories(), 2);

    let w = dict.get_or_create_word("Dutch");
    assert_eq!(dict.get_or_create_word("Dutch"), w);
    assert_eq!(dict.word(w), Some("Dutch"));
  }

  #[test]
  fn test_kinds_are_separate() {
    let mut dict = Dictionary::new();

    // same key, three tables
    let w = dict.get_or_create_word("NN");
    let p = dict.get_or_create_pos("NN");
    let c = dict.get_or_create_category("NN");
    assert_eq!((w.0, p.0, c.0), (0, 0, 0));
    assert_eq!(dict.num_words(), 1);
    assert_eq!(dict.num_pos(), 1);
    assert_eq!(dict.num_categories(), 1);

    assert_eq!(dict.get_category("S"), None);
    assert_eq!(dict.category(Category(7)), None);
  }
}
