/// helper macro for initializing a regex with lazy_static!
macro_rules! regex_static {
  ($name:ident, $pattern:expr) => {
    lazy_static! {
      static ref $name: regex::Regex = regex::Regex::new($pattern).unwrap();
    }
  };
}

/// Splits a token into its space-separated fields, ignoring leading and
/// trailing blanks. Only ASCII blanks separate fields, so full-width
/// characters inside Japanese words and categories stay intact.
///
/// ```
/// assert_eq!(ccgchart::utils::fields(" T S[dcl]  0 2 "), vec!["T", "S[dcl]", "0", "2"]);
/// assert!(ccgchart::utils::fields("   ").is_empty());
/// ```
pub fn fields(token: &str) -> Vec<&str> {
  regex_static!(FIELD_SEP, r"[ \t]+");
  let trimmed = token.trim_matches(|c: char| c == ' ' || c == '\t');
  if trimmed.is_empty() {
    Vec::new()
  } else {
    FIELD_SEP.split(trimmed).collect()
  }
}

