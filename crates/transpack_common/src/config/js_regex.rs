use std::fmt;

use serde::{Serialize, Serializer};

/// Source text of a JavaScript regular expression. The configuration file
/// needs regex literals (`/\.(js|mjs)$/`), which JSON cannot carry, so the
/// source is kept as-is and rendered to a literal at emission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsRegex(String);

impl JsRegex {
  pub fn new(source: impl Into<String>) -> Self {
    Self(source.into())
  }

  pub fn source(&self) -> &str {
    &self.0
  }

  pub fn as_literal(&self) -> String {
    format!("/{}/", self.0)
  }
}

impl fmt::Display for JsRegex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "/{}/", self.0)
  }
}

impl Serialize for JsRegex {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.as_literal())
  }
}
