use std::fmt;

use serde::{Deserialize, Serialize};

/// Build identifier used for cache busting. Stable within one build,
/// distinct across builds whose output must not be cache-conflated.
/// Usually the epoch-second timestamp of the build, but any string works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VersionRepr", into = "VersionRepr")]
pub struct BuildVersion(String);

impl BuildVersion {
  pub fn new(version: impl Into<String>) -> Self {
    Self(version.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// The JSON value injected into generated code: epoch-style versions
  /// stay numeric (the historical wire format), everything else becomes a
  /// quoted string so the injected code stays well-formed.
  pub fn as_json(&self) -> serde_json::Value {
    match self.0.parse::<u64>() {
      Ok(number) if number.to_string() == self.0 => serde_json::Value::from(number),
      _ => serde_json::Value::from(self.0.as_str()),
    }
  }

  pub fn as_js_expr(&self) -> String {
    self.as_json().to_string()
  }
}

impl From<u64> for BuildVersion {
  fn from(timestamp: u64) -> Self {
    Self(timestamp.to_string())
  }
}

impl From<&str> for BuildVersion {
  fn from(version: &str) -> Self {
    Self(version.to_string())
  }
}

impl From<String> for BuildVersion {
  fn from(version: String) -> Self {
    Self(version)
  }
}

impl fmt::Display for BuildVersion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Wire form: the descriptor historically carries numeric versions.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum VersionRepr {
  Number(u64),
  Text(String),
}

impl From<VersionRepr> for BuildVersion {
  fn from(repr: VersionRepr) -> Self {
    match repr {
      VersionRepr::Number(timestamp) => Self::from(timestamp),
      VersionRepr::Text(version) => Self(version),
    }
  }
}

impl From<BuildVersion> for VersionRepr {
  fn from(version: BuildVersion) -> Self {
    match version.as_json() {
      serde_json::Value::Number(number) => {
        number.as_u64().map_or_else(|| Self::Text(version.0.clone()), Self::Number)
      }
      _ => Self::Text(version.0),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::BuildVersion;

  #[test]
  fn numeric_versions_inject_as_numbers() {
    let version = BuildVersion::from(1_722_470_000_u64);
    assert_eq!(version.as_js_expr(), "1722470000");
    assert_eq!(version.to_string(), "1722470000");
  }

  #[test]
  fn text_versions_inject_quoted() {
    let version = BuildVersion::new("abc123");
    assert_eq!(version.as_js_expr(), "\"abc123\"");
  }

  #[test]
  fn zero_padded_text_is_not_mistaken_for_a_number() {
    assert_eq!(BuildVersion::new("0123").as_js_expr(), "\"0123\"");
  }

  #[test]
  fn deserializes_from_number_or_string() {
    let number: BuildVersion = serde_json::from_str("1722470000").unwrap();
    let text: BuildVersion = serde_json::from_str("\"abc123\"").unwrap();
    assert_eq!(number.as_str(), "1722470000");
    assert_eq!(text.as_str(), "abc123");
  }
}
