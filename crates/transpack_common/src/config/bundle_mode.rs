use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleMode {
  Development,
  Production,
}

impl BundleMode {
  pub fn from_debug(debug: bool) -> Self {
    if debug { Self::Development } else { Self::Production }
  }
}

impl fmt::Display for BundleMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}
