use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::version::BuildVersion;

/// Entry-point name to source-module path, in insertion order. Keys are
/// unique per build; the order is kept so generated output is stable.
pub type Entries = IndexMap<String, String>;

/// Per-build transpile descriptor: where output goes, which version tag
/// this build carries and which entry points the bundler starts from.
/// A read-only snapshot, assembled once per build. Field aliases accept
/// the descriptor's historical upper-case names.
#[derive(Debug, Clone, Deserialize)]
pub struct TranspileOptions {
  #[serde(alias = "OUT_DIR")]
  pub out_dir: PathBuf,
  #[serde(alias = "VERSION")]
  pub version: BuildVersion,
  #[serde(alias = "BASE_URL")]
  pub base_url: String,
  #[serde(alias = "ENTRIES")]
  pub entries: Entries,
}

#[cfg(test)]
mod tests {
  use super::TranspileOptions;

  #[test]
  fn deserializes_the_historical_descriptor_shape() {
    let descriptor: TranspileOptions = serde_json::from_str(
      r#"{
        "OUT_DIR": "/project/static-transpile/js",
        "VERSION": 1722470000,
        "BASE_URL": "/static/js/",
        "ENTRIES": {"editor": "/project/.transpile/js/editor.mjs"}
      }"#,
    )
    .unwrap();
    assert_eq!(descriptor.base_url, "/static/js/");
    assert_eq!(descriptor.entries["editor"], "/project/.transpile/js/editor.mjs");
    assert_eq!(descriptor.version.as_str(), "1722470000");
  }
}
