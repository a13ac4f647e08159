use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
  pub path: PathBuf,
  /// `<version>-[id].js`; the bundler substitutes the chunk id.
  pub chunk_filename: String,
  pub public_path: String,
}
