use std::path::PathBuf;

use crate::{settings::Settings, transpile_options::Entries, version::BuildVersion};

#[derive(Debug, Clone)]
pub struct NormalizedProjectOptions {
  pub settings: Settings,
  pub project_dir: PathBuf,
  pub cache_dir: PathBuf,
  pub out_dir: PathBuf,
  pub static_base_url: String,
  pub base_url: String,
  /// Validated when the descriptor is assembled; commands that do not
  /// render a build run without one.
  pub version: Option<BuildVersion>,
  pub entries: Option<Entries>,
  pub js_roots: Vec<PathBuf>,
  pub app_dirs: Vec<PathBuf>,
}

impl NormalizedProjectOptions {
  pub fn config_path(&self) -> PathBuf {
    self.cache_dir.join("webpack.config.js")
  }

  /// Where collected source modules live; entry values point below it.
  pub fn collected_js_dir(&self) -> PathBuf {
    self.cache_dir.join("js")
  }

  pub fn package_json_path(&self) -> PathBuf {
    self.cache_dir.join("package.json")
  }

  pub fn package_hash_path(&self) -> PathBuf {
    self.cache_dir.join("package_hash.json")
  }

  pub fn last_run_path(&self) -> PathBuf {
    self.cache_dir.join("time")
  }
}
