use std::path::PathBuf;

use anyhow::Context;
use rustc_hash::FxHashMap;
use transpack_fs::FileSystem;

pub const TRANSPILE: &str = "transpile";
pub const NPM_INSTALL: &str = "npm_install";

/// Keyed record of when each pipeline step last ran, persisted inside the
/// cache directory. The recorded transpile timestamp doubles as the build
/// version used for cache busting.
pub struct LastRunStore<'a, F> {
  fs: &'a F,
  path: PathBuf,
}

impl<'a, F: FileSystem> LastRunStore<'a, F> {
  pub fn new(fs: &'a F, path: PathBuf) -> Self {
    Self { fs, path }
  }

  /// Epoch seconds of the last recorded run, 0 when never recorded.
  pub fn get(&self, name: &str) -> u64 {
    self.load().get(name).copied().unwrap_or(0)
  }

  pub fn set(&self, name: &str, timestamp: u64) -> anyhow::Result<()> {
    // Re-read before writing so keys recorded by another command in the
    // meantime survive.
    let mut runs = self.load();
    runs.insert(name.to_string(), timestamp);
    if let Some(parent) = self.path.parent() {
      self
        .fs
        .create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let payload = serde_json::to_string(&runs).context("failed to encode run record")?;
    self
      .fs
      .write(&self.path, payload.as_bytes())
      .with_context(|| format!("failed to write {}", self.path.display()))?;
    Ok(())
  }

  // A missing or corrupt record counts as never run.
  fn load(&self) -> FxHashMap<String, u64> {
    self
      .fs
      .read_to_string(&self.path)
      .ok()
      .and_then(|text| serde_json::from_str(&text).ok())
      .unwrap_or_default()
  }
}
