pub mod normalized_project_options;

use std::path::PathBuf;

use serde::Deserialize;

use crate::{settings::Settings, transpile_options::Entries, version::BuildVersion};

/// Raw project options as read from a project file or assembled by a
/// caller. Everything is optional here; normalization fills in defaults
/// and rejects what cannot be derived.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectOptions {
  pub settings: Option<Settings>,

  /// Project root. Other paths default to locations below it.
  pub project_dir: Option<PathBuf>,
  /// Working directory for generated files (`<project_dir>/.transpile`).
  pub cache_dir: Option<PathBuf>,
  /// Bundler output directory (`<project_dir>/static-transpile/js`).
  pub out_dir: Option<PathBuf>,

  /// Base URL static files are served from. Defaults to the settings'
  /// static URL.
  pub static_base_url: Option<String>,
  /// Public URL of the transpiled bundle directory.
  pub base_url: Option<String>,

  pub version: Option<BuildVersion>,

  /// Explicit entry mapping. When absent, entries are discovered by
  /// scanning `js_roots` for `*.mjs` modules.
  pub entries: Option<Entries>,
  pub js_roots: Option<Vec<PathBuf>>,

  /// Application directories whose package manifests get merged.
  pub app_dirs: Option<Vec<PathBuf>>,
}
