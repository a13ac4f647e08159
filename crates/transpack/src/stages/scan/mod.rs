use anyhow::Context;
use transpack_common::{Entries, NormalizedProjectOptions, TranspileOptions};
use transpack_error::{BuildError, BuildResult};
use transpack_fs::FileSystem;

/// Assembles the per-build transpile descriptor: the entry mapping, the
/// output directory, the public base URL and the build version.
pub struct ScanStage<'a, F> {
  pub options: &'a NormalizedProjectOptions,
  pub fs: &'a F,
}

impl<F: FileSystem> ScanStage<'_, F> {
  pub fn scan(&self) -> BuildResult<TranspileOptions> {
    let mut errors = vec![];

    let entries = match &self.options.entries {
      Some(entries) => entries.clone(),
      None => self.discover_entries()?,
    };
    if entries.is_empty() {
      errors.push(anyhow::anyhow!(
        "no entry points: set `entries` or place *.mjs modules under the configured `js_roots`"
      ));
    }

    let Some(version) = self.options.version.clone() else {
      errors.push(anyhow::anyhow!("a build version is required"));
      return Err(BuildError::from(errors));
    };
    if !errors.is_empty() {
      return Err(BuildError::from(errors));
    }

    Ok(TranspileOptions {
      out_dir: self.options.out_dir.clone(),
      version,
      base_url: self.options.base_url.clone(),
      entries,
    })
  }

  /// Walks the JavaScript roots for `*.mjs` entry modules. The entry name
  /// is the part of the file name before the first dot; its path points at
  /// the collected copy of the module, where sibling imports across
  /// applications resolve. On name collisions the first root wins.
  fn discover_entries(&self) -> BuildResult<Entries> {
    let collected_dir = self.options.collected_js_dir();
    let mut entries = Entries::default();

    for root in &self.options.js_roots {
      let files = self
        .fs
        .walk(root)
        .with_context(|| format!("failed to scan {}", root.display()))?;
      for file in files {
        if file.extension() != Some(std::ffi::OsStr::new("mjs")) {
          continue;
        }
        let Some(file_name) = file.file_name().and_then(|name| name.to_str()) else {
          continue;
        };
        let Some(name) = file_name.split('.').next() else {
          continue;
        };
        let collected = collected_dir.join(file_name);
        let collected = dunce::simplified(&collected).display().to_string();
        if entries.contains_key(name) {
          tracing::debug!(entry = name, module = %file.display(), "duplicate entry name, keeping the first");
          continue;
        }
        entries.insert(name.to_string(), collected);
      }
    }

    Ok(entries)
  }
}
