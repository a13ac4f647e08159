use std::path::PathBuf;

use anyhow::Context;
use serde_json::Value;
use transpack_common::NormalizedProjectOptions;
use transpack_error::{BuildError, BuildResult};
use transpack_fs::FileSystem;
use transpack_utils::{hex_digest::xxhash_hex, json5::parse_json5, json_merge::deep_merge};

/// Joins the package manifests of every application directory into the
/// single `package.json` the dependency installer consumes. A `.json5`
/// manifest takes precedence over a plain `.json` one in the same
/// directory.
pub struct PackageStage<'a, F> {
  pub options: &'a NormalizedProjectOptions,
  pub fs: &'a F,
}

#[derive(Debug)]
pub struct PackageOutput {
  pub package_path: PathBuf,
  /// Digest over all source manifests, hex encoded.
  pub digest: String,
  /// Whether the dependency set differs from the previous run. The caller
  /// decides whether that warrants re-running its installer.
  pub changed: bool,
  pub manifests: usize,
}

impl<F: FileSystem> PackageStage<'_, F> {
  pub fn run(&self, force: bool) -> BuildResult<PackageOutput> {
    let mut package = Value::Object(serde_json::Map::new());
    let mut raw_manifests = vec![];
    let mut errors = vec![];

    for app_dir in &self.options.app_dirs {
      let json5_path = app_dir.join("package.json5");
      let json_path = app_dir.join("package.json");

      let (path, json5) = if self.fs.exists(&json5_path) {
        (json5_path, true)
      } else if self.fs.exists(&json_path) {
        (json_path, false)
      } else {
        continue;
      };

      let parsed = self
        .fs
        .read_to_string(&path)
        .map_err(anyhow::Error::from)
        .and_then(|text| {
          let value = if json5 {
            parse_json5(&text)?
          } else {
            serde_json::from_str(&text)?
          };
          Ok((text, value))
        })
        .with_context(|| format!("failed to load {}", path.display()));

      match parsed {
        Ok((text, value)) => {
          deep_merge(&mut package, &value);
          raw_manifests.push(text);
        }
        Err(error) => errors.push(error),
      }
    }

    if !errors.is_empty() {
      return Err(BuildError::from(errors));
    }

    let package_path = self.options.package_json_path();
    self
      .fs
      .create_dir_all(&self.options.cache_dir)
      .with_context(|| format!("failed to create {}", self.options.cache_dir.display()))?;
    self
      .fs
      .write(&package_path, serde_json::to_string(&package).map_err(anyhow::Error::from)?.as_bytes())
      .with_context(|| format!("failed to write {}", package_path.display()))?;

    let digest = xxhash_hex(raw_manifests.iter().map(String::as_bytes));
    let changed = force || digest != self.cached_digest();
    if changed {
      self.store_digest(&digest)?;
    } else {
      tracing::debug!("package manifests unchanged");
    }

    Ok(PackageOutput { package_path, digest, changed, manifests: raw_manifests.len() })
  }

  fn cached_digest(&self) -> String {
    self
      .fs
      .read_to_string(&self.options.package_hash_path())
      .ok()
      .and_then(|text| serde_json::from_str::<Value>(&text).ok())
      .and_then(|value| value.get("hash").and_then(Value::as_str).map(str::to_string))
      .unwrap_or_default()
  }

  fn store_digest(&self, digest: &str) -> BuildResult<()> {
    let path = self.options.package_hash_path();
    let payload = serde_json::json!({ "hash": digest }).to_string();
    self
      .fs
      .write(&path, payload.as_bytes())
      .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
  }
}
