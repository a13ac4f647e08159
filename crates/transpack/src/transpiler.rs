use transpack_common::{
  BuildVersion, BundlerConfig, NormalizedProjectOptions, ProjectOptions, TranspileOptions,
};
use transpack_error::BuildResult;
use transpack_fs::FileSystem;

use crate::{
  last_run::LastRunStore,
  stages::{
    emit::{emit_config_js, write_config, write_output_marker},
    package::{PackageOutput, PackageStage},
    render::render_config,
    scan::ScanStage,
  },
  static_url::StaticUrls,
  types::build_output::BuildOutput,
  utils::normalize_options::normalize_options,
};

/// Entry point of the pipeline. Owns the normalized project options and a
/// file-system handle; each stage borrows both.
pub struct Transpiler<F> {
  fs: F,
  options: NormalizedProjectOptions,
}

impl<F: FileSystem> Transpiler<F> {
  pub fn new(options: ProjectOptions, fs: F) -> BuildResult<Self> {
    let options = normalize_options(options)?;
    Ok(Self { fs, options })
  }

  pub fn options(&self) -> &NormalizedProjectOptions {
    &self.options
  }

  /// Stamps the build version used for cache busting. Callers that manage
  /// versions themselves pass one in the raw options instead.
  #[must_use]
  pub fn with_version(mut self, version: BuildVersion) -> Self {
    self.options.version = Some(version);
    self
  }

  /// Assembles the per-build transpile descriptor.
  pub fn scan(&self) -> BuildResult<TranspileOptions> {
    ScanStage { options: &self.options, fs: &self.fs }.scan()
  }

  /// Renders the bundler configuration for a descriptor.
  pub fn render(&self, transpile: &TranspileOptions) -> BundlerConfig {
    render_config(&self.options.settings, transpile)
  }

  /// Scan, render and write: produces the configuration file the bundler
  /// is pointed at, plus the generated-output marker.
  pub fn build(&self) -> BuildResult<BuildOutput> {
    let transpile = self.scan()?;
    let config = self.render(&transpile);
    let config_js = emit_config_js(&config);
    let config_path = self.options.config_path();
    let written = write_config(&self.fs, &config_path, &config_js)?;
    write_output_marker(&self.fs, &self.options.out_dir)?;
    Ok(BuildOutput { config, config_path, written })
  }

  /// Joins the application package manifests into the cache directory's
  /// `package.json`.
  pub fn merge_packages(&self, force: bool) -> BuildResult<PackageOutput> {
    PackageStage { options: &self.options, fs: &self.fs }.run(force)
  }

  pub fn last_run(&self) -> LastRunStore<'_, F> {
    LastRunStore::new(&self.fs, self.options.last_run_path())
  }

  pub fn static_urls(&self, version: BuildVersion) -> StaticUrls {
    StaticUrls::new(self.options.static_base_url.clone(), version)
  }
}
