use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct ConfigArgs {
  /// Project directory containing transpack.json5
  #[clap(long, short = 'p', default_value = ".")]
  pub project_dir: PathBuf,

  /// Reuse the recorded build version instead of stamping a new one
  #[clap(long)]
  pub keep_version: bool,
}

#[derive(Args)]
pub struct PackageJsonArgs {
  /// Project directory containing transpack.json5
  #[clap(long, short = 'p', default_value = ".")]
  pub project_dir: PathBuf,

  /// Report the dependency set as changed even when the digest matches
  #[clap(long, short = 'f')]
  pub force: bool,
}

#[derive(Args)]
pub struct StaticUrlArgs {
  /// Project directory containing transpack.json5
  #[clap(long, short = 'p', default_value = ".")]
  pub project_dir: PathBuf,

  /// Asset path to resolve, e.g. js/editor.mjs
  pub path: String,
}
