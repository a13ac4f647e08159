use std::path::PathBuf;

use transpack_common::BundlerConfig;

#[derive(Debug)]
pub struct BuildOutput {
  pub config: BundlerConfig,
  pub config_path: PathBuf,
  /// False when the existing configuration file was already up to date.
  pub written: bool,
}
