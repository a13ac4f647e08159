pub mod bundle_mode;
pub mod define_plugin;
pub mod js_regex;
pub mod module_rule;
pub mod output_options;

use serde::Serialize;

use crate::transpile_options::Entries;
use bundle_mode::BundleMode;
use define_plugin::{ConfigPlugin, DefinePlugin};
use module_rule::ModuleRule;
use output_options::OutputOptions;

/// The rendered bundler configuration. This is the sole interface
/// boundary towards the bundler: everything in here must be structurally
/// acceptable to it.
#[derive(Debug, Clone, Serialize)]
pub struct BundlerConfig {
  pub mode: BundleMode,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub module: Option<ModuleOptions>,
  pub output: OutputOptions,
  pub plugins: Vec<ConfigPlugin>,
  pub entry: Entries,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModuleOptions {
  pub rules: Vec<ModuleRule>,
}

impl BundlerConfig {
  /// The first define plugin, if any. Convenient for inspecting which
  /// constants a configuration injects.
  pub fn define_plugin(&self) -> Option<&DefinePlugin> {
    self.plugins.iter().map(|ConfigPlugin::Define(plugin)| plugin).next()
  }
}
