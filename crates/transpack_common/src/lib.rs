mod config;
mod project_options;
mod settings;
mod transpile_options;
mod version;

pub use crate::{
  config::{
    BundlerConfig, ModuleOptions,
    bundle_mode::BundleMode,
    define_plugin::{ConfigPlugin, DefinePlugin, DefineValue},
    js_regex::JsRegex,
    module_rule::{LoaderOptions, LoaderSpec, ModuleRule},
    output_options::OutputOptions,
  },
  project_options::{ProjectOptions, normalized_project_options::NormalizedProjectOptions},
  settings::{Settings, StorageKind},
  transpile_options::{Entries, TranspileOptions},
  version::BuildVersion,
};
