mod define_variables;
mod module_rules;

pub use define_variables::{STATIC_URL_HELPER, VERSION_CONSTANT, predefined_variables};

use transpack_common::{
  BundleMode, BundlerConfig, ConfigPlugin, ModuleOptions, OutputOptions, Settings,
  TranspileOptions,
};

/// Renders the bundler configuration for one build. Pure over its inputs:
/// no I/O, nothing mutated, the same snapshots always produce the same
/// configuration.
pub fn render_config(settings: &Settings, transpile: &TranspileOptions) -> BundlerConfig {
  BundlerConfig {
    mode: BundleMode::from_debug(settings.debug),
    module: Some(ModuleOptions { rules: vec![module_rules::script_rule(settings.debug)] }),
    output: OutputOptions {
      path: transpile.out_dir.clone(),
      chunk_filename: format!("{}-[id].js", transpile.version),
      public_path: transpile.base_url.clone(),
    },
    plugins: vec![ConfigPlugin::Define(predefined_variables(settings, &transpile.version))],
    entry: transpile.entries.clone(),
  }
}

#[cfg(test)]
mod tests {
  use transpack_common::{BundleMode, Entries, Settings, TranspileOptions};

  use super::{STATIC_URL_HELPER, render_config};

  fn transpile_options() -> TranspileOptions {
    TranspileOptions {
      out_dir: "/dist".into(),
      version: "abc123".into(),
      base_url: "/assets/".into(),
      entries: Entries::from_iter([("main".to_string(), "./src/main.js".to_string())]),
    }
  }

  #[test]
  fn debug_renders_development_mode() {
    let config = render_config(&Settings::new(true, "/static/"), &transpile_options());
    assert_eq!(config.mode, BundleMode::Development);
  }

  #[test]
  fn non_debug_renders_production_mode() {
    let config = render_config(&Settings::new(false, "/static/"), &transpile_options());
    assert_eq!(config.mode, BundleMode::Production);
  }

  #[test]
  fn chunk_filename_carries_the_version() {
    let config = render_config(&Settings::new(false, "/static/"), &transpile_options());
    assert_eq!(config.output.chunk_filename, "abc123-[id].js");
  }

  #[test]
  fn entries_pass_through_unmodified() {
    let transpile = transpile_options();
    let config = render_config(&Settings::new(true, "/static/"), &transpile);
    assert_eq!(config.entry, transpile.entries);
  }

  #[test]
  fn debug_rule_excludes_third_party_modules() {
    let debug = render_config(&Settings::new(true, "/static/"), &transpile_options());
    let release = render_config(&Settings::new(false, "/static/"), &transpile_options());
    assert!(debug.module.unwrap().rules[0].exclude.is_some());
    assert!(release.module.unwrap().rules[0].exclude.is_none());
  }

  #[test]
  fn manifest_storage_production_build_end_to_end() {
    let settings = Settings::new(false, "/static/")
      .with_storage("transpack.storage.ManifestStaticFilesStorage");
    let config = render_config(&settings, &transpile_options());

    assert_eq!(config.mode, BundleMode::Production);
    assert_eq!(config.output.chunk_filename, "abc123-[id].js");
    assert_eq!(config.output.public_path, "/assets/");
    assert_eq!(config.entry["main"], "./src/main.js");
    assert!(!config.define_plugin().unwrap().contains(STATIC_URL_HELPER));
  }
}
