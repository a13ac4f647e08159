mod js_writer;

use std::path::Path;

use anyhow::Context;
use transpack_common::{
  BundlerConfig, ConfigPlugin, DefinePlugin, DefineValue, Entries, ModuleOptions, ModuleRule,
  OutputOptions,
};
use transpack_fs::FileSystem;

use js_writer::JsWriter;

/// Serializes a rendered configuration to the JavaScript module the
/// bundler is pointed at. Output is stable: the same configuration always
/// produces byte-identical text.
pub fn emit_config_js(config: &BundlerConfig) -> String {
  let mut w = JsWriter::new();
  w.line("const rspack = require(\"@rspack/core\")");
  w.blank();
  w.open("module.exports = {");
  w.line(&format!("mode: {},", js_string(&config.mode.to_string())));
  if let Some(module) = &config.module {
    emit_module(&mut w, module);
  }
  emit_output(&mut w, &config.output);
  emit_plugins(&mut w, &config.plugins);
  emit_entries(&mut w, &config.entry);
  w.close("}");
  w.finish()
}

/// Writes the configuration file, skipping the write when the content is
/// already up to date so the bundler's own change detection stays quiet.
/// Returns whether a write happened.
pub fn write_config<F: FileSystem>(fs: &F, path: &Path, config_js: &str) -> anyhow::Result<bool> {
  if let Ok(existing) = fs.read_to_string(path) {
    if existing == config_js {
      tracing::debug!(path = %path.display(), "bundler config unchanged");
      return Ok(false);
    }
  }
  if let Some(parent) = path.parent() {
    fs.create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  fs.write(path, config_js.as_bytes())
    .with_context(|| format!("failed to write {}", path.display()))?;
  tracing::debug!(path = %path.display(), "bundler config written");
  Ok(true)
}

const OUTPUT_MARKER: &str = "These files have been automatically generated. DO NOT EDIT THEM!\n\
  Changes will be overwritten. Edit the original modules in one of the\n\
  applications and rerun the transpile pipeline.\n";

/// Drops a README into the output directory warning that its content is
/// generated.
pub fn write_output_marker<F: FileSystem>(fs: &F, out_dir: &Path) -> anyhow::Result<()> {
  fs.create_dir_all(out_dir)
    .with_context(|| format!("failed to create {}", out_dir.display()))?;
  fs.write(&out_dir.join("README.txt"), OUTPUT_MARKER.as_bytes())
    .with_context(|| format!("failed to write marker into {}", out_dir.display()))?;
  Ok(())
}

fn emit_module(w: &mut JsWriter, module: &ModuleOptions) {
  w.open("module: {");
  w.open("rules: [");
  for (index, rule) in module.rules.iter().enumerate() {
    emit_rule(w, rule, index + 1 == module.rules.len());
  }
  w.close("]");
  w.close("},");
}

fn emit_rule(w: &mut JsWriter, rule: &ModuleRule, last: bool) {
  w.open("{");
  w.line(&format!("test: {},", rule.test.as_literal()));
  if let Some(exclude) = &rule.exclude {
    w.line(&format!("exclude: {},", exclude.as_literal()));
  }
  w.open("use: {");
  w.line(&format!("loader: {},", js_string(&rule.r#use.loader)));
  w.open("options: {");
  emit_string_list(w, "presets", &rule.r#use.options.presets, ",");
  emit_string_list(w, "plugins", &rule.r#use.options.plugins, "");
  w.close("}");
  w.close("}");
  w.close(if last { "}" } else { "}," });
}

fn emit_string_list(w: &mut JsWriter, name: &str, items: &[String], suffix: &str) {
  if items.is_empty() {
    w.line(&format!("{name}: []{suffix}"));
    return;
  }
  w.open(&format!("{name}: ["));
  for (index, item) in items.iter().enumerate() {
    let separator = if index + 1 == items.len() { "" } else { "," };
    w.line(&format!("{}{separator}", js_string(item)));
  }
  w.close(&format!("]{suffix}"));
}

fn emit_output(w: &mut JsWriter, output: &OutputOptions) {
  let path = dunce::simplified(&output.path).display().to_string();
  w.open("output: {");
  w.line(&format!("path: {},", js_string(&path)));
  w.line(&format!("chunkFilename: {},", js_string(&output.chunk_filename)));
  w.line(&format!("publicPath: {}", js_string(&output.public_path)));
  w.close("},");
}

fn emit_plugins(w: &mut JsWriter, plugins: &[ConfigPlugin]) {
  if plugins.is_empty() {
    w.line("plugins: [],");
    return;
  }
  w.open("plugins: [");
  for (index, plugin) in plugins.iter().enumerate() {
    let ConfigPlugin::Define(define) = plugin;
    emit_define_plugin(w, define, if index + 1 == plugins.len() { "" } else { "," });
  }
  w.close("],");
}

fn emit_define_plugin(w: &mut JsWriter, define: &DefinePlugin, suffix: &str) {
  if define.definitions.is_empty() {
    w.line(&format!("new rspack.DefinePlugin({{}}){suffix}"));
    return;
  }
  w.open("new rspack.DefinePlugin({");
  for (index, (name, value)) in define.definitions.iter().enumerate() {
    let separator = if index + 1 == define.definitions.len() { "" } else { "," };
    w.line(&format!("{}: {}{separator}", js_key(name), emit_define_value(value)));
  }
  w.close(&format!("}}){suffix}"));
}

// A `Json` definition injects its literal representation; `Code` is
// carried as a string value, which the define plugin reads as a code
// fragment.
fn emit_define_value(value: &DefineValue) -> String {
  match value {
    DefineValue::Json(json) => json.to_string(),
    DefineValue::Code(expr) => js_string(expr),
  }
}

fn emit_entries(w: &mut JsWriter, entries: &Entries) {
  if entries.is_empty() {
    w.line("entry: {}");
    return;
  }
  w.open("entry: {");
  for (index, (name, path)) in entries.iter().enumerate() {
    let separator = if index + 1 == entries.len() { "" } else { "," };
    w.line(&format!("{}: {}{separator}", js_string(name), js_string(path)));
  }
  w.close("}");
}

fn js_string(text: &str) -> String {
  serde_json::Value::from(text).to_string()
}

fn js_key(name: &str) -> String {
  let mut chars = name.chars();
  let identifier = chars.next().is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
  if identifier { name.to_string() } else { js_string(name) }
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use transpack_common::{Entries, Settings, TranspileOptions};
  use transpack_fs::MemoryFileSystem;

  use crate::stages::render::render_config;

  use super::{emit_config_js, write_config};

  fn production_config_js() -> String {
    let settings = Settings::new(false, "/static/");
    let transpile = TranspileOptions {
      out_dir: "/project/static-transpile/js".into(),
      version: 1_722_470_000_u64.into(),
      base_url: "/static/js/".into(),
      entries: Entries::from_iter([(
        "editor".to_string(),
        "/project/.transpile/js/editor.mjs".to_string(),
      )]),
    };
    emit_config_js(&render_config(&settings, &transpile))
  }

  #[test]
  fn emits_the_full_configuration_module() {
    let expected = r#"const rspack = require("@rspack/core")

module.exports = {
    mode: "production",
    module: {
        rules: [
            {
                test: /\.(js|mjs)$/,
                use: {
                    loader: "babel-loader",
                    options: {
                        presets: [
                            "@babel/preset-env"
                        ],
                        plugins: [
                            "@babel/plugin-syntax-dynamic-import"
                        ]
                    }
                }
            }
        ]
    },
    output: {
        path: "/project/static-transpile/js",
        chunkFilename: "1722470000-[id].js",
        publicPath: "/static/js/"
    },
    plugins: [
        new rspack.DefinePlugin({
            transpile_VERSION: 1722470000,
            staticUrl: "(url => \"/static/\" + url + \"?v=\" + 1722470000)"
        })
    ],
    entry: {
        "editor": "/project/.transpile/js/editor.mjs"
    }
}
"#;
    assert_eq!(production_config_js(), expected);
  }

  #[test]
  fn emission_is_stable() {
    assert_eq!(production_config_js(), production_config_js());
  }

  #[test]
  fn write_skips_unchanged_content() {
    let fs = MemoryFileSystem::default();
    let path = Path::new("project/.transpile/webpack.config.js");
    let config_js = production_config_js();

    assert!(write_config(&fs, path, &config_js).unwrap());
    assert!(!write_config(&fs, path, &config_js).unwrap());

    let changed = config_js.replace("production", "development");
    assert!(write_config(&fs, path, &changed).unwrap());
  }
}
