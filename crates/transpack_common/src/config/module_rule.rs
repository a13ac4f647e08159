use serde::Serialize;

use crate::config::js_regex::JsRegex;

#[derive(Debug, Clone, Serialize)]
pub struct ModuleRule {
  pub test: JsRegex,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub exclude: Option<JsRegex>,
  pub r#use: LoaderSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoaderSpec {
  pub loader: String,
  pub options: LoaderOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoaderOptions {
  pub presets: Vec<String>,
  pub plugins: Vec<String>,
}
