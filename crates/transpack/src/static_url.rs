use serde::Serialize;
use transpack_common::BuildVersion;
use transpack_utils::url_ext::join_url;

/// Rewrites a source module path to its transpiled location:
/// `js/editor.mjs` becomes `js/transpile/editor.js`. Paths outside the
/// transpiled tree pass through unchanged.
pub fn transpiled_path(path: &str) -> String {
  match path.strip_prefix("js/").and_then(|rest| rest.strip_suffix(".mjs")) {
    Some(stem) => format!("js/transpile/{stem}.js"),
    None => path.to_string(),
  }
}

/// Versioned public URL for a static asset, with source module paths
/// redirected to their transpiled output.
pub fn static_url(static_base_url: &str, path: &str, version: &BuildVersion) -> String {
  format!("{}?v={version}", join_url(static_base_url, &transpiled_path(path)))
}

/// The URL globals a page exposes so frontend code can locate static
/// assets and the transpiled bundles at their current version.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticUrls {
  pub static_base_url: String,
  pub transpile_base_url: String,
  pub version: BuildVersion,
}

impl StaticUrls {
  pub fn new(static_base_url: impl Into<String>, version: BuildVersion) -> Self {
    let static_base_url = static_base_url.into();
    let transpile_base_url = join_url(&static_base_url, "js/transpile/");
    Self { static_base_url, transpile_base_url, version }
  }

  /// Inline script snippet publishing the globals on `window.transpile`.
  pub fn to_js(&self) -> String {
    let globals = serde_json::json!({
      "staticBaseUrl": self.static_base_url,
      "transpileBaseUrl": self.transpile_base_url,
      "version": self.version.as_json(),
    });
    format!("window.transpile = {globals}\n")
  }
}
