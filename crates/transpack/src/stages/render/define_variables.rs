use transpack_common::{BuildVersion, DefinePlugin, DefineValue, Settings};

/// Constant name under which bundled code sees the build version.
pub const VERSION_CONSTANT: &str = "transpile_VERSION";

/// Constant name of the injected URL-rewriting helper.
pub const STATIC_URL_HELPER: &str = "staticUrl";

/// The compile-time constants exposed to bundled source code.
///
/// The version constant is always present. The `staticUrl` helper depends
/// on the build flavor: debug builds get a plain prefixing helper, release
/// builds get a cache-busting one — unless the configured storage backend
/// already content-hashes file names, in which case a version query string
/// would be redundant and no helper is injected.
pub fn predefined_variables(settings: &Settings, version: &BuildVersion) -> DefinePlugin {
  let mut plugin = DefinePlugin::default();
  plugin.insert(VERSION_CONSTANT, DefineValue::Json(version.as_json()));

  let static_url = js_string(&settings.static_url);
  if settings.debug {
    plugin.insert(STATIC_URL_HELPER, DefineValue::code(format!("(url => {static_url} + url)")));
  } else if !settings.storage_kind().is_manifest() {
    plugin.insert(
      STATIC_URL_HELPER,
      DefineValue::code(format!(
        "(url => {static_url} + url + \"?v=\" + {})",
        version.as_js_expr()
      )),
    );
  }

  plugin
}

fn js_string(text: &str) -> String {
  serde_json::Value::from(text).to_string()
}

#[cfg(test)]
mod tests {
  use transpack_common::{BuildVersion, Settings};

  use super::{STATIC_URL_HELPER, VERSION_CONSTANT, predefined_variables};

  fn version() -> BuildVersion {
    BuildVersion::from(1_722_470_000_u64)
  }

  #[test]
  fn version_constant_is_always_first() {
    let plugin = predefined_variables(&Settings::new(true, "/static/"), &version());
    let mut names = plugin.definitions.keys();
    assert_eq!(names.next().map(String::as_str), Some(VERSION_CONSTANT));
    assert_eq!(plugin.get(VERSION_CONSTANT).unwrap().as_js_expr(), "1722470000");
  }

  #[test]
  fn debug_helper_prefixes_without_cache_busting() {
    let plugin = predefined_variables(&Settings::new(true, "/static/"), &version());
    assert_eq!(
      plugin.get(STATIC_URL_HELPER).unwrap().as_js_expr(),
      "(url => \"/static/\" + url)"
    );
  }

  #[test]
  fn release_helper_appends_the_version_query() {
    let plugin = predefined_variables(&Settings::new(false, "/static/"), &version());
    assert_eq!(
      plugin.get(STATIC_URL_HELPER).unwrap().as_js_expr(),
      "(url => \"/static/\" + url + \"?v=\" + 1722470000)"
    );
  }

  #[test]
  fn manifest_storage_suppresses_the_helper() {
    let settings = Settings::new(false, "/static/")
      .with_storage("django.contrib.staticfiles.storage.ManifestStaticFilesStorage");
    let plugin = predefined_variables(&settings, &version());
    assert!(!plugin.contains(STATIC_URL_HELPER));
    assert!(plugin.contains(VERSION_CONSTANT));
  }

  #[test]
  fn debug_helper_wins_even_under_manifest_storage() {
    let settings = Settings::new(true, "/static/")
      .with_storage("django.contrib.staticfiles.storage.ManifestStaticFilesStorage");
    let plugin = predefined_variables(&settings, &version());
    assert_eq!(
      plugin.get(STATIC_URL_HELPER).unwrap().as_js_expr(),
      "(url => \"/static/\" + url)"
    );
  }

  #[test]
  fn text_versions_stay_quoted_in_the_helper() {
    let plugin = predefined_variables(&Settings::new(false, "/static/"), &"abc123".into());
    assert_eq!(
      plugin.get(STATIC_URL_HELPER).unwrap().as_js_expr(),
      "(url => \"/static/\" + url + \"?v=\" + \"abc123\")"
    );
  }
}
