use transpack_common::{JsRegex, LoaderOptions, LoaderSpec, ModuleRule};

/// The transpilation rule applied to project scripts. Debug builds leave
/// third-party dependency directories untouched to keep rebuilds fast;
/// release builds transpile everything for maximum browser coverage.
pub fn script_rule(debug: bool) -> ModuleRule {
  ModuleRule {
    test: JsRegex::new(r"\.(js|mjs)$"),
    exclude: debug.then(|| JsRegex::new("node_modules")),
    r#use: LoaderSpec {
      loader: "babel-loader".to_string(),
      options: LoaderOptions {
        presets: vec!["@babel/preset-env".to_string()],
        plugins: vec!["@babel/plugin-syntax-dynamic-import".to_string()],
      },
    },
  }
}

#[cfg(test)]
mod tests {
  use super::script_rule;

  #[test]
  fn rule_matches_plain_and_module_scripts() {
    let rule = script_rule(false);
    assert_eq!(rule.test.source(), r"\.(js|mjs)$");
    assert_eq!(rule.r#use.loader, "babel-loader");
  }

  #[test]
  fn only_debug_builds_exclude_node_modules() {
    assert_eq!(script_rule(true).exclude.map(|regex| regex.source().to_string()),
      Some("node_modules".to_string()));
    assert!(script_rule(false).exclude.is_none());
  }
}
