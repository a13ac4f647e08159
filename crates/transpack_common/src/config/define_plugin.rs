use indexmap::IndexMap;
use serde::Serialize;

/// A compile-time constant definition. The bundler's define plugin
/// replaces occurrences of the constant name in bundled source with the
/// injected code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefineValue {
  /// A JSON constant, injected as its literal representation.
  Json(serde_json::Value),
  /// A raw JavaScript expression. Carried as a string in the
  /// configuration; the define plugin treats string values as code.
  Code(String),
}

impl DefineValue {
  pub fn json(value: impl Into<serde_json::Value>) -> Self {
    Self::Json(value.into())
  }

  pub fn code(expr: impl Into<String>) -> Self {
    Self::Code(expr.into())
  }

  /// The JavaScript expression this definition injects.
  pub fn as_js_expr(&self) -> String {
    match self {
      Self::Json(value) => value.to_string(),
      Self::Code(expr) => expr.clone(),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DefinePlugin {
  pub definitions: IndexMap<String, DefineValue>,
}

impl DefinePlugin {
  pub fn insert(&mut self, name: impl Into<String>, value: DefineValue) {
    self.definitions.insert(name.into(), value);
  }

  pub fn get(&self, name: &str) -> Option<&DefineValue> {
    self.definitions.get(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.definitions.contains_key(name)
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigPlugin {
  Define(DefinePlugin),
}
