use serde_json::Value;

/// Merges `incoming` into `target`, recursing through objects. Inside the
/// `scripts` section colliding string values are chained with `" && "` so
/// several packages can contribute to the same npm hook; everywhere else
/// the incoming value wins.
pub fn deep_merge(target: &mut Value, incoming: &Value) {
  merge(target, incoming, false);
}

fn merge(target: &mut Value, incoming: &Value, scripts: bool) {
  let (Value::Object(target), Value::Object(incoming)) = (target, incoming) else {
    return;
  };

  for (key, value) in incoming {
    match target.get_mut(key) {
      Some(existing) if existing.is_object() && value.is_object() => {
        merge(existing, value, key == "scripts");
      }
      Some(existing) => {
        let chained = match (scripts, &*existing, value) {
          (true, Value::String(old), Value::String(new)) => Some(format!("{old} && {new}")),
          _ => None,
        };
        *existing = chained.map_or_else(|| value.clone(), Value::String);
      }
      None => {
        target.insert(key.clone(), value.clone());
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::deep_merge;

  #[test]
  fn nested_objects_merge() {
    let mut package = json!({"dependencies": {"jquery": "3.7.1"}});
    deep_merge(&mut package, &json!({"dependencies": {"underscore": "1.13.7"}}));
    assert_eq!(
      package,
      json!({"dependencies": {"jquery": "3.7.1", "underscore": "1.13.7"}})
    );
  }

  #[test]
  fn script_hooks_are_chained() {
    let mut package = json!({"scripts": {"postinstall": "patch-package"}});
    deep_merge(&mut package, &json!({"scripts": {"postinstall": "husky install"}}));
    assert_eq!(
      package,
      json!({"scripts": {"postinstall": "patch-package && husky install"}})
    );
  }

  #[test]
  fn non_script_collisions_overwrite() {
    let mut package = json!({"version": "1.0.0", "scripts": {"env": {"a": "1"}}});
    deep_merge(&mut package, &json!({"version": "2.0.0", "scripts": {"env": {"a": "2"}}}));
    assert_eq!(package["version"], json!("2.0.0"));
    // Nested maps below `scripts` merge as plain objects again.
    assert_eq!(package["scripts"]["env"], json!({"a": "2"}));
  }

  #[test]
  fn missing_keys_are_added() {
    let mut package = json!({});
    deep_merge(&mut package, &json!({"name": "editor"}));
    assert_eq!(package, json!({"name": "editor"}));
  }
}
