use serde::Deserialize;

/// Snapshot of the framework settings the pipeline reads. Field aliases
/// accept the upper-case names of the framework's settings export.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  #[serde(alias = "DEBUG")]
  pub debug: bool,
  #[serde(alias = "STATIC_URL")]
  pub static_url: String,
  /// Class path of the active static-file storage backend.
  #[serde(default, alias = "STATICFILES_STORAGE")]
  pub staticfiles_storage: Option<String>,
}

impl Settings {
  pub fn new(debug: bool, static_url: impl Into<String>) -> Self {
    Self { debug, static_url: static_url.into(), staticfiles_storage: None }
  }

  #[must_use]
  pub fn with_storage(mut self, class_path: impl Into<String>) -> Self {
    self.staticfiles_storage = Some(class_path.into());
    self
  }

  pub fn storage_kind(&self) -> StorageKind {
    self.staticfiles_storage.as_deref().map_or(StorageKind::Plain, StorageKind::from_class_path)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
  Plain,
  /// A storage backend that content-hashes file names on its own, making
  /// version query strings redundant.
  Manifest,
}

impl StorageKind {
  pub fn from_class_path(class_path: &str) -> Self {
    match class_path.rsplit('.').next() {
      Some("ManifestStaticFilesStorage") => Self::Manifest,
      _ => Self::Plain,
    }
  }

  pub fn is_manifest(self) -> bool {
    matches!(self, Self::Manifest)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn manifest_storage_is_detected_by_class_name() {
    for class_path in [
      "transpack.storage.ManifestStaticFilesStorage",
      "django.contrib.staticfiles.storage.ManifestStaticFilesStorage",
    ] {
      assert_eq!(StorageKind::from_class_path(class_path), StorageKind::Manifest);
    }
    assert_eq!(
      StorageKind::from_class_path("django.core.files.storage.FileSystemStorage"),
      StorageKind::Plain
    );
  }

  #[test]
  fn missing_storage_setting_counts_as_plain() {
    assert_eq!(Settings::new(false, "/static/").storage_kind(), StorageKind::Plain);
  }

  #[test]
  fn deserializes_from_framework_field_names() {
    let settings: Settings = serde_json::from_str(
      r#"{"DEBUG": true, "STATIC_URL": "/static/", "STATICFILES_STORAGE": "x.ManifestStaticFilesStorage"}"#,
    )
    .unwrap();
    assert!(settings.debug);
    assert_eq!(settings.static_url, "/static/");
    assert!(settings.storage_kind().is_manifest());
  }
}
