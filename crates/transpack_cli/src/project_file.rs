use std::path::Path;

use anyhow::Context;
use transpack::{BuildResult, ProjectOptions};
use transpack_fs::FileSystem;
use transpack_utils::json5::parse_json5;

pub const PROJECT_FILE: &str = "transpack.json5";

/// Reads the project options from `transpack.json5` in the project
/// directory. A missing file is fine; defaults cover the rest.
pub fn load<F: FileSystem>(fs: &F, project_dir: &Path) -> BuildResult<ProjectOptions> {
  let path = project_dir.join(PROJECT_FILE);
  let mut options = if fs.exists(&path) {
    let text = fs
      .read_to_string(&path)
      .with_context(|| format!("failed to read {}", path.display()))?;
    let value = parse_json5(&text).with_context(|| format!("invalid {}", path.display()))?;
    serde_json::from_value::<ProjectOptions>(value)
      .with_context(|| format!("invalid {}", path.display()))?
  } else {
    ProjectOptions::default()
  };
  options.project_dir.get_or_insert_with(|| project_dir.to_path_buf());
  Ok(options)
}
