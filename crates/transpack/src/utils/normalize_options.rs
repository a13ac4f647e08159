use std::path::{Path, PathBuf};

use sugar_path::SugarPath;
use transpack_common::{NormalizedProjectOptions, ProjectOptions};
use transpack_error::{BuildError, BuildResult};
use transpack_utils::url_ext::join_url;

/// Fills in everything derivable from the project directory and the
/// framework settings. What cannot be derived is collected into one error
/// so a misconfigured project sees all problems at once.
pub fn normalize_options(mut raw_options: ProjectOptions) -> BuildResult<NormalizedProjectOptions> {
  let mut errors = vec![];

  let settings = raw_options.settings.take();
  if settings.is_none() {
    errors.push(anyhow::anyhow!(
      "`settings` is required: the debug flag and static URL drive the configuration"
    ));
  }

  let project_dir = raw_options.project_dir.unwrap_or_else(|| PathBuf::from(".")).normalize();
  let cache_dir =
    resolve(&project_dir, raw_options.cache_dir.unwrap_or_else(|| PathBuf::from(".transpile")));
  let out_dir = resolve(
    &project_dir,
    raw_options.out_dir.unwrap_or_else(|| Path::new("static-transpile").join("js")),
  );

  let static_base_url = raw_options
    .static_base_url
    .or_else(|| settings.as_ref().map(|settings| settings.static_url.clone()));
  let base_url =
    raw_options.base_url.or_else(|| static_base_url.as_deref().map(|base| join_url(base, "js/")));

  let (Some(settings), Some(static_base_url), Some(base_url)) =
    (settings, static_base_url, base_url)
  else {
    return Err(BuildError::from(errors));
  };

  Ok(NormalizedProjectOptions {
    settings,
    project_dir: project_dir.clone(),
    cache_dir,
    out_dir,
    static_base_url,
    base_url,
    version: raw_options.version,
    entries: raw_options.entries,
    js_roots: raw_options
      .js_roots
      .unwrap_or_default()
      .into_iter()
      .map(|root| resolve(&project_dir, root))
      .collect(),
    app_dirs: raw_options
      .app_dirs
      .unwrap_or_default()
      .into_iter()
      .map(|dir| resolve(&project_dir, dir))
      .collect(),
  })
}

fn resolve(project_dir: &Path, path: PathBuf) -> PathBuf {
  if path.is_relative() { project_dir.join(path).normalize() } else { path.normalize() }
}
