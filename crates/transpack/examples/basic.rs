use std::path::PathBuf;

use transpack::{Entries, ProjectOptions, Settings, Transpiler};
use transpack_fs::OsFileSystem;

fn main() {
  let options = ProjectOptions {
    settings: Some(Settings::new(true, "/static/")),
    project_dir: Some(PathBuf::from("./crates/transpack/examples/basic")),
    version: Some(1_722_470_000_u64.into()),
    entries: Some(Entries::from_iter([(
      "editor".to_string(),
      "./js/editor.mjs".to_string(),
    )])),
    ..Default::default()
  };

  let transpiler = Transpiler::new(options, OsFileSystem).unwrap();
  let _ = transpiler.build();
}
