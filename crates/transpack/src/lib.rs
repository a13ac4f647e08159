pub mod last_run;
mod stages;
mod static_url;
mod transpiler;
mod types;
mod utils;

pub use crate::last_run::LastRunStore;
pub use crate::stages::emit::emit_config_js;
pub use crate::stages::package::PackageOutput;
pub use crate::stages::render::render_config;
pub use crate::static_url::{StaticUrls, static_url, transpiled_path};
pub use crate::transpiler::Transpiler;
pub use crate::types::build_output::BuildOutput;
pub use transpack_common::*;
pub use transpack_error::{BuildError, BuildResult};
