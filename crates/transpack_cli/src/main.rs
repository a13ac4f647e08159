mod args;
mod project_file;

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use ansi_term::Colour;
use clap::Parser;

use transpack::{BuildResult, BuildVersion, Transpiler, last_run, static_url};
use transpack_fs::OsFileSystem;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
  /// Generate the bundler configuration for this project
  Config(args::ConfigArgs),
  /// Join application package manifests into one package.json
  PackageJson(args::PackageJsonArgs),
  /// Resolve the versioned public URL of a static asset
  StaticUrl(args::StaticUrlArgs),
}

fn main() {
  init_tracing();
  let cli = Cli::parse();
  let start = Instant::now();

  let result = match cli.command {
    Command::Config(args) => run_config(&args),
    Command::PackageJson(args) => run_package_json(&args),
    Command::StaticUrl(args) => run_static_url(&args),
  };

  match result {
    Ok(()) => {
      let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
      println!("{} Finished in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed));
    }
    Err(errors) => {
      for error in &*errors {
        println!("{} {error:#}", Colour::Red.paint("Error:"));
      }
      std::process::exit(1);
    }
  }
}

fn run_config(args: &args::ConfigArgs) -> BuildResult<()> {
  let fs = OsFileSystem;
  let options = project_file::load(&fs, &args.project_dir)?;

  let mut transpiler = Transpiler::new(options, fs)?;
  if transpiler.options().version.is_none() {
    let version = {
      let store = transpiler.last_run();
      let recorded = store.get(last_run::TRANSPILE);
      if args.keep_version && recorded > 0 {
        recorded
      } else {
        let stamp = epoch_seconds();
        store.set(last_run::TRANSPILE, stamp)?;
        stamp
      }
    };
    transpiler = transpiler.with_version(BuildVersion::from(version));
  }

  let output = transpiler.build()?;

  let dim = Colour::White.dimmed();
  let state = if output.written {
    Colour::Cyan.paint("written")
  } else {
    dim.paint("unchanged")
  };
  println!(
    "{} {} {}{}{}",
    state,
    output.config_path.display(),
    dim.paint("│ mode: "),
    output.config.mode,
    dim.paint(format!(" │ entries: {}", output.config.entry.len())),
  );
  Ok(())
}

fn run_package_json(args: &args::PackageJsonArgs) -> BuildResult<()> {
  let fs = OsFileSystem;
  let options = project_file::load(&fs, &args.project_dir)?;
  let transpiler = Transpiler::new(options, fs)?;

  let output = transpiler.merge_packages(args.force)?;
  if output.changed {
    transpiler.last_run().set(last_run::NPM_INSTALL, epoch_seconds())?;
  }
  let dim = Colour::White.dimmed();
  let state =
    if output.changed { Colour::Yellow.paint("changed") } else { dim.paint("unchanged") };
  println!(
    "{} {} {}",
    state,
    output.package_path.display(),
    dim.paint(format!("│ manifests: {}", output.manifests)),
  );
  if output.changed {
    println!("{}", dim.paint("dependency set changed, rerun your package installer"));
  }
  Ok(())
}

fn run_static_url(args: &args::StaticUrlArgs) -> BuildResult<()> {
  let fs = OsFileSystem;
  let options = project_file::load(&fs, &args.project_dir)?;
  let transpiler = Transpiler::new(options, fs)?;

  let version = match &transpiler.options().version {
    Some(version) => version.clone(),
    None => BuildVersion::from(transpiler.last_run().get(last_run::TRANSPILE)),
  };
  println!("{}", static_url(&transpiler.options().static_base_url, &args.path, &version));
  Ok(())
}

fn epoch_seconds() -> u64 {
  SystemTime::now().duration_since(UNIX_EPOCH).map(|elapsed| elapsed.as_secs()).unwrap_or(0)
}

fn init_tracing() {
  use tracing_subscriber::EnvFilter;

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_target(false)
    .init();
}
