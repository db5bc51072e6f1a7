mod cli; // Declare the cli module

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};

use classguard_core::config::WhitelistConfig;
use classguard_core::kernel::{find_whitelist_file, ClasspathValidator};
use classguard_core::source::{DependencySource, DirectorySource, ManifestSource};
use classguard_core::{Error, Result, StartupReporter, Whitelist};

use cli::{CheckArgs, CliArgs, Commands, WhitelistArgs};

/// Exit code for non-whitelisted collisions under the failing policy
const EXIT_COLLISIONS: u8 = 1;
/// Exit code for configuration and loading errors
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let outcome = match args.command {
        Commands::Check(check) => run_check(&check),
        Commands::Policies => {
            print!("{}", cli::render_policies());
            Ok(())
        }
        Commands::Whitelist(whitelist) => {
            resolve_whitelist(&whitelist, None).map(|w| print!("{}", cli::render_whitelist(&w)))
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_collision() => {
            error!("{}", e);
            ExitCode::from(EXIT_COLLISIONS)
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_check(args: &CheckArgs) -> Result<()> {
    let source: Box<dyn DependencySource> = match (&args.libs_dir, &args.manifest) {
        (Some(dir), _) => Box::new(DirectorySource::new(dir)),
        (None, Some(manifest)) => Box::new(ManifestSource::new(manifest)),
        (None, None) => return Err(Error::from("either --libs-dir or --manifest is required")),
    };

    let whitelist = resolve_whitelist(&args.whitelist, args.libs_dir.as_deref())?;
    let validator = ClasspathValidator::new(Arc::new(whitelist));
    let report = validator.validate_source(source.as_ref())?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| Error::Other(e.to_string()))?;
        println!("{}", json);
    } else {
        print!("{}", cli::render_report(&report));
    }

    StartupReporter::new(args.policy).report(&report)?;
    Ok(())
}

/// Explicit file first, then a whitelist shipped in the library root, then the built-in policy
fn resolve_whitelist(args: &WhitelistArgs, libs_dir: Option<&Path>) -> Result<Whitelist> {
    let path = args
        .path
        .clone()
        .or_else(|| libs_dir.and_then(find_whitelist_file));

    let Some(path) = path else {
        info!("No whitelist file given, using the {} policy", if args.no_builtin { "empty" } else { "built-in" });
        return Ok(if args.no_builtin { Whitelist::empty() } else { Whitelist::builtin() });
    };

    let mut config = WhitelistConfig::load(&path)?;
    if args.no_builtin {
        config.include_builtin = false;
    }
    Ok(config.into_whitelist())
}
