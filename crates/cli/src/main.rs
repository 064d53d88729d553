//! plugingen CLI - Plugin method generator
//!
//! This binary reads a target-method descriptor and prints the before, after
//! or around plugin methods for it.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plugingen::{attributes_json, render_methods, PluginDescriptor};
use plugingen_core::config::Config;
use plugingen_core::{InterceptionKind, PhpLanguageLevel};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "plugingen")]
#[command(about = "Generate interception plugin methods for PHP classes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Target PHP language level, overrides the configuration
    #[arg(short, long, value_name = "LEVEL", global = true)]
    language_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate plugin methods for a target method
    Generate {
        /// Descriptor JSON file, `-` for stdin
        #[arg(short, long, value_name = "FILE")]
        descriptor: PathBuf,

        /// Interception kinds to generate (before, after, around)
        #[arg(short, long = "kind", value_name = "KIND", required = true, num_args = 1..)]
        kinds: Vec<String>,

        /// Print the template attributes as JSON instead of rendered methods
        #[arg(long)]
        json: bool,
    },
    /// Show the feature profile of a language level
    Features,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    let config = load_config(cli.config.as_deref(), cli.language_level.as_deref())?;

    match cli.command {
        Some(Commands::Generate {
            descriptor,
            kinds,
            json,
        }) => generate(&config, &descriptor, &kinds, json),
        Some(Commands::Features) => show_features(&config),
        None => {
            println!("Run 'plugingen generate --descriptor FILE --kind before' or see --help");
            Ok(())
        }
    }
}

/// Initialize logging system
///
/// Logs go to stderr so generated code on stdout can be piped.
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "plugingen={level},plugingen_generator={level},plugingen_core={level}"
        ))
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn load_config(path: Option<&Path>, language_level: Option<&str>) -> Result<Config> {
    let mut config = Config::load(path).context("Failed to load configuration")?;
    if let Some(level) = language_level {
        config.php.language_level = level
            .parse::<PhpLanguageLevel>()
            .with_context(|| format!("Invalid --language-level '{level}'"))?;
    }
    config.validate()?;
    debug!("Using configuration {config:?}");
    Ok(config)
}

fn generate(config: &Config, descriptor_path: &Path, kinds: &[String], json: bool) -> Result<()> {
    let kinds = kinds
        .iter()
        .map(|kind| InterceptionKind::parse(kind))
        .collect::<plugingen_core::Result<Vec<_>>>()?;

    let descriptor = PluginDescriptor::load(descriptor_path)?;
    let profile = config.feature_profile();
    info!(
        "Generating plugins for {}::{} at PHP {}",
        descriptor.target_class.name, descriptor.method.name, config.php.language_level
    );

    let output = if json {
        attributes_json(&descriptor, &kinds, profile)?
    } else {
        render_methods(&descriptor, &kinds, profile, &config.output)?
    };
    println!("{output}");
    Ok(())
}

fn show_features(config: &Config) -> Result<()> {
    let profile = config.feature_profile();
    println!("PHP {}", config.php.language_level);
    println!("  scalar type hints:        {}", profile.scalar_type_hints);
    println!("  nullable types:           {}", profile.nullable_types);
    println!(
        "  return type declarations: {}",
        profile.return_type_declarations
    );
    println!("  void return type:         {}", profile.void_return_type);
    Ok(())
}
