//! Theme Builder - editor color themes from a single palette
//!
//! Reads `settings.json`, loads the palette it names and renders one theme
//! file per editor from that editor's template.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use theme_builder::constants::{APP_BINARY_NAME, APP_NAME, SETTINGS_FILE_PATH};
use theme_builder::{EditorSource, ThemeBuilder};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Theme Builder - render editor themes from palette and templates
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Path to the settings file
    #[arg(long, value_name = "FILE", default_value = SETTINGS_FILE_PATH)]
    settings: PathBuf,

    /// Build the editors listed in the settings' EditorCodes instead of the built-in list
    #[arg(long)]
    configured_editors: bool,

    /// Resolve every template against the palette without writing any files
    #[arg(long)]
    check: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let builder = ThemeBuilder::load(&cli.settings)
        .with_context(|| format!("{} failed to load its inputs", APP_NAME))?;

    let source = if cli.configured_editors {
        EditorSource::Configured
    } else {
        EditorSource::BuiltIn
    };
    let editors = builder.editor_codes(source);

    if cli.check {
        for editor in &editors {
            let resolved = builder.check_editor(editor)?;
            println!("{editor}: {resolved} placeholder(s) resolved");
        }
        info!("Checked {} template(s)", editors.len());
        return Ok(());
    }

    let built = builder.build_all(&editors, |theme| {
        println!("Successfully created theme file: {}", theme.path.display());
    })?;
    info!("Created {} theme file(s)", built.len());

    Ok(())
}
