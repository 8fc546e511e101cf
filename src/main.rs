//! tts-variations CLI entry point.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tts_variations::backend::{Backend, create_backend};
use tts_variations::cli::Args;
use tts_variations::config::{Config, resolve_config_path};
use tts_variations::engine::VariationEngine;
use tts_variations::prompt::Prompter;
use tts_variations::session::{SessionSettings, run_session};
use tts_variations::speaker::list_speakers;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config_path = resolve_config_path(args.config.as_deref());
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config: {}", config_path.display()))?;
    tracing::debug!(path = %config_path.display(), model = %config.tts_model, "Config loaded");

    let input_dir = args.input_dir.unwrap_or_else(|| config.input_folder.clone());
    let output_dir = args.output_dir.unwrap_or_else(|| config.output_folder.clone());
    let backend_url = args
        .backend_url
        .unwrap_or_else(|| config.backend_url.clone());

    // Handle utility commands first
    if args.list_speakers {
        return print_speakers(&input_dir);
    }

    let backend = create_backend(&backend_url).context("Failed to create backend client")?;
    tracing::debug!(url = %backend.base_url(), "Backend client created");
    let mut engine = VariationEngine::new(backend, config.tts_model.clone());

    if args.list_languages {
        return print_languages(&engine);
    }

    if args.list_model_speakers {
        return print_model_speakers(&engine);
    }

    let device = engine.select_device(config.use_cuda);
    println!("Model: {} (device: {device})", engine.model());

    let settings = SessionSettings {
        input_dir,
        output_dir,
        base_seed: config.seed,
        base_temperature: config.temperature,
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run_session(&engine, &mut prompter, &settings)?;

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn print_speakers(input_dir: &Path) -> Result<()> {
    let speakers = list_speakers(input_dir)
        .with_context(|| format!("Failed to read input folder: {}", input_dir.display()))?;

    if speakers.is_empty() {
        println!("No WAV files found in folder '{}'.", input_dir.display());
        return Ok(());
    }

    println!("Available speakers:");
    for (idx, speaker) in speakers.iter().enumerate() {
        match speaker.duration {
            Some(duration) => println!("{}: {} ({duration:.1}s)", idx + 1, speaker.name),
            None => println!("{}: {}", idx + 1, speaker.name),
        }
    }

    Ok(())
}

fn print_languages<B: Backend>(engine: &VariationEngine<B>) -> Result<()> {
    match engine
        .list_languages()
        .context("Failed to query model languages")?
    {
        Some(languages) => println!("Available languages: {}", languages.join(", ")),
        None => println!("This model does not support specific languages."),
    }

    Ok(())
}

fn print_model_speakers<B: Backend>(engine: &VariationEngine<B>) -> Result<()> {
    let speakers = engine
        .list_model_speakers()
        .context("Failed to query model speakers")?;

    if speakers.is_empty() {
        println!("This model does not support specific speakers.");
        return Ok(());
    }

    println!("Available speakers:");
    for (idx, speaker) in speakers.iter().enumerate() {
        println!("{}: {speaker}", idx + 1);
    }

    Ok(())
}
