use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use lg_core::charset::CharsetRegistry;
use lg_core::config::RenderConfig;
use lg_core::error::CoreError;

pub mod cli;
pub mod output;
pub mod pipeline;

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "lumaglyph.toml";

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_filter())
        .init();

    // 3. Table des charsets, construite une seule fois
    let registry = CharsetRegistry::builtin();
    if cli.list_charsets {
        for (name, ramp) in registry.iter() {
            let glyphs: String = ramp.glyphs().iter().collect();
            println!("{name:<10} {:>3}  {glyphs}", ramp.len());
        }
        return Ok(());
    }

    // 4. Valider l'entrée
    let input = require_input(&cli)?;

    // 5. Charger la config puis appliquer les overrides CLI
    let config = resolve_config(&cli)?;

    // 6. Conversion
    let text = pipeline::run(input, &config, &registry)?;

    // 7. Sortie
    output::Sink::from(config.output)
        .write(&text)
        .context("Écriture de la sortie")?;

    Ok(())
}

/// The image path, mandatory unless only listing charsets.
fn require_input(cli: &cli::Cli) -> Result<&Path, CoreError> {
    cli.input.as_deref().ok_or(CoreError::MissingInput)
}

/// Resolve config: defaults, then the config file, then CLI flags.
fn resolve_config(cli: &cli::Cli) -> Result<RenderConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => lg_core::config::load_config(path).context("Chargement de la configuration")?,
        None if Path::new(DEFAULT_CONFIG).exists() => {
            lg_core::config::load_config(Path::new(DEFAULT_CONFIG))
                .context("Chargement de la configuration")?
        }
        None => {
            log::debug!("Pas de {DEFAULT_CONFIG}, utilisation des défauts.");
            RenderConfig::default()
        }
    };
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut RenderConfig, cli: &cli::Cli) {
    if let Some(ref charset) = cli.charset {
        config.charset.clone_from(charset);
    }
    if cli.resize.is_some() {
        config.resize.clone_from(&cli.resize);
    }
    if cli.scale.is_some() {
        config.scale = cli.scale;
    }
    if cli.output.is_some() {
        config.output.clone_from(&cli.output);
    }
}
