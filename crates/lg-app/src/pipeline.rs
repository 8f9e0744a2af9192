use std::path::Path;

use anyhow::{Context, Result};
use lg_ascii::luminance::render_text;
use lg_core::charset::CharsetRegistry;
use lg_core::config::RenderConfig;
use lg_core::dimensions::Dimensions;
use lg_core::error::CoreError;
use lg_core::frame::{FrameBuffer, RenderedText};
use lg_source::image::load_image;
use lg_source::resize::resize_nearest;

/// Convertit une frame déjà décodée : résolution de taille, resize, mapping.
///
/// Le charset est résolu avant tout calcul, de sorte qu'un nom inconnu
/// ne produise jamais de sortie partielle.
///
/// # Errors
/// `UnknownCharset` ou `InvalidDimensionSpec`.
pub fn convert(
    frame: &FrameBuffer,
    config: &RenderConfig,
    registry: &CharsetRegistry,
) -> Result<RenderedText, CoreError> {
    let ramp = registry.get(&config.charset)?;
    log::info!(
        "Charset '{}' trouvé ({} caractères)",
        config.charset,
        ramp.len()
    );

    let target = Dimensions::resolve(frame.dimensions(), config.resize.as_deref(), config.scale)?;
    if target.is_empty() {
        log::warn!("Taille de sortie nulle ({target}) : le texte sera vide.");
    }

    let resized = resize_nearest(frame, target)?;
    log::info!("Image redimensionnée de {} à {}", frame.dimensions(), target);

    Ok(render_text(&resized, ramp))
}

/// Pipeline complet depuis un fichier image.
///
/// # Errors
/// Toute erreur de charset, de décodage ou de dimensions, avec l'étape en contexte.
pub fn run(input: &Path, config: &RenderConfig, registry: &CharsetRegistry) -> Result<RenderedText> {
    registry
        .get(&config.charset)
        .context("Sélection du charset")?;
    let frame = load_image(input)
        .with_context(|| format!("Chargement de l'image {}", input.display()))?;
    let text = convert(&frame, config, registry).context("Conversion en ASCII")?;
    Ok(text)
}
