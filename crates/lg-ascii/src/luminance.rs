use lg_core::charset::CharacterRamp;
use lg_core::frame::{FrameBuffer, RenderedText};

/// Convertit une frame en texte ASCII par mapping de luminance.
///
/// Parcours row-major : un glyphe par pixel, `\n` entre deux lignes,
/// jamais après la dernière. La frame doit déjà être à la taille de sortie.
///
/// # Example
/// ```
/// use lg_core::charset::CharacterRamp;
/// use lg_core::frame::FrameBuffer;
/// use lg_ascii::luminance::render_text;
///
/// let frame = FrameBuffer::filled(3, 2, (0, 0, 0, 255));
/// let ramp = CharacterRamp::new("AB").unwrap();
/// assert_eq!(render_text(&frame, &ramp).as_str(), "AAA\nAAA");
/// ```
#[must_use]
pub fn render_text(frame: &FrameBuffer, ramp: &CharacterRamp) -> RenderedText {
    let rows = (0..frame.height)
        .map(|y| render_row(frame, ramp, y))
        .collect();
    RenderedText::from_rows(rows)
}

/// Glyphes de la ligne `y`, sans séparateur.
fn render_row(frame: &FrameBuffer, ramp: &CharacterRamp, y: u32) -> String {
    (0..frame.width)
        .map(|x| ramp.glyph(frame.luminance(x, y)))
        .collect()
}
