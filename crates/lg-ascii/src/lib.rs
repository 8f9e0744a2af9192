/// ASCII conversion engine for lumaglyph.
///
/// Converts pixel frames to text through a luminance → glyph ramp.
pub mod luminance;

pub use luminance::render_text;
