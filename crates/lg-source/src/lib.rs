/// Image decoding and resampling for lumaglyph.

pub mod image;
pub mod resize;
