/// Configuration, types, and shared structures for lumaglyph.
///
/// This crate contains the pixel grid, the character ramps, the dimension
/// resolver and the error type shared across the lumaglyph workspace.

pub mod charset;
pub mod color;
pub mod config;
pub mod dimensions;
pub mod error;
pub mod frame;

pub use charset::{CharacterRamp, CharsetRegistry};
pub use config::RenderConfig;
pub use dimensions::Dimensions;
pub use error::CoreError;
pub use frame::{FrameBuffer, RenderedText};
