use std::collections::BTreeMap;

use crate::error::CoreError;

/// 70 caractères, rampe Paul Bourke complète, de l'espace au plus dense.
pub const CHARSET_ASCII: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// 69 caractères, même rampe sans l'antislash.
pub const CHARSET_STANDARD: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// 10 caractères, compact, bon contraste.
pub const CHARSET_COMPACT: &str = " .:-=+*#%@";

/// Blocs Unicode, pseudo-pixels.
pub const CHARSET_BLOCKS: &str = " ░▒▓█";

/// Minimal, haut contraste.
pub const CHARSET_MINIMAL: &str = " .:░▒▓█";

/// Name of the ramp used when none is requested.
pub const DEFAULT_CHARSET: &str = "ascii";

/// Rampe ordonnée de glyphes, indexée 0..N-1.
///
/// Le sens (sombre→clair ou l'inverse) est porté par l'ordre des
/// caractères, pas par le mapping.
///
/// # Example
/// ```
/// use lg_core::charset::CharacterRamp;
/// let ramp = CharacterRamp::new(" .:#@").unwrap();
/// assert_eq!(ramp.glyph(0.0), ' ');
/// assert_eq!(ramp.glyph(1.0), '@');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterRamp {
    glyphs: Vec<char>,
}

impl CharacterRamp {
    /// Build a ramp from its glyphs, in order.
    ///
    /// # Errors
    /// `CoreError::Config` if `glyphs` is empty.
    pub fn new(glyphs: &str) -> Result<Self, CoreError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(CoreError::Config("une rampe de caractères ne peut pas être vide".into()));
        }
        Ok(Self { glyphs })
    }

    /// Number of glyphs, always ≥ 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false: a ramp holds at least one glyph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The glyphs, in ramp order.
    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Index du glyphe pour une luminance : `clamp(floor(L * N), 0, N - 1)`.
    ///
    /// `L = 1.0` donne `N - 1`, jamais `N`. Une luminance hors [0, 1] ou NaN
    /// est ramenée dans les bornes.
    ///
    /// # Example
    /// ```
    /// use lg_core::charset::CharacterRamp;
    /// let ramp = CharacterRamp::new("AB").unwrap();
    /// assert_eq!(ramp.index(0.0), 0);
    /// assert_eq!(ramp.index(0.49), 0);
    /// assert_eq!(ramp.index(0.5), 1);
    /// assert_eq!(ramp.index(1.0), 1);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn index(&self, luminance: f64) -> usize {
        let last = self.glyphs.len() - 1;
        let scaled = (luminance * self.glyphs.len() as f64).floor();
        // `as usize` sature : NaN et négatifs → 0.
        (scaled as usize).min(last)
    }

    /// Map a luminance in [0, 1] to its glyph.
    #[inline(always)]
    #[must_use]
    pub fn glyph(&self, luminance: f64) -> char {
        self.glyphs[self.index(luminance)]
    }
}

/// Table immuable nom → rampe, construite une fois au démarrage et passée
/// par référence au pipeline.
///
/// # Example
/// ```
/// use lg_core::charset::CharsetRegistry;
/// let registry = CharsetRegistry::builtin();
/// assert_eq!(registry.get("ascii").unwrap().len(), 70);
/// assert!(registry.get("xyz").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CharsetRegistry {
    ramps: BTreeMap<&'static str, CharacterRamp>,
}

impl CharsetRegistry {
    /// The static built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        let ramps = [
            ("ascii", CHARSET_ASCII),
            ("standard", CHARSET_STANDARD),
            ("compact", CHARSET_COMPACT),
            ("blocks", CHARSET_BLOCKS),
            ("minimal", CHARSET_MINIMAL),
        ]
        .into_iter()
        .map(|(name, glyphs)| {
            (
                name,
                CharacterRamp {
                    glyphs: glyphs.chars().collect(),
                },
            )
        })
        .collect();
        Self { ramps }
    }

    /// Look a ramp up by name.
    ///
    /// # Errors
    /// `CoreError::UnknownCharset` if `name` is not registered.
    pub fn get(&self, name: &str) -> Result<&CharacterRamp, CoreError> {
        self.ramps.get(name).ok_or_else(|| CoreError::UnknownCharset {
            name: name.to_string(),
        })
    }

    /// Registered names with their ramps, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CharacterRamp)> {
        self.ramps.iter().map(|(name, ramp)| (*name, ramp))
    }
}

impl Default for CharsetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
