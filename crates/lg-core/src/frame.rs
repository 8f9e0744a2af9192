use std::fmt;

use crate::color::{luma, normalize};
use crate::dimensions::Dimensions;
use crate::error::CoreError;

/// Grille de pixels immuable une fois construite.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel.
///
/// # Example
/// ```
/// use lg_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer noir transparent aux dimensions données.
    ///
    /// # Panics
    /// Panics if `width * height * 4` overflows `usize`; use
    /// [`FrameBuffer::try_new`] for untrusted sizes.
    ///
    /// # Example
    /// ```
    /// use lg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Comme [`FrameBuffer::new`], mais échoue proprement si la taille
    /// déborde ou si l'allocation est refusée.
    ///
    /// # Errors
    /// `CoreError::InvalidDimensionSpec` dans les deux cas.
    ///
    /// # Example
    /// ```
    /// use lg_core::frame::FrameBuffer;
    /// assert!(FrameBuffer::try_new(4, 4).is_ok());
    /// assert!(FrameBuffer::try_new(u32::MAX, u32::MAX).is_err());
    /// ```
    pub fn try_new(width: u32, height: u32) -> Result<Self, CoreError> {
        let dims = Dimensions::new(width, height);
        let too_large = |reason: String| CoreError::InvalidDimensionSpec {
            spec: dims.to_string(),
            reason,
        };
        let len = dims
            .byte_len()
            .ok_or_else(|| too_large("dépasse la mémoire adressable".into()))?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| too_large(format!("allocation refusée : {e}")))?;
        data.resize(len, 0);
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Crée un buffer rempli d'une seule couleur RGBA.
    ///
    /// # Example
    /// ```
    /// use lg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(2, 2, (255, 0, 0, 255));
    /// assert_eq!(fb.pixel(1, 1), (255, 0, 0, 255));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, rgba: (u8, u8, u8, u8)) -> Self {
        let (r, g, b, a) = rgba;
        let data = [r, g, b, a].repeat(width as usize * height as usize);
        Self {
            data,
            width,
            height,
        }
    }

    /// Dimensions of the grid.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    ///
    /// # Example
    /// ```
    /// use lg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(10, 10);
    /// assert_eq!(fb.pixel(0, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = self.index(x, y);
        match self.data.get(idx..idx + 4) {
            Some(&[r, g, b, a]) => (r, g, b, a),
            _ => (0, 0, 0, 0),
        }
    }

    /// Écrit le pixel (x, y). Hors bornes = no-op.
    #[inline(always)]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: (u8, u8, u8, u8)) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.index(x, y);
        let (r, g, b, a) = rgba;
        self.data[idx..idx + 4].copy_from_slice(&[r, g, b, a]);
    }

    /// Canaux RGB du pixel (x, y) normalisés dans [0.0, 1.0]. Alpha ignoré.
    ///
    /// # Example
    /// ```
    /// use lg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(1, 1, (255, 0, 255, 0));
    /// assert_eq!(fb.rgb(0, 0), (1.0, 0.0, 1.0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn rgb(&self, x: u32, y: u32) -> (f64, f64, f64) {
        let (r, g, b, _) = self.pixel(x, y);
        (normalize(r), normalize(g), normalize(b))
    }

    /// Luminance perceptuelle du pixel (x, y), ∈ [0.0, 1.0].
    ///
    /// # Example
    /// ```
    /// use lg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(1, 1, (255, 255, 255, 255));
    /// assert!((fb.luminance(0, 0) - 1.0).abs() < 1e-6);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(&self, x: u32, y: u32) -> f64 {
        let (r, g, b) = self.rgb(x, y);
        luma(r, g, b)
    }
}

/// Texte ASCII final : `height` lignes de `width` glyphes, séparées par `\n`
/// (aucun séparateur après la dernière ligne).
///
/// # Example
/// ```
/// use lg_core::frame::RenderedText;
/// let text = RenderedText::from_rows(vec!["ab".into(), "cd".into()]);
/// assert_eq!(text.as_str(), "ab\ncd");
/// assert_eq!(text.height(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedText {
    text: String,
    width: u32,
    height: u32,
}

impl RenderedText {
    /// Line separator between rows.
    pub const SEPARATOR: char = '\n';

    /// Assemble les lignes fournies, dans l'ordre.
    ///
    /// La largeur retenue est celle de la première ligne, en glyphes.
    #[must_use]
    pub fn from_rows(rows: Vec<String>) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.chars().count() as u32);
        let capacity = rows.iter().map(String::len).sum::<usize>() + rows.len();
        let mut text = String::with_capacity(capacity);
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                text.push(Self::SEPARATOR);
            }
            text.push_str(row);
        }
        Self {
            text,
            width,
            height,
        }
    }

    /// Width in glyphs.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of lines.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The assembled text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Iterate over the rows, without separators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text
            .split(Self::SEPARATOR)
            .take(self.height as usize)
    }

    /// Consume into the raw string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// True when there is nothing to print.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for RenderedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_pixel() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set_pixel(2, 1, (10, 20, 30, 40));
        assert_eq!(fb.pixel(2, 1), (10, 20, 30, 40));
        assert_eq!(fb.pixel(0, 0), (0, 0, 0, 0));
    }

    #[test]
    fn set_pixel_out_of_bounds_is_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel(5, 5, (1, 2, 3, 4));
        assert!(fb.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn try_new_reports_overflow_instead_of_panicking() {
        let res = FrameBuffer::try_new(u32::MAX, u32::MAX);
        assert!(matches!(res, Err(CoreError::InvalidDimensionSpec { .. })));
        assert_eq!(FrameBuffer::try_new(3, 2).unwrap(), FrameBuffer::new(3, 2));
    }

    #[test]
    fn alpha_does_not_change_luminance() {
        let opaque = FrameBuffer::filled(1, 1, (120, 40, 200, 255));
        let clear = FrameBuffer::filled(1, 1, (120, 40, 200, 0));
        assert_eq!(opaque.luminance(0, 0), clear.luminance(0, 0));
    }

    #[test]
    fn rendered_text_has_no_trailing_separator() {
        let text = RenderedText::from_rows(vec!["AAA".into(), "AAA".into()]);
        assert_eq!(text.as_str(), "AAA\nAAA");
        assert_eq!(text.width(), 3);
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn rendered_text_without_rows_is_empty() {
        let text = RenderedText::from_rows(Vec::new());
        assert!(text.is_empty());
        assert_eq!(text.as_str(), "");
        assert_eq!(text.lines().count(), 0);
    }
}
