use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Taille d'une grille en pixels (ou en glyphes, côté sortie).
///
/// # Example
/// ```
/// use lg_core::dimensions::Dimensions;
/// let d: Dimensions = "80x24".parse().unwrap();
/// assert_eq!(d, Dimensions::new(80, 24));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl Dimensions {
    /// Build from width and height.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either axis is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Taille en octets d'un buffer RGBA de ces dimensions, `None` si elle
    /// dépasse `usize`.
    ///
    /// # Example
    /// ```
    /// use lg_core::dimensions::Dimensions;
    /// assert_eq!(Dimensions::new(3, 2).byte_len(), Some(24));
    /// ```
    #[must_use]
    pub fn byte_len(self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(4)
    }

    /// Rejette une taille dont le buffer RGBA n'est pas adressable.
    fn ensure_addressable(self, spec: impl Into<String>) -> Result<Self, CoreError> {
        match self.byte_len() {
            Some(_) => Ok(self),
            None => Err(CoreError::InvalidDimensionSpec {
                spec: spec.into(),
                reason: format!("{self} dépasse la mémoire adressable"),
            }),
        }
    }

    /// Applique un facteur d'échelle : chaque axe vaut `floor(axe * scale)`.
    ///
    /// # Errors
    /// `InvalidDimensionSpec` si `scale` n'est pas fini ou n'est pas > 0, ou
    /// si la taille obtenue n'est pas adressable.
    ///
    /// # Example
    /// ```
    /// use lg_core::dimensions::Dimensions;
    /// let d = Dimensions::new(5, 3).scaled(0.5).unwrap();
    /// assert_eq!(d, Dimensions::new(2, 1));
    /// ```
    pub fn scaled(self, scale: f64) -> Result<Self, CoreError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CoreError::InvalidDimensionSpec {
                spec: scale.to_string(),
                reason: "le facteur d'échelle doit être un nombre > 0".into(),
            });
        }
        let axis = |v: u32| (f64::from(v) * scale).floor().min(f64::from(u32::MAX)) as u32;
        Self::new(axis(self.width), axis(self.height)).ensure_addressable(scale.to_string())
    }

    /// Résout la taille cible à partir de la taille source.
    ///
    /// Première règle applicable : `resize` explicite (`"WxH"`), puis
    /// `scale`, sinon la taille source inchangée.
    ///
    /// # Errors
    /// `InvalidDimensionSpec` si `resize` est mal formé ou si `scale` n'est
    /// pas strictement positif.
    ///
    /// # Example
    /// ```
    /// use lg_core::dimensions::Dimensions;
    /// let src = Dimensions::new(640, 480);
    /// assert_eq!(Dimensions::resolve(src, None, None).unwrap(), src);
    /// assert_eq!(
    ///     Dimensions::resolve(src, Some("80x24"), Some(2.0)).unwrap(),
    ///     Dimensions::new(80, 24)
    /// );
    /// assert_eq!(
    ///     Dimensions::resolve(src, None, Some(0.25)).unwrap(),
    ///     Dimensions::new(160, 120)
    /// );
    /// ```
    pub fn resolve(
        source: Dimensions,
        resize: Option<&str>,
        scale: Option<f64>,
    ) -> Result<Self, CoreError> {
        if let Some(spec) = resize {
            return spec.parse();
        }
        if let Some(scale) = scale {
            return source.scaled(scale);
        }
        Ok(source)
    }
}

impl FromStr for Dimensions {
    type Err = CoreError;

    /// Parse `"<width>x<height>"`, both positive integers, lowercase `x`.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidDimensionSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };
        let (w, h) = spec
            .split_once('x')
            .ok_or_else(|| invalid("séparateur « x » manquant (attendu LARGEURxHAUTEUR)"))?;
        let axis = |raw: &str, name: &str| -> Result<u32, CoreError> {
            // u32::from_str accepte un '+' initial, pas nous.
            if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(&format!("{name} non numérique : « {raw} »")));
            }
            match raw.parse::<u32>() {
                Ok(0) => Err(invalid(&format!("{name} doit être > 0"))),
                Ok(v) => Ok(v),
                Err(e) => Err(invalid(&format!("{name} : {e}"))),
            }
        };
        Self::new(axis(w, "largeur")?, axis(h, "hauteur")?).ensure_addressable(spec)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid(res: Result<Dimensions, CoreError>) -> bool {
        matches!(res, Err(CoreError::InvalidDimensionSpec { .. }))
    }

    #[test]
    fn parses_explicit_spec() {
        assert_eq!("100x50".parse::<Dimensions>().unwrap(), Dimensions::new(100, 50));
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(is_invalid("100".parse()));
    }

    #[test]
    fn rejects_non_numeric_and_partial_specs() {
        for spec in ["axb", "10x", "x10", "10x10x10", "10X10", "-5x3", "+5x3", " 5x3", ""] {
            assert!(is_invalid(spec.parse()), "{spec:?} devrait échouer");
        }
    }

    #[test]
    fn rejects_zero_axis() {
        assert!(is_invalid("0x10".parse()));
        assert!(is_invalid("10x0".parse()));
    }

    #[test]
    fn rejects_overflowing_axis() {
        assert!(is_invalid("99999999999x1".parse()));
    }

    #[test]
    fn unaddressable_explicit_size_is_rejected() {
        assert!(is_invalid("4000000000x4000000000".parse()));
        let src = Dimensions::new(10, 10);
        assert!(is_invalid(Dimensions::resolve(src, Some("4000000000x4000000000"), None)));
    }

    #[test]
    fn huge_scale_is_rejected() {
        let src = Dimensions::new(10, 10);
        assert!(is_invalid(src.scaled(1e9)));
        assert!(is_invalid(Dimensions::resolve(src, None, Some(1e9))));
    }

    #[test]
    fn byte_len_overflow_is_detected() {
        assert_eq!(Dimensions::new(0, u32::MAX).byte_len(), Some(0));
        assert_eq!(Dimensions::new(u32::MAX, u32::MAX).byte_len(), None);
    }

    #[test]
    fn identity_without_spec_or_scale() {
        let src = Dimensions::new(37, 11);
        assert_eq!(Dimensions::resolve(src, None, None).unwrap(), src);
    }

    #[test]
    fn explicit_spec_wins_over_scale() {
        let src = Dimensions::new(400, 400);
        let d = Dimensions::resolve(src, Some("3x2"), Some(0.5)).unwrap();
        assert_eq!(d, Dimensions::new(3, 2));
    }

    #[test]
    fn malformed_spec_fails_even_with_scale() {
        let src = Dimensions::new(4, 4);
        assert!(is_invalid(Dimensions::resolve(src, Some("100"), Some(0.5))));
    }

    #[test]
    fn half_scale_floors() {
        let d = Dimensions::resolve(Dimensions::new(4, 4), None, Some(0.5)).unwrap();
        assert_eq!(d, Dimensions::new(2, 2));
        let d = Dimensions::resolve(Dimensions::new(7, 3), None, Some(0.5)).unwrap();
        assert_eq!(d, Dimensions::new(3, 1));
    }

    #[test]
    fn tiny_scale_may_collapse_to_zero() {
        let d = Dimensions::new(10, 10).scaled(0.01).unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        let src = Dimensions::new(10, 10);
        for s in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(is_invalid(src.scaled(s)), "scale {s}");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let d = Dimensions::new(12, 34);
        assert_eq!(d.to_string().parse::<Dimensions>().unwrap(), d);
    }
}
