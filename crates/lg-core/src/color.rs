/// Poids de la luma « simple » (Rec. 601), sans correction gamma.
pub const LUMA_WEIGHTS: (f64, f64, f64) = (0.299, 0.587, 0.114);

/// Convertit un canal [0,255] → [0.0, 1.0].
///
/// # Example
/// ```
/// use lg_core::color::normalize;
/// assert_eq!(normalize(0), 0.0);
/// assert_eq!(normalize(255), 1.0);
/// ```
#[inline(always)]
#[must_use]
pub fn normalize(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

/// Luminance perceptuelle d'un échantillon RGB normalisé, résultat ∈ [0.0, 1.0].
///
/// L'alpha ne participe pas : un pixel transparent a la même luminance
/// qu'un pixel opaque de même RGB.
///
/// # Example
/// ```
/// use lg_core::color::luma;
/// assert!((luma(1.0, 1.0, 1.0) - 1.0).abs() < 1e-6);
/// assert!((luma(1.0, 0.0, 0.0) - 0.299).abs() < 1e-6);
/// ```
#[inline(always)]
#[must_use]
pub fn luma(r: f64, g: f64, b: f64) -> f64 {
    let (wr, wg, wb) = LUMA_WEIGHTS;
    (wr * r + wg * g + wb * b).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grey_luma_is_identity() {
        for v in 0..=255u8 {
            let n = normalize(v);
            assert!((luma(n, n, n) - n).abs() < 1e-5, "gris {v}");
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let (r, g, b) = LUMA_WEIGHTS;
        assert!((r + g + b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn thirds_of_grey_land_on_exact_thirds() {
        // 85 et 170 : L * 3 doit tomber pile sur 1 et 2, sans erreur d'arrondi.
        assert_eq!(luma(normalize(85), normalize(85), normalize(85)) * 3.0, 1.0);
        assert_eq!(luma(normalize(170), normalize(170), normalize(170)) * 3.0, 2.0);
    }

    #[test]
    fn green_dominates() {
        assert!(luma(0.0, 1.0, 0.0) > luma(1.0, 0.0, 0.0));
        assert!(luma(1.0, 0.0, 0.0) > luma(0.0, 0.0, 1.0));
    }
}
