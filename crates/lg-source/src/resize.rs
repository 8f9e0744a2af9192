use lg_core::dimensions::Dimensions;
use lg_core::error::CoreError;
use lg_core::frame::FrameBuffer;

/// Redimensionne `src` vers `target` par échantillonnage au plus proche voisin.
///
/// La cible `(x, y)` copie la source `(x * Ws / Wt, y * Hs / Ht)`, division
/// entière. Aucun filtrage, aucune interpolation. Une cible de taille nulle
/// sur un axe donne une grille vide sans division par zéro.
///
/// # Errors
/// `CoreError::InvalidDimensionSpec` si le buffer cible ne peut pas être alloué.
///
/// # Example
/// ```
/// use lg_core::dimensions::Dimensions;
/// use lg_core::frame::FrameBuffer;
/// use lg_source::resize::resize_nearest;
/// let src = FrameBuffer::new(100, 100);
/// let dst = resize_nearest(&src, Dimensions::new(50, 25)).unwrap();
/// assert_eq!((dst.width, dst.height), (50, 25));
/// ```
pub fn resize_nearest(src: &FrameBuffer, target: Dimensions) -> Result<FrameBuffer, CoreError> {
    if target == src.dimensions() {
        return Ok(src.clone());
    }

    let mut dst = FrameBuffer::try_new(target.width, target.height)?;
    if target.is_empty() || src.width == 0 || src.height == 0 {
        return Ok(dst);
    }

    // Indices source précalculés par axe, u64 pour éviter l'overflow de x * Ws.
    let source_axis = |len: u32, src_len: u32| -> Vec<u32> {
        (0..len)
            .map(|t| (u64::from(t) * u64::from(src_len) / u64::from(len)) as u32)
            .collect()
    };
    let xs = source_axis(target.width, src.width);
    let ys = source_axis(target.height, src.height);

    for (y, &iy) in ys.iter().enumerate() {
        for (x, &ix) in xs.iter().enumerate() {
            dst.set_pixel(x as u32, y as u32, src.pixel(ix, iy));
        }
    }
    Ok(dst)
}
