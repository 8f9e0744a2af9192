use std::path::Path;

use ::image::ImageFormat;
use lg_core::error::CoreError;
use lg_core::frame::FrameBuffer;

/// Formats décodables, choisis d'après l'extension du fichier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    /// `.png`
    Png,
    /// `.jpg` / `.jpeg`
    Jpeg,
}

impl ImageKind {
    /// Devine le format depuis l'extension (insensible à la casse).
    ///
    /// # Errors
    /// `CoreError::UnsupportedFormat` pour toute autre extension.
    ///
    /// # Example
    /// ```
    /// use lg_source::image::ImageKind;
    /// use std::path::Path;
    /// assert_eq!(ImageKind::from_path(Path::new("a.PNG")).unwrap(), ImageKind::Png);
    /// assert_eq!(ImageKind::from_path(Path::new("b.jpeg")).unwrap(), ImageKind::Jpeg);
    /// assert!(ImageKind::from_path(Path::new("c.gif")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("jpg" | "jpeg") => Ok(Self::Jpeg),
            _ => Err(CoreError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// Décode des octets au format annoncé en `FrameBuffer` RGBA.
///
/// `path` ne sert qu'aux messages d'erreur.
///
/// # Errors
/// `CoreError::Decode` si les octets ne sont pas une image valide de ce format.
pub fn decode_image(bytes: &[u8], kind: ImageKind, path: &Path) -> Result<FrameBuffer, CoreError> {
    let img = ::image::load_from_memory_with_format(bytes, kind.format()).map_err(|e| {
        CoreError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(FrameBuffer {
        data: rgba.into_raw(),
        width,
        height,
    })
}

/// Charge une image PNG ou JPEG depuis le disque.
///
/// L'extension est vérifiée avant toute lecture.
///
/// # Errors
/// `UnsupportedFormat` pour une extension inconnue, `Decode` si le fichier
/// est illisible ou corrompu.
///
/// # Example
/// ```no_run
/// use lg_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("photo.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer, CoreError> {
    let kind = ImageKind::from_path(path)?;
    let bytes = std::fs::read(path).map_err(|e| CoreError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    log::info!("Image ouverte : {} ({kind:?})", path.display());
    let frame = decode_image(&bytes, kind, path)?;
    log::info!("Image décodée : {}x{}", frame.width, frame.height);
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{Rgba, RgbaImage};

    fn write_png(dir: &Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(2, 1, Rgba([10, 20, 30, 0]));
        img.save_with_format(&path, ImageFormat::Png).unwrap();
        path
    }

    #[test]
    fn loads_png_into_rgba_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "in.png");
        let frame = load_image(&path).unwrap();
        assert_eq!((frame.width, frame.height), (3, 2));
        assert_eq!(frame.pixel(0, 0), (255, 255, 255, 255));
        assert_eq!(frame.pixel(2, 1), (10, 20, 30, 0));
    }

    #[test]
    fn unsupported_extension_is_rejected_before_reading() {
        let res = load_image(Path::new("/nonexistent/picture.bmp"));
        assert!(matches!(res, Err(CoreError::UnsupportedFormat { .. })));
    }

    #[test]
    fn missing_extension_is_unsupported() {
        let res = ImageKind::from_path(Path::new("picture"));
        assert!(matches!(res, Err(CoreError::UnsupportedFormat { .. })));
    }

    #[test]
    fn missing_file_is_a_decode_failure() {
        let res = load_image(Path::new("/nonexistent/picture.png"));
        assert!(matches!(res, Err(CoreError::Decode { .. })));
    }

    #[test]
    fn garbage_bytes_are_a_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();
        assert!(matches!(load_image(&path), Err(CoreError::Decode { .. })));
    }

    #[test]
    fn png_bytes_behind_jpeg_extension_fail_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let png = write_png(dir.path(), "real.png");
        let fake = dir.path().join("fake.jpeg");
        std::fs::copy(&png, &fake).unwrap();
        assert!(matches!(load_image(&fake), Err(CoreError::Decode { .. })));
    }
}
