use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from the conversion pipeline.
///
/// Every variant is fatal for the current run: the pipeline either
/// produces a complete text or nothing.
#[derive(Error, Debug)]
pub enum CoreError {
    /// No input image was given.
    #[error("Image d'entrée manquante")]
    MissingInput,

    /// The input path does not carry a supported image extension.
    #[error("Format d'image non supporté : {}", path.display())]
    UnsupportedFormat {
        /// Offending input path.
        path: PathBuf,
    },

    /// The file could not be read or its bytes are not a valid image.
    #[error("Décodage impossible de {} : {reason}", path.display())]
    Decode {
        /// Input path.
        path: PathBuf,
        /// Underlying decoder or I/O message.
        reason: String,
    },

    /// The requested charset is not part of the built-in registry.
    #[error("Charset inconnu : {name}")]
    UnknownCharset {
        /// Requested name.
        name: String,
    },

    /// Malformed `WxH` string or unusable scale factor.
    #[error("Dimensions invalides « {spec} » : {reason}")]
    InvalidDimensionSpec {
        /// The raw value as supplied.
        spec: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The output sink could not be written.
    #[error("Écriture impossible vers {} : {reason}", path.display())]
    OutputWrite {
        /// Destination (`-` for stdout).
        path: PathBuf,
        /// Underlying I/O message.
        reason: String,
    },

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),
}
