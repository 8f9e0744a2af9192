use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::charset::DEFAULT_CHARSET;
use crate::error::CoreError;

/// Configuration d'une conversion.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use lg_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.charset, "ascii");
/// assert!(config.resize.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Nom du charset dans la table built-in.
    pub charset: String,
    /// Taille cible explicite, forme `"LARGEURxHAUTEUR"`. Prioritaire sur `scale`.
    pub resize: Option<String>,
    /// Facteur d'échelle appliqué aux dimensions source (> 0).
    pub scale: Option<f64>,
    /// Fichier de sortie. `None` = stdout.
    pub output: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.to_string(),
            resize: None,
            scale: None,
            output: None,
        }
    }
}

/// Structure TOML sur disque, tous les champs optionnels.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    render: RenderSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderSection {
    charset: Option<String>,
    resize: Option<String>,
    scale: Option<f64>,
    output: Option<PathBuf>,
}

/// Parse a TOML document, filling missing keys from the defaults.
///
/// # Errors
/// `CoreError::Config` on malformed TOML or unknown keys.
///
/// # Example
/// ```
/// use lg_core::config::parse_config;
/// let config = parse_config("[render]\ncharset = \"compact\"\nscale = 0.5\n").unwrap();
/// assert_eq!(config.charset, "compact");
/// assert_eq!(config.scale, Some(0.5));
/// ```
pub fn parse_config(content: &str) -> Result<RenderConfig, CoreError> {
    let file: ConfigFile =
        toml::from_str(content).map_err(|e| CoreError::Config(format!("TOML : {e}")))?;

    let mut config = RenderConfig::default();
    let r = file.render;
    if let Some(v) = r.charset {
        config.charset = v;
    }
    if r.resize.is_some() {
        config.resize = r.resize;
    }
    if r.scale.is_some() {
        config.scale = r.scale;
    }
    if r.output.is_some() {
        config.output = r.output;
    }
    Ok(config)
}

/// Load a configuration file from disk.
///
/// # Errors
/// `CoreError::Config` if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<RenderConfig, CoreError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CoreError::Config(format!("impossible de lire {} : {e}", path.display())))?;
    let config = parse_config(&content)
        .map_err(|e| CoreError::Config(format!("{} : {e}", path.display())))?;
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}
