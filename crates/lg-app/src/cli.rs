use std::path::PathBuf;

use clap::Parser;

/// lumaglyph : convertit une image PNG ou JPEG en art ASCII.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source (.png, .jpg, .jpeg).
    pub input: Option<PathBuf>,

    /// Fichier de sortie. Défaut : stdout.
    #[arg(short, long = "out")]
    pub output: Option<PathBuf>,

    /// Taille de sortie explicite, forme LARGEURxHAUTEUR (ex: 120x40).
    #[arg(short, long)]
    pub resize: Option<String>,

    /// Facteur d'échelle appliqué à la taille de l'image (ignoré si --resize).
    #[arg(short, long)]
    pub scale: Option<f64>,

    /// Charset built-in à utiliser (voir --list-charsets).
    #[arg(short, long)]
    pub charset: Option<String>,

    /// Affiche les étapes du pipeline (équivaut à --log-level info).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Fichier de configuration TOML. Défaut : lumaglyph.toml s'il existe.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Liste les charsets disponibles puis quitte.
    #[arg(long, default_value_t = false)]
    pub list_charsets: bool,
}

impl Cli {
    /// Effective log filter: `--log-level`, raised to `info` by `--verbose`.
    #[must_use]
    pub fn log_filter(&self) -> log::LevelFilter {
        let level = self.log_level.parse().unwrap_or(log::LevelFilter::Warn);
        if self.verbose {
            level.max(log::LevelFilter::Info)
        } else {
            level
        }
    }
}
