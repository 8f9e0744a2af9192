use std::io::Write;
use std::path::{Path, PathBuf};

use lg_core::error::CoreError;
use lg_core::frame::RenderedText;

/// Destination du texte rendu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sink {
    /// Sortie standard, suivie d'un saut de ligne final.
    Stdout,
    /// Fichier écrit tel quel, sans saut de ligne final.
    File(PathBuf),
}

impl From<Option<PathBuf>> for Sink {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

impl Sink {
    /// Écrit le texte complet vers la destination.
    ///
    /// # Errors
    /// `CoreError::OutputWrite` si l'écriture échoue.
    pub fn write(&self, text: &RenderedText) -> Result<(), CoreError> {
        match self {
            Self::Stdout => {
                let stdout = std::io::stdout();
                write_stream(&mut stdout.lock(), text)
                    .map_err(|e| write_error(Path::new("-"), &e))?;
            }
            Self::File(path) => {
                std::fs::write(path, text.as_str()).map_err(|e| write_error(path, &e))?;
                log::info!("Sortie écrite dans '{}'", path.display());
            }
        }
        Ok(())
    }
}

/// Stream rendition: the text followed by a single newline.
fn write_stream<W: Write>(out: &mut W, text: &RenderedText) -> std::io::Result<()> {
    writeln!(out, "{text}")?;
    out.flush()
}

fn write_error(path: &Path, err: &std::io::Error) -> CoreError {
    CoreError::OutputWrite {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
