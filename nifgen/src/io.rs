//! Reading sources and writing generated text.
//!
//! Every input is read in full before any extraction runs, and the output
//! destination is only opened once the text has been rendered, so a failed
//! run never truncates an existing output file.

use std::io::{Read, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, File, OpenOptions};

use crate::error::{NifgenError, Result};

/// Output path meaning "standard output".
pub const STDOUT_PATH: &str = "-";

/// One input stream, read eagerly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    /// Where the text came from.
    pub path: Utf8PathBuf,
    /// Full contents.
    pub text: String,
}

impl SourceText {
    /// Wraps in-memory text, for callers that already hold the contents.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

fn io_error(path: &Utf8Path, source: std::io::Error) -> NifgenError {
    NifgenError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Splits a path into its containing directory and file name.
fn split(path: &Utf8Path) -> Result<(&Utf8Path, &str)> {
    let name = path.file_name().ok_or_else(|| {
        io_error(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    Ok((parent, name))
}

/// Reads one source file as UTF-8 text.
///
/// # Errors
///
/// Returns [`NifgenError::Io`] if the file cannot be opened or decoded.
pub fn read_source(path: &Utf8Path) -> Result<SourceText> {
    let (parent, name) = split(path)?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|io_err| io_error(parent, io_err))?;
    let mut file = dir.open(name).map_err(|io_err| io_error(path, io_err))?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|io_err| io_error(path, io_err))?;
    Ok(SourceText::new(path, text))
}

/// Reads every source in argument order, failing on the first unreadable one.
///
/// # Errors
///
/// Returns the first [`NifgenError::Io`] encountered.
pub fn read_sources(paths: &[Utf8PathBuf]) -> Result<Vec<SourceText>> {
    paths.iter().map(|path| read_source(path)).collect()
}

/// Destination for generated text.
#[derive(Debug)]
pub enum Output {
    /// Process standard output.
    Stdout,
    /// A created or truncated file.
    File {
        /// Path reported in errors.
        path: Utf8PathBuf,
        /// Open handle.
        file: File,
    },
}

impl Output {
    /// Opens `target`, or standard output when it is `None` or `-`.
    ///
    /// Missing parent directories are created. An existing file is
    /// truncated immediately.
    ///
    /// # Errors
    ///
    /// Returns [`NifgenError::Io`] if the destination cannot be opened.
    pub fn open(target: Option<&Utf8Path>) -> Result<Self> {
        let Some(path) = target.filter(|path| path.as_str() != STDOUT_PATH) else {
            return Ok(Self::Stdout);
        };
        let (parent, name) = split(path)?;
        let dir = ensure_dir(parent)?;
        let file = dir
            .open_with(
                name,
                OpenOptions::new().write(true).create(true).truncate(true),
            )
            .map_err(|io_err| io_error(path, io_err))?;
        Ok(Self::File {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Writes `text` and flushes the destination.
    ///
    /// # Errors
    ///
    /// Returns [`NifgenError::Io`] if writing fails.
    pub fn write_text(self, text: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(text.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|io_err| io_error(Utf8Path::new(STDOUT_PATH), io_err))
            }
            Self::File { path, mut file } => file
                .write_all(text.as_bytes())
                .and_then(|()| file.flush())
                .map_err(|io_err| io_error(&path, io_err)),
        }
    }
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority())
                .map_err(|io_err| io_error(path, io_err))?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(|io_err| io_error(path, io_err))
        }
        Err(open_err) => Err(io_error(path, open_err)),
    }
}
