//! Loading delimited text sheets from byte sources

use std::future::{Future, IntoFuture};
use std::path::{Path, PathBuf};
use std::pin::Pin;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::parser::TextParser;
use super::worksheet::TextSheet;
use crate::common::{Blob, Error, File, Result, decode_text};
use crate::sheet::Grid;

/// Configuration for parsing text-based spreadsheet files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Field delimiter character
    pub delimiter: char,
    /// Whether to drop a leading UTF-8 byte order mark before splitting
    pub strip_bom: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            strip_bom: true,
        }
    }
}

impl TextConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable/disable BOM stripping
    pub fn with_strip_bom(mut self, strip_bom: bool) -> Self {
        self.strip_bom = strip_bom;
        self
    }

    /// Create CSV (comma-separated) configuration
    pub fn csv() -> Self {
        Self::new()
    }

    /// Create TSV (tab-separated) configuration
    pub fn tsv() -> Self {
        Self::new().with_delimiter('\t')
    }

    /// Create semicolon-separated configuration
    pub fn semicolon() -> Self {
        Self::new().with_delimiter(';')
    }

    /// Create pipe-separated configuration
    pub fn pipe() -> Self {
        Self::new().with_delimiter('|')
    }

    /// Load a configuration from YAML. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }
}

/// A byte-bearing object a sheet can be read from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Blob(Blob),
    File(File),
    /// A path that must name a regular file
    Path(PathBuf),
}

impl Source {
    /// Check that the source can be read at all.
    ///
    /// For a path this is one blocking `stat` call, so that an unusable path
    /// is reported by the constructor rather than later by `ready()`.
    fn validate(&self) -> Result<()> {
        let Source::Path(path) = self else {
            return Ok(());
        };
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(Error::InvalidInput(format!(
                "{} is not a File nor a Blob",
                path.display()
            ))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::InvalidInput(
                format!("{} does not exist", path.display()),
            )),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Read the full payload.
    pub async fn read_bytes(self) -> Result<Bytes> {
        match self {
            Source::Blob(blob) => Ok(blob.bytes().clone()),
            Source::File(file) => Ok(file.bytes().clone()),
            Source::Path(path) => Ok(tokio::fs::read(path).await?.into()),
        }
    }
}

impl From<Blob> for Source {
    fn from(blob: Blob) -> Self {
        Source::Blob(blob)
    }
}

impl From<File> for Source {
    fn from(file: File) -> Self {
        Source::File(file)
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}

/// Read and split a source in one shot.
pub async fn read_grid(source: Source, config: TextConfig) -> Result<Grid> {
    tracing::trace!(?config, "decoding source");
    let bytes = source.read_bytes().await?;
    let text = decode_text(&bytes, config.strip_bom);
    Ok(TextParser::new(config.delimiter).parse(&text))
}

enum Decode {
    /// Running on the tokio runtime that was current at construction
    Spawned(JoinHandle<Result<Grid>>),
    /// No runtime was available; decoding happens inside `ready()`
    Deferred(Source),
}

/// A sheet whose source is still being decoded.
///
/// This is the Pending half of the sheet lifecycle. It has no cell accessors;
/// awaiting [`ready`](Self::ready) (or the handle itself) yields the
/// immutable [`TextSheet`].
///
/// ```rust,no_run
/// use dsvsheet::common::Blob;
/// use dsvsheet::sheet::text::{PendingTextSheet, TextConfig};
///
/// # async fn demo() -> dsvsheet::common::Result<()> {
/// let pending = PendingTextSheet::new(Blob::from("a,b\n1,2"), TextConfig::csv())?;
/// let sheet = pending.await?;
/// assert_eq!(sheet.cell(1, 0), Some("1"));
/// # Ok(())
/// # }
/// ```
pub struct PendingTextSheet {
    config: TextConfig,
    decode: Decode,
}

impl PendingTextSheet {
    /// Validate `source` and start decoding it.
    ///
    /// Fails with [`Error::InvalidInput`] when the source is not readable.
    /// Returns without waiting for the payload to be decoded.
    ///
    /// A [`Source::Path`] is checked with a blocking filesystem `stat` before
    /// this returns. Reading the file itself happens on the runtime, and a file
    /// that disappears in between is reported as [`Error::Io`] by
    /// [`ready`](Self::ready).
    pub fn new(source: impl Into<Source>, config: TextConfig) -> Result<Self> {
        let source = source.into();
        source.validate()?;

        let decode = match Handle::try_current() {
            Ok(handle) => Decode::Spawned(handle.spawn(read_grid(source, config.clone()))),
            Err(_) => {
                tracing::debug!("no tokio runtime, deferring decode until ready()");
                Decode::Deferred(source)
            },
        };
        Ok(PendingTextSheet { config, decode })
    }

    /// The delimiter the sheet will be split on.
    #[inline]
    pub fn delimiter(&self) -> char {
        self.config.delimiter
    }

    /// Whether background decoding has finished.
    ///
    /// Always `false` for a deferred decode.
    pub fn is_ready(&self) -> bool {
        match &self.decode {
            Decode::Spawned(handle) => handle.is_finished(),
            Decode::Deferred(_) => false,
        }
    }

    /// Wait for decoding to finish.
    pub async fn ready(self) -> Result<TextSheet> {
        let delimiter = self.config.delimiter;
        let grid = match self.decode {
            Decode::Spawned(handle) => handle.await??,
            Decode::Deferred(source) => read_grid(source, self.config).await?,
        };
        Ok(TextSheet::from_grid(grid, delimiter))
    }
}

impl IntoFuture for PendingTextSheet {
    type Output = Result<TextSheet>;
    type IntoFuture = Pin<Box<dyn Future<Output = Result<TextSheet>> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.ready())
    }
}

impl std::fmt::Debug for PendingTextSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingTextSheet")
            .field("config", &self.config)
            .field("ready", &self.is_ready())
            .finish()
    }
}
