use std::fs::{self, File};
use std::io::{self, BufWriter, Read};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{EmbedError, Result};
use crate::header::write_header_with_buffer;
use crate::ident::MacroIdent;
use crate::transcode::{DEFAULT_BUFFER_SIZE, StreamError};

/// Configuration for an [`Embedder`]
#[derive(Debug, Clone)]
pub struct EmbedConfig {
    /// Bytes read from the input per transcoding step
    pub buffer_size: usize,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// Outcome of a successful [`Embedder::transform`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedReport {
    pub ident: MacroIdent,
    /// Data bytes embedded, sentinel excluded
    pub bytes: u64,
}

/// Turns one input file into one generated header
#[derive(Debug, Clone, Default)]
pub struct Embedder {
    config: EmbedConfig,
}

impl Embedder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmbedConfig) -> Self {
        Self { config }
    }

    /// Read `input` and write its header to `output`, replacing any existing
    /// file there. A symlink at `output` is written through to its target.
    ///
    /// The header is staged in a uniquely named temporary file next to the
    /// destination and persisted over it, so the destination is either
    /// untouched or holds a complete header.
    pub fn transform(&self, input: &Path, output: &Path) -> Result<EmbedReport> {
        let ident = MacroIdent::from_path(&input.to_string_lossy());
        debug!("Derived identifier {} from {}", ident, input.display());

        let source = File::open(input).map_err(|source| EmbedError::Read {
            path: input.to_path_buf(),
            source,
        })?;

        let target = resolve_target(output);
        let write_err = |source: io::Error| EmbedError::Write {
            path: output.to_path_buf(),
            source,
        };

        // Dropped (and deleted) on every early return below
        let mut staged = NamedTempFile::new_in(staging_dir(&target)).map_err(write_err)?;
        debug!("Staging output in {}", staged.path().display());

        let bytes = {
            let mut writer = BufWriter::new(&mut staged);
            let bytes =
                write_header_with_buffer(&mut writer, &ident, source, self.config.buffer_size)
                    .map_err(|e| match e {
                        StreamError::Read(source) => EmbedError::Read {
                            path: input.to_path_buf(),
                            source,
                        },
                        StreamError::Write(source) => write_err(source),
                    })?;
            writer.into_inner().map_err(|e| write_err(e.into_error()))?;
            bytes
        };

        staged.as_file().sync_all().map_err(write_err)?;
        staged.persist(&target).map_err(|e| write_err(e.error))?;

        debug!("Embedded {} bytes as {} in {}", bytes, ident, target.display());
        Ok(EmbedReport { ident, bytes })
    }
}

/// Follow a symlink at `output` so the rename replaces the file it points
/// to; dangling links and plain paths are used as given.
fn resolve_target(output: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(output)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if is_link {
        if let Ok(resolved) = fs::canonicalize(output) {
            return resolved;
        }
    }
    output.to_path_buf()
}

fn staging_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
