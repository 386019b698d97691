//! Batch password output to stdout, file, or clipboard buffer.

use std::fs::OpenOptions;
use std::io::{self, Write};

use zeroize::Zeroize;

use crate::settings::Settings;

use super::charset;
use super::generate::{ConfigError, fill_from_charset};

const FLUSH_AT: usize = 8 * 1024;

/// Buffered writer that zeroizes its buffer after every flush and on drop,
/// so plaintext passwords never linger in freed heap memory.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(FLUSH_AT),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let result = self.inner.write_all(&self.buf);
            self.buf.zeroize();
            result?;
        }
        Ok(())
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        if self.buf.len() >= FLUSH_AT {
            self.flush_buf()?;
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
        let _ = self.inner.flush();
    }
}

/// Batch failure: an empty class selection, or an output-file error
/// (directory creation, open, or write).
#[derive(Debug)]
pub enum OutputError {
    Config(ConfigError),
    Io(io::Error),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Config(e) => write!(f, "{}", e),
            OutputError::Io(e) => write!(f, "output file: {}", e),
        }
    }
}

impl std::error::Error for OutputError {}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

/// Generate `count` passwords into the configured sink.
///
/// Returns `Ok(Some(blob))` with newline-joined passwords when the settings
/// request the clipboard; otherwise the passwords are streamed to the output
/// file (when a path is set) or stdout, and `Ok(None)` is returned. The
/// charset is validated before any sink is touched; file-sink failures
/// surface as [`OutputError::Io`].
pub fn generate_batch(settings: &Settings, count: usize) -> Result<Option<String>, OutputError> {
    let chars = charset::build(settings);
    if chars.is_empty() {
        return Err(OutputError::Config(ConfigError::NoCharacterClassSelected));
    }

    let mut rng = rand::rng();
    let mut buf = Vec::with_capacity(settings.pass_length + 1);

    if settings.to_clipboard {
        let mut passwords = String::new();
        for _ in 0..count {
            fill_from_charset(&mut rng, &chars, settings.pass_length, &mut buf);
            // Safety: buf contains only ASCII bytes from charset
            passwords.push_str(unsafe { std::str::from_utf8_unchecked(&buf) });
            passwords.push('\n');
            buf.zeroize();
        }
        return Ok(Some(passwords));
    }

    let mut file: Option<SecureBufWriter<std::fs::File>> = None;
    if !settings.output_to_terminal && !settings.output_file_path.is_empty() {
        let path = std::path::Path::new(&settings.output_file_path);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }
        file = Some(SecureBufWriter::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        ));
    }

    let stdout = io::stdout();
    let mut out = SecureBufWriter::new(stdout.lock());

    for _ in 0..count {
        fill_from_charset(&mut rng, &chars, settings.pass_length, &mut buf);
        buf.push(b'\n');
        if let Some(ref mut f) = file {
            let result = f.write_all(&buf);
            buf.zeroize();
            result?;
        } else {
            // Terminal writes stay best-effort
            let _ = out.write_all(&buf);
            buf.zeroize();
        }
    }

    if let Some(mut f) = file {
        f.flush()?;
    }

    Ok(None)
}

// ============================================================================
// Tests
// ============================================================================
