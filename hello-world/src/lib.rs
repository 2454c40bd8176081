//! A deliberately roundabout hello world.
//!
//! The greeting is formatted into a fixed-size scratch buffer before being
//! written out, which gives the binary a more interesting symbol table to
//! inspect with `symtab`.

use std::fmt::{self, Write as _};
use std::io;

/// Size of the scratch buffer the greeting is formatted into.
pub const PRINT_BUFFER_SIZE: usize = 1000;

/// The exact bytes written by [`print_hello_message`].
pub const GREETING: &[u8] = b"Hello World!\r\n";

/// Fixed-size scratch storage for one formatting call.
///
/// Formatting past the end of the buffer fails with [`fmt::Error`] instead of
/// truncating.
pub struct PrintBuffer {
    bytes: [u8; PRINT_BUFFER_SIZE],
    len: usize,
}

impl PrintBuffer {
    pub fn new() -> Self {
        PrintBuffer {
            bytes: [0; PRINT_BUFFER_SIZE],
            len: 0,
        }
    }

    /// The bytes written since the last [`clear`](Self::clear).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for PrintBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for PrintBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > PRINT_BUFFER_SIZE {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Formats the greeting into `buffer`, replacing its previous contents.
pub fn format_greeting(buffer: &mut PrintBuffer) -> Result<&[u8], fmt::Error> {
    buffer.clear();
    write!(buffer, "{} {}\r\n", "Hello", "World!")?;
    Ok(buffer.as_bytes())
}

/// Formats the greeting and writes it to `out`.
pub fn print_hello_message<W: io::Write>(out: &mut W) -> io::Result<()> {
    let mut buffer = PrintBuffer::new();
    let greeting = format_greeting(&mut buffer).map_err(io::Error::other)?;
    tracing::debug!(bytes = greeting.len(), "formatted greeting");
    out.write_all(greeting)?;
    out.flush()
}
