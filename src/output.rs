// SPDX-License-Identifier: MIT
//
// Output buffering.
//
// Drawing a box or a colored line is many small escape sequences. Sent
// one write() at a time they flicker and cost a syscall each; collected
// in an `OutputBuffer` first, the whole figure goes to the terminal in
// a single write. The same buffer doubles as the in-memory sink the
// drawing tests assert against — every emitter takes `impl Write`, so
// nothing in this crate ever needs a real terminal to be exercised.

use std::io::{self, Write};

/// A byte buffer that accumulates ANSI output for a single `write()`.
///
/// Implements [`Write`], so any emitter in [`ansi`](crate::ansi) or
/// [`draw`](crate::draw) can target it directly. `flush` on the trait
/// is a no-op; the buffer only leaves memory through
/// [`flush_stdout`](Self::flush_stdout) or [`flush_to`](Self::flush_to).
pub struct OutputBuffer {
    buf: Vec<u8>,
}

/// Enough for a full-screen box with colors without reallocation.
const DEFAULT_CAPACITY: usize = 4096;

impl OutputBuffer {
    /// Create an empty buffer with default capacity (4 KB).
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Number of bytes accumulated.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The accumulated bytes (for testing and debugging).
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Clear the buffer for reuse (keeps allocated capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Write accumulated output to stdout and clear the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&self.buf)?;
            stdout.flush()?;
            self.buf.clear();
        }
        Ok(())
    }

    /// Write accumulated output to an arbitrary writer and clear the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        if !self.buf.is_empty() {
            w.write_all(&self.buf)?;
            w.flush()?;
            self.buf.clear();
        }
        Ok(())
    }
}

impl Write for OutputBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Intentionally a no-op. Real flushing via flush_stdout() / flush_to().
        Ok(())
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let buf = OutputBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn write_trait_accumulates() {
        let mut buf = OutputBuffer::new();
        write!(buf, "hello {}", 42).unwrap();
        assert_eq!(buf.as_bytes(), b"hello 42");
        assert_eq!(buf.len(), 8);
    }

    #[test]
    fn emitters_target_the_buffer() {
        let mut buf = OutputBuffer::new();
        crate::ansi::clear_line(&mut buf).unwrap();
        assert_eq!(buf.as_bytes(), b"\x1b[2K");
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buf = OutputBuffer::new();
        write!(buf, "some data").unwrap();
        let cap = buf.buf.capacity();
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.buf.capacity(), cap);
    }

    #[test]
    fn flush_to_drains_into_writer() {
        let mut buf = OutputBuffer::new();
        write!(buf, "box bytes").unwrap();

        let mut dest = Vec::new();
        buf.flush_to(&mut dest).unwrap();

        assert_eq!(dest, b"box bytes");
        assert!(buf.is_empty()); // cleared after flush
    }

    #[test]
    fn flush_to_empty_is_noop() {
        let mut buf = OutputBuffer::new();
        let mut dest = Vec::new();
        buf.flush_to(&mut dest).unwrap();
        assert!(dest.is_empty());
    }

    #[test]
    fn trait_flush_does_not_drain() {
        let mut buf = OutputBuffer::new();
        write!(buf, "kept").unwrap();
        buf.flush().unwrap();
        assert_eq!(buf.as_bytes(), b"kept");
    }
}
