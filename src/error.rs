// SPDX-License-Identifier: MIT
//
// Error taxonomy for the two fallible surfaces: geometry queries and
// raw-mode key capture. Drawing helpers stay on plain `io::Result` —
// they have no failure mode beyond the sink they write to.

use std::io;

use thiserror::Error;

/// Errors surfaced by terminal queries and key capture.
#[derive(Debug, Error)]
pub enum Error {
    /// The file descriptor is not attached to a terminal — typically the
    /// process's output or input has been redirected to a file or pipe.
    /// Geometry queries and raw-mode entry report this instead of
    /// substituting a fabricated size.
    #[error("not a terminal: {source}")]
    NotATerminal {
        /// Underlying OS error (usually `ENOTTY`).
        source: io::Error,
    },

    /// Reading or polling the input device failed mid-capture. The
    /// terminal mode saved at entry has already been restored (best
    /// effort) by the time this reaches the caller.
    #[error("input read failed: {source}")]
    Read {
        /// Underlying I/O error, or `UnexpectedEof` if the stream closed.
        source: io::Error,
    },

    /// ESC was followed by bytes that do not form the CSI arrow pattern
    /// `ESC [ A..D`, or the sequence was cut off by the continuation
    /// poll window. The consumed bytes are carried for diagnostics; they
    /// are gone from the input queue, so the next capture starts clean.
    #[error("unrecognized escape sequence {seq:02x?}")]
    UnrecognizedEscape {
        /// Every byte consumed for this capture, ESC included.
        seq: Vec<u8>,
    },

    /// Re-applying the saved terminal mode failed on the success path of
    /// a key capture. The key itself was read correctly; the terminal
    /// may still be in raw mode.
    #[error("failed to restore terminal mode: {source}")]
    RestoreFailed {
        /// Underlying OS error from `tcsetattr`.
        source: io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_escape_lists_bytes_in_hex() {
        let err = Error::UnrecognizedEscape {
            seq: vec![0x1b, b'[', b'Z'],
        };
        let msg = err.to_string();
        assert!(msg.contains("1b"), "message was: {msg}");
        assert!(msg.contains("5b"), "message was: {msg}");
        assert!(msg.contains("5a"), "message was: {msg}");
    }

    #[test]
    fn not_a_terminal_carries_source() {
        let err = Error::NotATerminal {
            source: io::Error::new(io::ErrorKind::Unsupported, "ENOTTY"),
        };
        assert_eq!(err.to_string(), "not a terminal: ENOTTY");
    }
}
