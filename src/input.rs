// SPDX-License-Identifier: MIT
//
// Key capture — one logical key press per call.
//
// Safety: This module necessarily uses `unsafe` for raw `read()` and
// `poll()` on a terminal descriptor. These are the POSIX interfaces
// the capture loop is built on; each unsafe block is minimal.
#![allow(unsafe_code)]
//
// The capture pipeline has three layers, split so each is testable on
// its own:
//
//   read_key / read_key_from — enter a scoped raw-mode session, gather
//   the bytes of one key press, restore the mode, decode.
//
//   gather — the fd-level loop. Blocks for the first byte; if it is
//   ESC, polls for up to two continuation bytes with a short window
//   each, stopping early as soon as the prefix can no longer become a
//   CSI arrow sequence.
//
//   decode — pure function from a byte slice to a `Key`. All of the
//   escape-sequence policy lives here and is unit-tested on slices.
//
// Escape ambiguity policy: a lone ESC (nothing follows within the poll
// window) is returned as `Key::Byte(27)` — a real Escape press must
// not hang the caller. ESC followed by anything that is not exactly
// `[` then one of `A B C D` is `Error::UnrecognizedEscape`, carrying
// every byte consumed. Consumed bytes are gone from the input queue
// either way, so the next capture starts clean.

use std::io;

#[cfg(unix)]
use std::os::fd::RawFd;
#[cfg(not(unix))]
type RawFd = i32;

use crate::error::{Error, Result};
use crate::terminal::RawModeGuard;

/// How long to wait for each escape-sequence continuation byte
/// (milliseconds).
///
/// Arrow-key bytes arrive back-to-back from the terminal, microseconds
/// apart; a human pressing Escape then `[` takes far longer. 25 ms per
/// byte separates the two cases without perceptible lag on a lone
/// Escape press.
pub const ESC_POLL_TIMEOUT_MS: i32 = 25;

/// The escape character, 0x1B.
const ESC: u8 = 0x1b;

// ─── Key ────────────────────────────────────────────────────────────────────

/// One logical key press.
///
/// Keys that arrive as a single raw byte — letters, digits, space,
/// control codes — are carried unchanged in [`Byte`](Key::Byte). The
/// four arrow keys have no single-byte representation; they are
/// decoded from the 3-byte CSI sequence `ESC [ A..D` into their own
/// variants, so `Key::Up` can never collide with the letter `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key delivered as one raw byte, value unchanged.
    Byte(u8),
    /// Arrow up (`ESC [ A`).
    Up,
    /// Arrow down (`ESC [ B`).
    Down,
    /// Arrow right (`ESC [ C`).
    Right,
    /// Arrow left (`ESC [ D`).
    Left,
}

impl Key {
    /// Tab, byte 9.
    pub const TAB: Self = Self::Byte(9);
    /// Enter, byte 10. Raw-mode entry leaves `ICRNL` on, so the
    /// terminal delivers Return as a line feed.
    pub const ENTER: Self = Self::Byte(10);
    /// Escape, byte 27 — a standalone press, not a sequence prefix.
    pub const ESC: Self = Self::Byte(27);
    /// Space, byte 32.
    pub const SPACE: Self = Self::Byte(32);
    /// Delete/backspace, byte 127.
    pub const DELETE: Self = Self::Byte(127);

    /// The raw byte behind this key, if it has one. Arrows don't.
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> Option<u8> {
        match self {
            Self::Byte(b) => Some(b),
            _ => None,
        }
    }

    /// The printable ASCII character behind this key, if any.
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Byte(b) if b.is_ascii_graphic() || b == b' ' => Some(b as char),
            _ => None,
        }
    }

    /// The decimal value of this key if it is an ASCII digit.
    #[inline]
    #[must_use]
    pub const fn as_digit(self) -> Option<u8> {
        match self {
            Self::Byte(b) if b.is_ascii_digit() => Some(b - b'0'),
            _ => None,
        }
    }

    /// Whether this key is an ASCII letter.
    #[inline]
    #[must_use]
    pub const fn is_letter(self) -> bool {
        matches!(self, Self::Byte(b) if b.is_ascii_alphabetic())
    }

    /// Whether this key is one of the four arrows.
    #[inline]
    #[must_use]
    pub const fn is_arrow(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Right | Self::Left)
    }
}

// ─── Decoding ───────────────────────────────────────────────────────────────

/// Decode the gathered bytes of one key press.
///
/// - A single non-ESC byte is that key, unchanged.
/// - A single ESC byte is a standalone Escape press ([`Key::ESC`]).
/// - `ESC [ A..D` is the matching arrow key.
/// - Anything else is [`Error::UnrecognizedEscape`] with the bytes.
///
/// # Errors
///
/// [`Error::UnrecognizedEscape`] for any sequence that is not exactly
/// one of the shapes above; [`Error::Read`] for an empty slice.
pub fn decode(bytes: &[u8]) -> Result<Key> {
    match *bytes {
        [] => Err(Error::Read {
            source: io::Error::from(io::ErrorKind::UnexpectedEof),
        }),
        [b] if b != ESC => Ok(Key::Byte(b)),
        [ESC] => Ok(Key::ESC),
        [ESC, b'[', b'A'] => Ok(Key::Up),
        [ESC, b'[', b'B'] => Ok(Key::Down),
        [ESC, b'[', b'C'] => Ok(Key::Right),
        [ESC, b'[', b'D'] => Ok(Key::Left),
        _ => Err(Error::UnrecognizedEscape {
            seq: bytes.to_vec(),
        }),
    }
}

// ─── Byte Gathering ─────────────────────────────────────────────────────────

/// Read one byte from `fd`, blocking until it arrives.
#[cfg(unix)]
fn read_byte(fd: RawFd) -> Result<u8> {
    let mut b: u8 = 0;
    let n = unsafe { libc::read(fd, (&raw mut b).cast::<libc::c_void>(), 1) };
    match n {
        1 => Ok(b),
        0 => Err(Error::Read {
            source: io::Error::from(io::ErrorKind::UnexpectedEof),
        }),
        _ => Err(Error::Read {
            source: io::Error::last_os_error(),
        }),
    }
}

/// Wait up to `timeout_ms` for `fd` to become readable.
#[cfg(unix)]
fn poll_readable(fd: RawFd, timeout_ms: i32) -> Result<bool> {
    let mut pfd = libc::pollfd {
        fd,
        events: libc::POLLIN,
        revents: 0,
    };
    let ready = unsafe { libc::poll(&raw mut pfd, 1, timeout_ms) };
    match ready {
        1.. => Ok(true),
        0 => Ok(false),
        _ => Err(Error::Read {
            source: io::Error::last_os_error(),
        }),
    }
}

/// Gather the bytes of exactly one key press from `fd`.
///
/// Blocks for the first byte. If it is ESC, waits up to
/// [`ESC_POLL_TIMEOUT_MS`] for `[`, and the same again for the final
/// letter — but stops consuming the moment the prefix diverges from
/// the CSI arrow shape, so a following key press is never swallowed.
#[cfg(unix)]
fn gather(fd: RawFd) -> Result<Vec<u8>> {
    let first = read_byte(fd)?;
    let mut seq = vec![first];
    if first != ESC {
        return Ok(seq);
    }

    if !poll_readable(fd, ESC_POLL_TIMEOUT_MS)? {
        // Standalone Escape press.
        log::trace!("lone ESC: no continuation within {ESC_POLL_TIMEOUT_MS}ms");
        return Ok(seq);
    }
    let second = read_byte(fd)?;
    seq.push(second);
    if second != b'[' {
        return Ok(seq);
    }

    if poll_readable(fd, ESC_POLL_TIMEOUT_MS)? {
        seq.push(read_byte(fd)?);
    } else {
        log::trace!("escape sequence cut off after CSI prefix");
    }
    Ok(seq)
}

// ─── Capture ────────────────────────────────────────────────────────────────

/// Capture one logical key press from stdin.
///
/// Enters a scoped raw-mode session on stdin (canonical buffering,
/// echo, and signal keys off), blocks until a key arrives, decodes
/// CSI arrow sequences, and restores the prior terminal mode before
/// returning — on every path, error paths included.
///
/// Concurrent calls are unsupported: the line discipline is a single
/// process-global resource, so callers must serialize.
///
/// # Errors
///
/// - [`Error::NotATerminal`] if stdin is not a terminal.
/// - [`Error::Read`] if the read or poll fails; mode already restored.
/// - [`Error::UnrecognizedEscape`] for a non-arrow escape sequence.
/// - [`Error::RestoreFailed`] if the key was read but the saved mode
///   could not be re-applied.
#[cfg(unix)]
pub fn read_key() -> Result<Key> {
    read_key_from(libc::STDIN_FILENO)
}

#[cfg(not(unix))]
pub fn read_key() -> Result<Key> {
    // Entering raw mode reports the platform gap.
    RawModeGuard::enter(0).map(|_| Key::ESC)
}

/// Capture one logical key press from an arbitrary terminal descriptor.
///
/// The general form of [`read_key`], for callers holding another fd
/// bound to the controlling terminal (or a pseudo-terminal in tests).
///
/// # Errors
///
/// As [`read_key`].
#[cfg(unix)]
pub fn read_key_from(fd: RawFd) -> Result<Key> {
    let guard = RawModeGuard::enter(fd)?;
    // On a gather error `?` drops the guard, which restores the saved
    // mode best-effort before the error propagates.
    let bytes = gather(fd)?;
    guard.restore()?;
    decode(&bytes)
}

#[cfg(not(unix))]
pub fn read_key_from(fd: RawFd) -> Result<Key> {
    RawModeGuard::enter(fd).map(|_| Key::ESC)
}

// ─── Tests ───────────────────────────────────────────────────────────────────


#[cfg(all(test, unix))]
mod unix_tests {
    use std::ptr;

    use super::*;
    use crate::terminal::{size_of, Size};

    /// Pseudo-terminal pair for end-to-end capture tests. Input typed
    /// "at the keyboard" is written to the master side; `read_key_from`
    /// runs against the slave, exactly as it would against stdin.
    struct Pty {
        master: RawFd,
        slave: RawFd,
    }

    impl Pty {
        fn open() -> Self {
            let mut master: RawFd = -1;
            let mut slave: RawFd = -1;
            let mut ws = libc::winsize {
                ws_row: 24,
                ws_col: 80,
                ws_xpixel: 0,
                ws_ypixel: 0,
            };
            let rc = unsafe {
                libc::openpty(
                    &raw mut master,
                    &raw mut slave,
                    ptr::null_mut(),
                    ptr::null_mut(),
                    &raw mut ws,
                )
            };
            assert_eq!(rc, 0, "openpty failed");
            Self { master, slave }
        }

        fn type_bytes(&self, bytes: &[u8]) {
            let n = unsafe {
                libc::write(
                    self.master,
                    bytes.as_ptr().cast::<libc::c_void>(),
                    bytes.len(),
                )
            };
            assert_eq!(n, bytes.len() as isize, "short write to pty master");
        }

        fn termios(&self) -> libc::termios {
            let mut t: libc::termios = unsafe { std::mem::zeroed() };
            assert_eq!(unsafe { libc::tcgetattr(self.slave, &raw mut t) }, 0);
            t
        }
    }

    impl Drop for Pty {
        fn drop(&mut self) {
            unsafe {
                libc::close(self.slave);
                libc::close(self.master);
            }
        }
    }

    #[test]
    fn captures_a_plain_letter() {
        let pty = Pty::open();
        pty.type_bytes(b"a");
        assert_eq!(read_key_from(pty.slave).unwrap(), Key::Byte(b'a'));
    }

    #[test]
    fn enter_arrives_as_byte_ten() {
        // The terminal sends CR for the Return key; ICRNL (left on by
        // the raw-mode session) translates it to LF.
        let pty = Pty::open();
        pty.type_bytes(b"\r");
        assert_eq!(read_key_from(pty.slave).unwrap(), Key::ENTER);
    }

    #[test]
    fn captures_each_arrow() {
        let pty = Pty::open();
        for (seq, key) in [
            (&b"\x1b[A"[..], Key::Up),
            (b"\x1b[B", Key::Down),
            (b"\x1b[C", Key::Right),
            (b"\x1b[D", Key::Left),
        ] {
            pty.type_bytes(seq);
            assert_eq!(read_key_from(pty.slave).unwrap(), key);
        }
    }

    #[test]
    fn lone_esc_returns_escape_after_poll_window() {
        let pty = Pty::open();
        pty.type_bytes(b"\x1b");
        // Nothing follows; the 25ms window elapses and ESC comes back
        // alone instead of blocking.
        assert_eq!(read_key_from(pty.slave).unwrap(), Key::ESC);
    }

    #[test]
    fn unrecognized_sequence_does_not_corrupt_next_capture() {
        let pty = Pty::open();
        pty.type_bytes(b"\x1b[Z");
        assert!(matches!(
            read_key_from(pty.slave),
            Err(Error::UnrecognizedEscape { .. })
        ));

        // All three bytes were consumed; the queue is clean.
        pty.type_bytes(b"q");
        assert_eq!(read_key_from(pty.slave).unwrap(), Key::Byte(b'q'));
    }

    #[test]
    fn alt_style_escape_leaves_following_key_intact() {
        let pty = Pty::open();
        // ESC x is not a CSI prefix: only those two bytes may be
        // consumed, so the 'y' behind them is the next key press.
        pty.type_bytes(b"\x1bxy");
        match read_key_from(pty.slave) {
            Err(Error::UnrecognizedEscape { seq }) => assert_eq!(seq, b"\x1bx"),
            other => panic!("expected UnrecognizedEscape, got {other:?}"),
        }
        assert_eq!(read_key_from(pty.slave).unwrap(), Key::Byte(b'y'));
    }

    #[test]
    fn mode_restored_after_successful_capture() {
        let pty = Pty::open();
        let before = pty.termios();

        pty.type_bytes(b"k");
        read_key_from(pty.slave).unwrap();

        let after = pty.termios();
        assert_eq!(before.c_lflag, after.c_lflag);
        assert_eq!(before.c_iflag, after.c_iflag);
        assert_eq!(before.c_cc, after.c_cc);
    }

    #[test]
    fn mode_restored_after_unrecognized_escape() {
        let pty = Pty::open();
        let before = pty.termios();

        pty.type_bytes(b"\x1b[Z");
        let _ = read_key_from(pty.slave);

        let after = pty.termios();
        assert_eq!(before.c_lflag, after.c_lflag);
    }

    #[test]
    fn capture_against_a_file_is_not_a_terminal() {
        use std::os::fd::AsRawFd;
        let file = tempfile::tempfile().unwrap();
        assert!(matches!(
            read_key_from(file.as_raw_fd()),
            Err(Error::NotATerminal { .. })
        ));
    }

    #[test]
    fn pty_fixture_has_the_configured_size() {
        // The same fd serves both capture and geometry.
        let pty = Pty::open();
        assert_eq!(size_of(pty.slave).unwrap(), Size { cols: 80, rows: 24 });
    }
}
