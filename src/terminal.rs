// SPDX-License-Identifier: MIT
//
// Terminal geometry queries and raw-mode control.
//
// Safety: This module necessarily uses `unsafe` for termios (tcgetattr,
// tcsetattr), ioctl (TIOCGWINSZ), poll, and isatty. These are the
// standard POSIX interfaces for terminal control — there is no safe
// alternative. Each unsafe block is minimal and documented.
#![allow(unsafe_code)]
//
// Two concerns live here because both talk to the same device:
//
//   Geometry — `size` / `size_of` ask the terminal for its current
//   dimensions via `ioctl(TIOCGWINSZ)`. Every call re-queries the
//   device, so values track live resizes. A process whose output has
//   been redirected has no terminal to ask; that is reported as
//   `Error::NotATerminal`, never papered over with a default size.
//
//   Raw mode — `RawModeGuard` snapshots the full termios state, turns
//   off canonical buffering / echo / signal keys, and re-applies the
//   snapshot when dropped. The line discipline is process-global OS
//   state, so restoration must survive every exit path, including
//   unwinding; the guard makes that mechanical instead of a calling
//   convention.

use std::io;

#[cfg(unix)]
use std::os::fd::RawFd;
#[cfg(not(unix))]
type RawFd = i32;

use crate::error::{Error, Result};

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

impl Size {
    /// Total number of cells (`cols × rows`).
    #[inline]
    #[must_use]
    pub const fn area(self) -> u32 {
        self.cols as u32 * self.rows as u32
    }
}

// ─── Geometry Queries ───────────────────────────────────────────────────────

/// Query the size of the terminal attached to stdout.
///
/// Re-queries the device on every call — there is no cache, so the
/// result reflects a resize that happened a moment ago.
///
/// # Errors
///
/// [`Error::NotATerminal`] if stdout is not attached to a terminal
/// (redirected to a file or pipe).
#[cfg(unix)]
pub fn size() -> Result<Size> {
    size_of(libc::STDOUT_FILENO)
}

#[cfg(not(unix))]
pub fn size() -> Result<Size> {
    Err(Error::NotATerminal {
        source: io::Error::new(io::ErrorKind::Unsupported, "not a unix platform"),
    })
}

/// Query the size of the terminal attached to `fd`.
///
/// The general form of [`size`] for callers holding another descriptor
/// bound to the controlling terminal (or a pseudo-terminal in tests).
///
/// # Errors
///
/// [`Error::NotATerminal`] if `fd` is not a terminal or the device
/// reports a zero-sized window.
#[cfg(unix)]
pub fn size_of(fd: RawFd) -> Result<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &raw mut ws) };

    if rc != 0 {
        return Err(Error::NotATerminal {
            source: io::Error::last_os_error(),
        });
    }
    if ws.ws_col == 0 || ws.ws_row == 0 {
        // Some devices answer the ioctl but report no window.
        return Err(Error::NotATerminal {
            source: io::Error::new(io::ErrorKind::InvalidData, "zero-sized window"),
        });
    }

    Ok(Size {
        cols: ws.ws_col,
        rows: ws.ws_row,
    })
}

#[cfg(not(unix))]
pub fn size_of(_fd: RawFd) -> Result<Size> {
    size()
}

/// Column count of the terminal attached to stdout.
///
/// # Errors
///
/// [`Error::NotATerminal`] — see [`size`].
pub fn width() -> Result<u16> {
    Ok(size()?.cols)
}

/// Row count of the terminal attached to stdout.
///
/// # Errors
///
/// [`Error::NotATerminal`] — see [`size`].
pub fn height() -> Result<u16> {
    Ok(size()?.rows)
}

/// Check whether `fd` is connected to a terminal (TTY).
#[cfg(unix)]
#[must_use]
pub fn is_tty(fd: RawFd) -> bool {
    unsafe { libc::isatty(fd) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn is_tty(_fd: RawFd) -> bool {
    false
}

// ─── RawModeGuard ───────────────────────────────────────────────────────────

/// Scoped raw-mode session on a terminal descriptor.
///
/// [`enter`](Self::enter) snapshots the termios state, then clears
/// `ICANON | ECHO | ISIG` and sets `VMIN=1, VTIME=0` so a `read()`
/// delivers each byte as typed, blocking until at least one arrives.
/// Everything else is left alone — in particular `ICRNL` stays on, so
/// Enter is still delivered as byte 10.
///
/// The snapshot is re-applied by [`restore`](Self::restore) on the
/// normal path, or by `Drop` on any other path (early return, `?`,
/// unwinding). A session therefore cannot leak raw mode no matter how
/// it ends.
///
/// Raw mode is process-global terminal state: callers running multiple
/// threads must serialize sessions themselves.
#[cfg(unix)]
#[derive(Debug)]
pub struct RawModeGuard {
    fd: RawFd,
    saved: libc::termios,
    restored: bool,
}

#[cfg(unix)]
impl RawModeGuard {
    /// Snapshot the current mode of `fd` and switch it to raw input.
    ///
    /// # Errors
    ///
    /// [`Error::NotATerminal`] if `fd` is not a terminal, or if the
    /// mode change is rejected by the device.
    pub fn enter(fd: RawFd) -> Result<Self> {
        let mut saved: libc::termios = unsafe { std::mem::zeroed() };
        if unsafe { libc::tcgetattr(fd, &raw mut saved) } != 0 {
            return Err(Error::NotATerminal {
                source: io::Error::last_os_error(),
            });
        }

        let mut mode = saved;
        mode.c_lflag &= !(libc::ICANON | libc::ECHO | libc::ISIG);
        // VMIN=1, VTIME=0: read() blocks until at least 1 byte available.
        mode.c_cc[libc::VMIN] = 1;
        mode.c_cc[libc::VTIME] = 0;

        // TCSANOW, not TCSAFLUSH: type-ahead between captures survives.
        if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &raw const mode) } != 0 {
            return Err(Error::NotATerminal {
                source: io::Error::last_os_error(),
            });
        }

        log::trace!("raw mode entered on fd {fd}");
        Ok(Self {
            fd,
            saved,
            restored: false,
        })
    }

    /// Re-apply the snapshot taken at [`enter`](Self::enter).
    ///
    /// Consumes the guard; the `Drop` restore becomes a no-op.
    ///
    /// # Errors
    ///
    /// [`Error::RestoreFailed`] if `tcsetattr` rejects the snapshot.
    /// The terminal may still be in raw mode in that case.
    pub fn restore(mut self) -> Result<()> {
        self.restore_now()
            .map_err(|source| Error::RestoreFailed { source })
    }

    /// One-shot restore shared by `restore` and `Drop`.
    fn restore_now(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        if unsafe { libc::tcsetattr(self.fd, libc::TCSANOW, &raw const self.saved) } != 0 {
            return Err(io::Error::last_os_error());
        }
        log::trace!("raw mode restored on fd {}", self.fd);
        Ok(())
    }
}

#[cfg(unix)]
impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore_now() {
            // Nothing more we can do from a destructor.
            log::warn!("failed to restore terminal mode on fd {}: {e}", self.fd);
        }
    }
}

/// Non-unix placeholder — raw mode is unavailable.
#[cfg(not(unix))]
#[derive(Debug)]
pub struct RawModeGuard {}

#[cfg(not(unix))]
impl RawModeGuard {
    /// Always fails: there is no POSIX line discipline to reconfigure.
    ///
    /// # Errors
    ///
    /// [`Error::NotATerminal`] unconditionally.
    pub fn enter(_fd: RawFd) -> Result<Self> {
        Err(Error::NotATerminal {
            source: io::Error::new(io::ErrorKind::Unsupported, "not a unix platform"),
        })
    }

    /// No-op counterpart of the unix restore.
    ///
    /// # Errors
    ///
    /// None; present for signature parity.
    pub fn restore(self) -> Result<()> {
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
