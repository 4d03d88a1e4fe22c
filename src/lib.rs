// SPDX-License-Identifier: MIT
//
// termkit — low-level terminal drawing primitives.
//
// Cursor movement, 256-color control, line and box drawing, window
// size queries, and raw-mode key capture for text-mode CLIs. This is
// the presentation floor a larger application stands on: it owns no
// event loop, no widget model, and no application state.
//
// The crate intentionally avoids TUI frameworks (ratatui, crossterm)
// in favor of direct terminal control: ANSI escape sequences written
// to any `impl Write` sink, and raw termios for the two operations
// that genuinely need the device — asking it for its size, and
// reading one key press with arrow-sequence decoding. Every byte sent
// to the terminal is pinned by a test.
//
// The terminal's line discipline is a single process-global resource;
// key capture saves and restores it around every call, and concurrent
// captures must be serialized by the caller.

pub mod ansi;
pub mod color;
pub mod draw;
pub mod error;
pub mod input;
pub mod output;
pub mod symbol;
pub mod terminal;

pub use color::Color;
pub use error::{Error, Result};
pub use input::{read_key, Key};
pub use output::OutputBuffer;
pub use terminal::{size, RawModeGuard, Size};
