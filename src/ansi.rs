// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No
// state, no device access — this module just knows the byte-level
// encoding of every terminal command the drawing helpers need. The
// exact byte forms are a compatibility contract: colors always use the
// 256-color SGR encoding (`38;5;{n}` / `48;5;{n}`), reset is the
// parameterless `\x1b[m`, and cursor coordinates are 1-based exactly as
// the terminal consumes them. Tests pin every sequence.
//
// All functions return `io::Result` propagated from the underlying
// writer. In practice they never fail when writing to `OutputBuffer`
// (backed by a Vec).

use std::io::{self, Write};

use crate::color::Color;

// ─── Color ───────────────────────────────────────────────────────────────────

/// Reset all colors and attributes to terminal defaults (parameterless SGR).
#[inline]
pub fn reset_color(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[m")
}

/// Set the foreground (text) color using the 256-color SGR form.
#[inline]
pub fn set_fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    write!(w, "\x1b[38;5;{}m", color.index())
}

/// Set the background color using the 256-color SGR form.
#[inline]
pub fn set_bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    write!(w, "\x1b[48;5;{}m", color.index())
}

// ─── Cursor Motion ───────────────────────────────────────────────────────────

/// Move the cursor to an absolute position (CUP).
///
/// Coordinates are 1-based, terminal-native: `move_to(w, 1, 1)` is the
/// top-left corner. The terminal clamps out-of-range values to its edges.
#[inline]
pub fn move_to(w: &mut impl Write, line: u16, column: u16) -> io::Result<()> {
    write!(w, "\x1b[{line};{column}H")
}

/// Move the cursor up by `lines` (CUU). The column is unchanged.
#[inline]
pub fn move_up(w: &mut impl Write, lines: u16) -> io::Result<()> {
    write!(w, "\x1b[{lines}A")
}

/// Move the cursor down by `lines` (CUD). The column is unchanged.
#[inline]
pub fn move_down(w: &mut impl Write, lines: u16) -> io::Result<()> {
    write!(w, "\x1b[{lines}B")
}

/// Move the cursor right by `columns` (CUF).
#[inline]
pub fn move_right(w: &mut impl Write, columns: u16) -> io::Result<()> {
    write!(w, "\x1b[{columns}C")
}

/// Move the cursor left by `columns` (CUB).
#[inline]
pub fn move_left(w: &mut impl Write, columns: u16) -> io::Result<()> {
    write!(w, "\x1b[{columns}D")
}

/// Move the cursor down by `lines` and to column 1 (CNL).
#[inline]
pub fn move_down_begin(w: &mut impl Write, lines: u16) -> io::Result<()> {
    write!(w, "\x1b[{lines}E")
}

/// Move the cursor up by `lines` and to column 1 (CPL).
#[inline]
pub fn move_up_begin(w: &mut impl Write, lines: u16) -> io::Result<()> {
    write!(w, "\x1b[{lines}F")
}

/// Move the cursor to `column` on the current line (CHA, 1-based).
#[inline]
pub fn move_to_column(w: &mut impl Write, column: u16) -> io::Result<()> {
    write!(w, "\x1b[{column}G")
}

/// Move the cursor to the start of the current line.
#[inline]
pub fn move_to_line_start(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[1G")
}

/// Save the cursor position (DECSC). One slot — a second save overwrites
/// the first.
#[inline]
pub fn save_cursor(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b7")
}

/// Restore the cursor to the last saved position (DECRC).
#[inline]
pub fn restore_cursor(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b8")
}

// ─── Clearing ────────────────────────────────────────────────────────────────

/// Clear the entire screen and home the cursor (ED 2 + CUP 1;1).
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2J\x1b[1;1H")
}

/// Clear the current line without moving the cursor (EL 2).
#[inline]
pub fn clear_line(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2K")
}

// ─── Line Break ──────────────────────────────────────────────────────────────

/// Emit a newline, moving to the next line.
#[inline]
pub fn break_line(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\n")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Helper: run an ANSI function and return its output as a string.
    fn emit<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── Color ───────────────────────────────────────────────────────────

    #[test]
    fn reset_is_parameterless_sgr() {
        // `\x1b[m`, not `\x1b[0m` — the forms are equivalent to the
        // terminal but the shorter one is the pinned output.
        assert_eq!(emit(reset_color), "\x1b[m");
    }

    #[test]
    fn fg_named_color() {
        assert_eq!(emit(|w| set_fg(w, Color::Orange)), "\x1b[38;5;208m");
    }

    #[test]
    fn fg_low_index_keeps_extended_form() {
        // Index 0 still encodes as 38;5;0, never the compact SGR 30.
        assert_eq!(emit(|w| set_fg(w, Color::Black)), "\x1b[38;5;0m");
    }

    #[test]
    fn fg_indexed_max() {
        assert_eq!(
            emit(|w| set_fg(w, Color::Indexed(255))),
            "\x1b[38;5;255m"
        );
    }

    #[test]
    fn bg_named_color() {
        assert_eq!(emit(|w| set_bg(w, Color::Blue)), "\x1b[48;5;39m");
    }

    #[test]
    fn bg_indexed() {
        assert_eq!(
            emit(|w| set_bg(w, Color::Indexed(123))),
            "\x1b[48;5;123m"
        );
    }

    // ── Cursor motion ───────────────────────────────────────────────────

    #[test]
    fn move_to_origin() {
        assert_eq!(emit(|w| move_to(w, 1, 1)), "\x1b[1;1H");
    }

    #[test]
    fn move_to_position() {
        // Line before column, no off-by-one adjustment.
        assert_eq!(emit(|w| move_to(w, 24, 80)), "\x1b[24;80H");
    }

    #[test]
    fn move_up_n() {
        assert_eq!(emit(|w| move_up(w, 3)), "\x1b[3A");
    }

    #[test]
    fn move_down_n() {
        assert_eq!(emit(|w| move_down(w, 1)), "\x1b[1B");
    }

    #[test]
    fn move_right_n() {
        assert_eq!(emit(|w| move_right(w, 12)), "\x1b[12C");
    }

    #[test]
    fn move_left_n() {
        assert_eq!(emit(|w| move_left(w, 7)), "\x1b[7D");
    }

    #[test]
    fn move_down_begin_n() {
        assert_eq!(emit(|w| move_down_begin(w, 2)), "\x1b[2E");
    }

    #[test]
    fn move_up_begin_n() {
        assert_eq!(emit(|w| move_up_begin(w, 2)), "\x1b[2F");
    }

    #[test]
    fn move_to_column_n() {
        assert_eq!(emit(|w| move_to_column(w, 40)), "\x1b[40G");
    }

    #[test]
    fn move_to_line_start_is_column_one() {
        assert_eq!(emit(move_to_line_start), "\x1b[1G");
    }

    #[test]
    fn save_and_restore_cursor() {
        assert_eq!(emit(save_cursor), "\x1b7");
        assert_eq!(emit(restore_cursor), "\x1b8");
    }

    // ── Clearing ────────────────────────────────────────────────────────

    #[test]
    fn clear_screen_also_homes_cursor() {
        assert_eq!(emit(clear_screen), "\x1b[2J\x1b[1;1H");
    }

    #[test]
    fn clear_line_sequence() {
        assert_eq!(emit(clear_line), "\x1b[2K");
    }

    #[test]
    fn break_line_is_plain_newline() {
        assert_eq!(emit(break_line), "\n");
    }

    // ── Composition ─────────────────────────────────────────────────────

    #[test]
    fn sequences_compose_in_call_order() {
        let mut buf = Vec::new();
        move_to(&mut buf, 5, 10).unwrap();
        set_fg(&mut buf, Color::Green).unwrap();
        set_bg(&mut buf, Color::Black).unwrap();
        reset_color(&mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "\x1b[5;10H\x1b[38;5;10m\x1b[48;5;0m\x1b[m");
    }
}
