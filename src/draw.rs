// SPDX-License-Identifier: MIT
//
// Line and box composition.
//
// Builds figures out of the `symbol` glyphs and the `ansi` cursor
// motions. Everything here draws relative to wherever the cursor
// already is: rows advance with cursor motion (down one, back to the
// starting column), never with `\n`, so a figure anchored at column 30
// stays at column 30 instead of shearing to the line start. Body rows
// of a box skip over their interior with a cursor-right, leaving
// whatever was on screen there untouched.

use std::io::{self, Write};

use crate::ansi;
use crate::symbol;
use crate::terminal::Size;

/// Draw a horizontal rule of `width` heavy-line glyphs at the cursor.
///
/// The cursor ends just right of the last glyph.
///
/// # Errors
///
/// Propagates the sink's write error.
pub fn hline(w: &mut impl Write, width: u16) -> io::Result<()> {
    for _ in 0..width {
        write!(w, "{}", symbol::HLINE)?;
    }
    Ok(())
}

/// Draw a vertical rule of `height` glyphs growing downward from the
/// cursor, all in one column.
///
/// # Errors
///
/// Propagates the sink's write error.
pub fn vline(w: &mut impl Write, height: u16) -> io::Result<()> {
    for _ in 0..height {
        write!(w, "{}", symbol::VLINE)?;
        // Step back over the glyph, then down: next glyph lands
        // directly beneath.
        ansi::move_left(w, 1)?;
        ansi::move_down(w, 1)?;
    }
    Ok(())
}

/// Draw a solid horizontal bar of `width` spaces at the cursor.
///
/// Pair with [`ansi::set_bg`] to render it as a filled block.
///
/// # Errors
///
/// Propagates the sink's write error.
pub fn hblock_line(w: &mut impl Write, width: u16) -> io::Result<()> {
    for _ in 0..width {
        w.write_all(b" ")?;
    }
    Ok(())
}

/// Draw a solid vertical bar of `height` spaces growing downward in
/// one column.
///
/// # Errors
///
/// Propagates the sink's write error.
pub fn vblock_line(w: &mut impl Write, height: u16) -> io::Result<()> {
    for _ in 0..height {
        w.write_all(b" ")?;
        ansi::move_left(w, 1)?;
        ansi::move_down(w, 1)?;
    }
    Ok(())
}

/// Draw a bordered box at the cursor.
///
/// `width` and `height` are the interior dimensions; borders add one
/// cell on each side, so the figure occupies `height + 2` rows and
/// `width + 2` columns starting at the cursor. The interior is skipped
/// over, never overwritten — content already on screen shows through.
/// No content placement happens here.
///
/// The cursor ends just right of the bottom-right corner. For a box
/// taller than the visible area, follow up with [`fix_draw`].
///
/// # Errors
///
/// Propagates the sink's write error.
pub fn draw_box(w: &mut impl Write, width: u16, height: u16) -> io::Result<()> {
    // Top border.
    write!(w, "{}", symbol::CORNER_TL)?;
    hline(w, width)?;
    write!(w, "{}", symbol::CORNER_TR)?;
    next_row(w, width)?;

    // Body rows: two verticals with the interior skipped between them.
    for _ in 0..height {
        write!(w, "{}", symbol::VLINE)?;
        if width > 0 {
            ansi::move_right(w, width)?;
        }
        write!(w, "{}", symbol::VLINE)?;
        next_row(w, width)?;
    }

    // Bottom border.
    write!(w, "{}", symbol::CORNER_BL)?;
    hline(w, width)?;
    write!(w, "{}", symbol::CORNER_BR)?;
    Ok(())
}

/// Advance to the next box row: down one line, back to the anchor
/// column (the full border width of `width + 2` cells).
fn next_row(w: &mut impl Write, width: u16) -> io::Result<()> {
    ansi::move_down(w, 1)?;
    ansi::move_left(w, width.saturating_add(2))
}

/// Park the cursor at the terminal's last line and column.
///
/// Corrects the artifacts a box overrunning the visible area leaves
/// behind: after scrolling, relative motion has lost its anchor, so
/// the safest resting place is the bottom-right cell. Pass the current
/// [`Size`] from [`terminal::size`](crate::terminal::size) — taking it
/// as a parameter keeps this a pure formatting operation.
///
/// # Errors
///
/// Propagates the sink's write error.
pub fn fix_draw(w: &mut impl Write, size: Size) -> io::Result<()> {
    ansi::move_to(w, size.rows, size.cols)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
