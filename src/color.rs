// SPDX-License-Identifier: MIT
//
// The drawing palette — named xterm-256 indices.
//
// The named variants are the palette this library has always shipped:
// a handful of indices chosen for legibility on dark and light
// backgrounds. The numeric values are part of the output contract
// (they go straight into `\x1b[38;5;{n}m`), so they must never drift.
// `Indexed` opens up the rest of the 256-color space for callers that
// want a specific index.

// ─── Color ───────────────────────────────────────────────────────────────────

/// A terminal color, expressed as an xterm-256 palette index.
///
/// The named variants are fixed indices; [`Indexed`](Color::Indexed)
/// covers the full 0–255 space. Pass a `Color` to
/// [`ansi::set_fg`](crate::ansi::set_fg) / [`ansi::set_bg`](crate::ansi::set_bg).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Palette index 0.
    Black,
    /// Palette index 8 (bright black).
    Gray,
    /// Palette index 9 (bright red).
    Red,
    /// Palette index 10 (bright green).
    Green,
    /// Palette index 11 (bright yellow).
    Yellow,
    /// Palette index 13 (bright magenta).
    Magenta,
    /// Palette index 14 (bright cyan).
    Cyan,
    /// Palette index 15 (bright white).
    White,
    /// Palette index 39 — a mid-tone blue from the 6×6×6 color cube,
    /// more readable than the dim ANSI blue at index 4.
    Blue,
    /// Palette index 208.
    Orange,
    /// Palette index 248.
    LightGray,
    /// Any other xterm-256 palette index.
    Indexed(u8),
}

impl Color {
    /// The xterm-256 palette index this color encodes to.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Gray => 8,
            Self::Red => 9,
            Self::Green => 10,
            Self::Yellow => 11,
            Self::Magenta => 13,
            Self::Cyan => 14,
            Self::White => 15,
            Self::Blue => 39,
            Self::Orange => 208,
            Self::LightGray => 248,
            Self::Indexed(n) => n,
        }
    }

    /// All named palette colors, in index order.
    ///
    /// Handy for palette strips and tests; `Indexed` is deliberately
    /// not represented.
    pub const NAMED: [Self; 11] = [
        Self::Black,
        Self::Gray,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::Blue,
        Self::Orange,
        Self::LightGray,
    ];
}

impl From<u8> for Color {
    /// Wrap a raw palette index. Indices that collide with a named
    /// variant stay `Indexed`; the two encode identically.
    fn from(index: u8) -> Self {
        Self::Indexed(index)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
