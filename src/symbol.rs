// SPDX-License-Identifier: MIT
//
// Box-drawing glyph table.
//
// Fixed Unicode code points from the heavy box-drawing set, plus a few
// list/annotation glyphs. The box drawer in `draw` uses the line and
// corner glyphs; the tees, cross, arrows, and ellipsis are exported for
// callers composing richer layouts (menus, trees, split panes) on top
// of the same visual weight.

/// Heavy horizontal line: `━` (U+2501).
pub const HLINE: char = '\u{2501}';

/// Heavy vertical line: `┃` (U+2503).
pub const VLINE: char = '\u{2503}';

/// Top-left box corner: `┏` (U+250F).
pub const CORNER_TL: char = '\u{250f}';

/// Top-right box corner: `┓` (U+2513).
pub const CORNER_TR: char = '\u{2513}';

/// Bottom-left box corner: `┗` (U+2517).
pub const CORNER_BL: char = '\u{2517}';

/// Bottom-right box corner: `┛` (U+251B).
pub const CORNER_BR: char = '\u{251b}';

/// Rightwards arrow: `→` (U+2192). List markers, "leads to" hints.
pub const ARROW: char = '\u{2192}';

/// Downwards arrow with tip rightwards: `↳` (U+21B3). Continuation /
/// "returns here" markers.
pub const ARROW_RETURN: char = '\u{21b3}';

/// Tee on a left border, stem pointing right: `┣` (U+2523).
pub const TEE_LEFT: char = '\u{2523}';

/// Tee on a right border, stem pointing left: `┫` (U+252B).
pub const TEE_RIGHT: char = '\u{252b}';

/// Tee on a top border, stem pointing down: `┳` (U+2533).
pub const TEE_TOP: char = '\u{2533}';

/// Tee on a bottom border, stem pointing up: `┻` (U+253B).
pub const TEE_BOTTOM: char = '\u{253b}';

/// Four-way junction: `╋` (U+254B).
pub const CROSS: char = '\u{254b}';

/// Horizontal ellipsis: `…` (U+2026). Truncation marker.
pub const ELLIPSIS: char = '\u{2026}';
