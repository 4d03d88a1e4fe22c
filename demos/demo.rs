// SPDX-License-Identifier: MIT
//
// termkit demo — proves every module works together.
//
// Draws the named palette as a strip, frames a menu in a box, and runs
// an arrow-key selection loop via read_key. Up/Down move the
// selection, Enter or 'q' quits.
//
// Usage:
//   cargo run --example demo

use std::io::Write;
use std::process;

use termkit::{ansi, draw, input, terminal};
use termkit::{Color, Key, OutputBuffer, Size};

/// Menu entries for the selection loop.
const ITEMS: [&str; 4] = ["build", "test", "deploy", "quit"];

/// Row where the menu box's top border is drawn.
const MENU_TOP: u16 = 5;

fn main() {
    let size = match terminal::size() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("termkit demo needs a terminal: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(size) {
        eprintln!("demo failed: {e}");
        process::exit(1);
    }
}

fn run(size: Size) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = OutputBuffer::new();

    ansi::clear_screen(&mut out)?;
    paint_header(&mut out, size)?;
    paint_menu_frame(&mut out)?;
    out.flush_stdout()?;

    let mut selected = 0usize;
    loop {
        let mut out = OutputBuffer::new();
        paint_menu_items(&mut out, selected)?;
        out.flush_stdout()?;

        match input::read_key() {
            Ok(Key::Up) => selected = selected.saturating_sub(1),
            Ok(Key::Down) => selected = (selected + 1).min(ITEMS.len() - 1),
            Ok(Key::ENTER) | Ok(Key::Byte(b'q')) => break,
            Ok(_) => {}
            // A stray escape sequence (e.g. a function key) is not
            // fatal; ignore it and keep the loop responsive.
            Err(termkit::Error::UnrecognizedEscape { .. }) => {}
            Err(e) => return Err(e.into()),
        }
    }

    let mut out = OutputBuffer::new();
    draw::fix_draw(&mut out, size)?;
    ansi::break_line(&mut out)?;
    out.flush_stdout()?;
    Ok(())
}

/// Title line plus a strip of every named palette color.
fn paint_header(out: &mut OutputBuffer, size: Size) -> std::io::Result<()> {
    ansi::move_to(out, 1, 1)?;
    write!(out, "termkit demo — {}x{} cells", size.cols, size.rows)?;

    ansi::move_to(out, 3, 1)?;
    for color in Color::NAMED {
        ansi::set_bg(out, color)?;
        draw::hblock_line(out, 4)?;
    }
    ansi::reset_color(out)
}

/// Box around the menu area. Drawn once; the items repaint inside it.
fn paint_menu_frame(out: &mut OutputBuffer) -> std::io::Result<()> {
    ansi::move_to(out, MENU_TOP, 2)?;
    ansi::set_fg(out, Color::Orange)?;
    #[allow(clippy::cast_possible_truncation)] // 4 items.
    draw::draw_box(out, 20, ITEMS.len() as u16)?;
    ansi::reset_color(out)
}

/// Repaint the menu items, highlighting the selected one.
fn paint_menu_items(out: &mut OutputBuffer, selected: usize) -> std::io::Result<()> {
    for (i, item) in ITEMS.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)] // 4 items.
        ansi::move_to(out, MENU_TOP + 1 + i as u16, 4)?;
        if i == selected {
            ansi::set_fg(out, Color::Black)?;
            ansi::set_bg(out, Color::LightGray)?;
            write!(out, "{} {item:<16}", termkit::symbol::ARROW)?;
        } else {
            write!(out, "  {item:<16}")?;
        }
        ansi::reset_color(out)?;
    }
    Ok(())
}
