//! ANSI text encoding of a screen buffer.
//!
//! Every cell becomes a two-character token: a space, then either the glyph
//! prefixed by `ESC[0;<code>m` or a plain space for an empty cell. Rows are
//! joined with `\n` and carry no trailing line break.

use std::fmt::Write;

use crate::fb::ScreenBuffer;
use crate::types::{Block, Cell};

/// Control Sequence Introducer.
pub const CSI: &str = "\u{1b}[";

/// Append the token for one cell to `out`.
pub fn push_cell(out: &mut String, cell: Cell) {
    out.push(' ');
    match cell {
        Some(Block { color, glyph }) => {
            // Writing into a String cannot fail.
            let _ = write!(out, "{CSI}0;{}m{glyph}", color.code());
        }
        None => out.push(' '),
    }
}

/// Encode a full frame into `out`, replacing its contents.
pub fn encode_frame_into(fb: &ScreenBuffer, out: &mut String) {
    out.clear();
    for y in 0..fb.height() {
        if y > 0 {
            out.push('\n');
        }
        if let Some(row) = fb.row(y) {
            for &cell in row {
                push_cell(out, cell);
            }
        }
    }
}

/// Encode a full frame into a new string.
pub fn encode_frame(fb: &ScreenBuffer) -> String {
    // " \x1b[0;3Nm" plus an ASCII glyph.
    let mut out = String::with_capacity(fb.cells().len() * 9 + fb.height() as usize);
    encode_frame_into(fb, &mut out);
    out
}
