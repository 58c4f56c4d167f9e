//! TerminalRenderer: writes encoded frames to a terminal.
//!
//! Frames are plain ANSI text (see [`crate::ansi`]); crossterm is used for the
//! cursor and screen handling around them.

use std::io::{self, Write};

use anyhow::Result;
use log::{debug, trace};

use crossterm::{cursor, style::ResetColor, terminal, QueueableCommand};

use crate::ansi::encode_frame_into;
use crate::fb::ScreenBuffer;

/// How consecutive frames share the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Print each frame below the previous one.
    #[default]
    Append,
    /// Clear the screen and redraw from the top-left corner.
    Home,
}

impl DrawMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "append" => Some(DrawMode::Append),
            "home" => Some(DrawMode::Home),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrawMode::Append => "append",
            DrawMode::Home => "home",
        }
    }
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    mode: DrawMode,
    text: String,
    buf: Vec<u8>,
    frames: u64,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new(mode: DrawMode) -> Self {
        Self::with_writer(io::stdout(), mode)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, mode: DrawMode) -> Self {
        Self {
            out,
            mode,
            text: String::with_capacity(64 * 1024),
            buf: Vec::with_capacity(64 * 1024),
            frames: 0,
        }
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Frames written so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn enter(&mut self) -> Result<()> {
        debug!("entering terminal in {} mode", self.mode.as_str());
        self.buf.clear();
        if self.mode == DrawMode::Home {
            self.buf.queue(cursor::Hide)?;
        }
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        debug!("restoring terminal after {} frames", self.frames);
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        if self.mode == DrawMode::Home {
            self.buf.queue(cursor::Show)?;
        }
        self.flush_buf()
    }

    /// Encode and write one frame, followed by a color reset and a line break.
    pub fn draw(&mut self, fb: &ScreenBuffer) -> Result<()> {
        self.buf.clear();
        if self.mode == DrawMode::Home {
            self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
            self.buf.queue(cursor::MoveTo(0, 0))?;
        }

        encode_frame_into(fb, &mut self.text);
        self.buf.extend_from_slice(self.text.as_bytes());
        self.buf.queue(ResetColor)?;
        self.buf.push(b'\n');

        trace!("frame {}: {} bytes", self.frames, self.buf.len());
        self.flush_buf()?;
        self.frames += 1;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}
