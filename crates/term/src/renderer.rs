//! Console: line-oriented terminal presenter.
//!
//! Output is queued into a byte buffer as crossterm commands and flushed once
//! per call. When stdout or stdin is not a terminal (pipes, tests) the
//! console degrades to plain text and line-based input.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::game_view::{Line, Tone};

/// What the game loop needs from a presenter.
pub trait Screen {
    /// Start a fresh page.
    fn clear(&mut self) -> Result<()>;

    /// Print lines below whatever is already shown.
    fn show(&mut self, lines: &[Line]) -> Result<()>;

    /// Print `prompt` and read one line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Print `prompt` and wait for a single key press. `None` at end of input.
    fn read_key(&mut self, prompt: &str) -> Result<Option<KeyEvent>>;
}

pub struct Console {
    stdout: io::Stdout,
    stdin: io::Stdin,
    buf: Vec<u8>,
    styled: bool,
    raw_keys: bool,
}

impl Console {
    pub fn new() -> Self {
        let stdout = io::stdout();
        let stdin = io::stdin();
        let styled = stdout.is_terminal();
        let raw_keys = styled && stdin.is_terminal();
        Self {
            stdout,
            stdin,
            buf: Vec::with_capacity(4 * 1024),
            styled,
            raw_keys,
        }
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }

    fn read_key_raw(&mut self) -> Result<KeyEvent> {
        terminal::enable_raw_mode()?;
        let key = loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(key),
                Ok(_) => continue,
                Err(e) => break Err(e),
            }
        };
        // Always try to restore cooked mode before reporting.
        let restored = terminal::disable_raw_mode();
        let key = key?;
        restored?;
        Ok(key)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for Console {
    fn clear(&mut self) -> Result<()> {
        if self.styled {
            self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
            self.buf.queue(cursor::MoveTo(0, 0))?;
            self.flush_buf()?;
        }
        Ok(())
    }

    fn show(&mut self, lines: &[Line]) -> Result<()> {
        encode_lines_into(lines, self.styled, &mut self.buf)?;
        self.flush_buf()
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.buf.queue(Print(prompt))?;
        self.flush_buf()?;

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn read_key(&mut self, prompt: &str) -> Result<Option<KeyEvent>> {
        self.buf.queue(Print(prompt))?;
        self.flush_buf()?;

        if self.raw_keys {
            let key = self.read_key_raw()?;
            self.buf.queue(Print("\n"))?;
            self.flush_buf()?;
            return Ok(Some(key));
        }

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(key_from_line(&line)))
    }
}

/// Treat the first character of a typed line as the key that was pressed.
pub fn key_from_line(line: &str) -> KeyEvent {
    match line.trim_end_matches(['\r', '\n']).chars().next() {
        Some(c) => KeyEvent::from(KeyCode::Char(c)),
        None => KeyEvent::from(KeyCode::Enter),
    }
}

/// Encode `lines` into `out`, one per row.
///
/// With `styled` unset only the text and newlines are written.
pub fn encode_lines_into(lines: &[Line], styled: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        if styled && line.tone != Tone::Plain {
            apply_tone_into(out, line.tone)?;
            out.queue(Print(&line.text))?;
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        } else {
            out.queue(Print(&line.text))?;
        }
        out.queue(Print("\n"))?;
    }
    Ok(())
}

fn apply_tone_into(out: &mut Vec<u8>, tone: Tone) -> Result<()> {
    let (color, bold) = tone_style(tone);
    out.queue(SetForegroundColor(color))?;
    if bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn tone_style(tone: Tone) -> (Color, bool) {
    match tone {
        Tone::Plain => (Color::Reset, false),
        Tone::Heading => (Color::Cyan, true),
        Tone::Muted => (Color::DarkGrey, false),
        Tone::Success => (Color::Green, true),
        Tone::Failure => (Color::Red, true),
    }
}
