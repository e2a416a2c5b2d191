//! Displays that write to a real output stream.

use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

use super::{Display, PaletteColor};

const BELL: &str = "\x07";

/// Interactive terminal driven through crossterm.
pub struct TerminalDisplay<W: Write> {
    writer: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn color(color: PaletteColor) -> Color {
        match color {
            PaletteColor::Black => Color::Black,
            PaletteColor::Blue => Color::DarkBlue,
            PaletteColor::Green => Color::DarkGreen,
            PaletteColor::Cyan => Color::DarkCyan,
            PaletteColor::Red => Color::DarkRed,
            PaletteColor::Magenta => Color::DarkMagenta,
            PaletteColor::Yellow => Color::DarkYellow,
            PaletteColor::White => Color::Grey,
            PaletteColor::Gray => Color::DarkGrey,
            PaletteColor::LightBlue => Color::Blue,
            PaletteColor::LightGreen => Color::Green,
            PaletteColor::LightCyan => Color::Cyan,
            PaletteColor::LightRed => Color::Red,
            PaletteColor::LightMagenta => Color::Magenta,
            PaletteColor::LightYellow => Color::Yellow,
            PaletteColor::BrightWhite => Color::White,
        }
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn clear(&mut self) -> io::Result<()> {
        execute!(self.writer, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn set_color(&mut self, color: PaletteColor) -> io::Result<()> {
        execute!(self.writer, SetForegroundColor(Self::color(color)))
    }

    fn beep(&mut self) -> io::Result<()> {
        execute!(self.writer, Print(BELL))
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        // Raw mode is never enabled, so plain newlines are fine.
        queue!(self.writer, Print(text))?;
        self.writer.flush()
    }
}

impl<W: Write> Drop for TerminalDisplay<W> {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.writer, ResetColor) {
            log::warn!("could not reset terminal colour: {}", err);
        }
    }
}

/// Text-only display: no escape sequences, clears become blank lines.
pub struct PlainDisplay<W: Write> {
    writer: W,
}

impl<W: Write> PlainDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Display for PlainDisplay<W> {
    fn clear(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n\n")?;
        self.writer.flush()
    }

    fn set_color(&mut self, _color: PaletteColor) -> io::Result<()> {
        Ok(())
    }

    fn beep(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_display_writes_text_only() {
        let mut display = PlainDisplay::new(Vec::new());
        display.set_color(PaletteColor::Red).unwrap();
        display.beep().unwrap();
        display.write_text("hello").unwrap();
        display.clear().unwrap();

        let out = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(out, "hello\n\n");
    }

    #[test]
    fn test_terminal_display_emits_escapes() {
        let mut buffer = Vec::new();
        {
            let mut display = TerminalDisplay::new(&mut buffer);
            display.clear().unwrap();
            display.set_color(PaletteColor::Red).unwrap();
            display.write_text("board").unwrap();
            display.beep().unwrap();
        }

        let out = String::from_utf8(buffer).unwrap();
        assert!(out.contains("\x1b[2J"));
        assert!(out.contains("board"));
        assert!(out.contains(BELL));
        // Colour is reset when the display is dropped.
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_palette_mapping_is_distinct() {
        let mut seen = Vec::new();
        for i in 0..16 {
            let color = TerminalDisplay::<Vec<u8>>::color(PaletteColor::from_index(i).unwrap());
            assert!(!seen.contains(&color));
            seen.push(color);
        }
    }
}
