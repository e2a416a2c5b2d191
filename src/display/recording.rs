//! A display that remembers what it was asked to do.

use std::io;

use super::{render, Display, Frame, PaletteColor};

/// One call made on a [`RecordingDisplay`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayEvent {
    Clear,
    Color(PaletteColor),
    Beep,
    Text(String),
}

/// In-memory display for scripted sessions.
#[derive(Clone, Debug, Default)]
pub struct RecordingDisplay {
    events: Vec<DisplayEvent>,
    frames: usize,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// Number of full game screens drawn.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    #[must_use]
    pub fn beeps(&self) -> usize {
        self.count(|e| matches!(e, DisplayEvent::Beep))
    }

    #[must_use]
    pub fn clears(&self) -> usize {
        self.count(|e| matches!(e, DisplayEvent::Clear))
    }

    /// All text written, concatenated.
    #[must_use]
    pub fn text(&self) -> String {
        self.events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// How many times `needle` appears in the written text.
    #[must_use]
    pub fn occurrences(&self, needle: &str) -> usize {
        self.text().matches(needle).count()
    }

    fn count(&self, predicate: impl Fn(&DisplayEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

impl Display for RecordingDisplay {
    fn clear(&mut self) -> io::Result<()> {
        self.events.push(DisplayEvent::Clear);
        Ok(())
    }

    fn set_color(&mut self, color: PaletteColor) -> io::Result<()> {
        self.events.push(DisplayEvent::Color(color));
        Ok(())
    }

    fn beep(&mut self) -> io::Result<()> {
        self.events.push(DisplayEvent::Beep);
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.events.push(DisplayEvent::Text(text.to_string()));
        Ok(())
    }

    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        self.frames += 1;
        self.write_text(&render::game_screen(frame))
    }
}
