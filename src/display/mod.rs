//! Presentation.
//!
//! The game talks to the screen only through the [`Display`] capability:
//! clear, colour, beep and write text. Which implementation is used is
//! decided once at startup:
//!
//! - [`TerminalDisplay`]: crossterm escape sequences for an interactive terminal
//! - [`PlainDisplay`]: bare text, for pipes and dumb terminals
//! - [`RecordingDisplay`]: captures everything, for tests
//!
//! [`render`] turns game data into the text those implementations print.

pub mod recording;
pub mod render;
pub mod terminal;

use serde::{Deserialize, Serialize};
use std::io;

use crate::core::{Cell, GameState, PlayerId, BOARD_SIDE};

pub use recording::RecordingDisplay;
pub use terminal::{PlainDisplay, TerminalDisplay};

/// The 16 classic console colours, in console attribute order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteColor {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
    Gray,
    LightBlue,
    LightGreen,
    LightCyan,
    LightRed,
    LightMagenta,
    LightYellow,
    BrightWhite,
}

impl PaletteColor {
    const ALL: [PaletteColor; 16] = [
        PaletteColor::Black,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Cyan,
        PaletteColor::Red,
        PaletteColor::Magenta,
        PaletteColor::Yellow,
        PaletteColor::White,
        PaletteColor::Gray,
        PaletteColor::LightBlue,
        PaletteColor::LightGreen,
        PaletteColor::LightCyan,
        PaletteColor::LightRed,
        PaletteColor::LightMagenta,
        PaletteColor::LightYellow,
        PaletteColor::BrightWhite,
    ];

    /// Look a colour up by palette index (0-15).
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Everything needed to draw the game screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame<'a> {
    pub names: [&'a str; 2],
    pub points: [u8; 2],
    pub active: PlayerId,
    pub cells: [[Cell; BOARD_SIDE]; BOARD_SIDE],
}

impl<'a> Frame<'a> {
    #[must_use]
    pub fn from_state(state: &'a GameState) -> Self {
        let first = &state.players[PlayerId::FIRST];
        let second = &state.players[PlayerId::SECOND];
        Self {
            names: [first.name.as_str(), second.name.as_str()],
            points: [first.points, second.points],
            active: state.active_player,
            cells: state.visible_rows(),
        }
    }

    #[must_use]
    pub fn active_name(&self) -> &'a str {
        self.names[self.active.index()]
    }
}

/// Output capability used by the session.
pub trait Display {
    /// Wipe the screen and home the cursor.
    fn clear(&mut self) -> io::Result<()>;

    /// Switch the foreground colour for subsequent text.
    fn set_color(&mut self, color: PaletteColor) -> io::Result<()>;

    /// Audible alert.
    fn beep(&mut self) -> io::Result<()>;

    /// Write text as is and flush it.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Draw the game screen.
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        self.write_text(&render::game_screen(frame))
    }
}

impl<D: Display + ?Sized> Display for Box<D> {
    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn set_color(&mut self, color: PaletteColor) -> io::Result<()> {
        (**self).set_color(color)
    }

    fn beep(&mut self) -> io::Result<()> {
        (**self).beep()
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        (**self).write_text(text)
    }

    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        (**self).render(frame)
    }
}

impl<D: Display + ?Sized> Display for &mut D {
    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn set_color(&mut self, color: PaletteColor) -> io::Result<()> {
        (**self).set_color(color)
    }

    fn beep(&mut self) -> io::Result<()> {
        (**self).beep()
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        (**self).write_text(text)
    }

    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        (**self).render(frame)
    }
}
