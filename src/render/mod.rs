//! Display capability and its raylib implementation.
//!
//! Re-exports:
//! - `Display`: the four operations the driver loop needs from a window
//! - `raylib_display`: raylib window, keyboard input and tile drawing
//! - `palette`: tile and HUD colors

pub mod palette;
pub mod raylib_display;

use crate::core::{Direction, GameSession, Level, Position};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Direction(Direction),
}

/// Everything a frame needs to paint.
#[derive(Copy, Clone, Debug)]
pub struct FrameView<'a> {
    pub level: &'a Level,
    pub position: Position,
    pub level_index: usize,
    pub level_count: usize,
}

impl<'a> FrameView<'a> {
    pub fn of(session: &'a GameSession) -> Self {
        Self {
            level: session.current_level(),
            position: session.current_position(),
            level_index: session.current_level_index(),
            level_count: session.level_count(),
        }
    }

    /// One-based HUD label, e.g. "Level 2 of 3".
    pub fn label(&self) -> String {
        format!("Level {} of {}", self.level_index + 1, self.level_count)
    }
}

/// Window backend driven by [`crate::driver`].
pub trait Display {
    /// Size the viewport to a level of `width` x `height` tiles.
    fn resize_to(&mut self, width: usize, height: usize);
    /// Input received since the previous call.
    fn poll_input(&mut self) -> Vec<InputEvent>;
    /// Paint one frame and wait for the next frame tick.
    fn render(&mut self, view: &FrameView<'_>);
    /// Completion screen, held for a fixed duration.
    fn show_completion(&mut self);
}
