//! raylib window: keyboard input, tile drawing and the completion screen.
use raylib::prelude::*;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::{self, GameConfig};
use crate::core::{Direction, Level, Position};
use crate::render::palette;
use crate::render::{Display, FrameView, InputEvent};

const PLAYER_INSET: i32 = 4;
const LABEL_FONT: i32 = 20;
const TITLE_FONT: i32 = 36;
const SUBTITLE_FONT: i32 = 24;

pub const COMPLETION_TITLE: &str = "Congratulations!";
pub const COMPLETION_SUBTITLE: &str = "You cleared every level of the maze!";

/// WASD and the arrow keys move; everything else is ignored.
pub fn key_to_event(key: KeyboardKey) -> Option<InputEvent> {
    let dir = match key {
        KeyboardKey::KEY_W | KeyboardKey::KEY_UP => Direction::Up,
        KeyboardKey::KEY_S | KeyboardKey::KEY_DOWN => Direction::Down,
        KeyboardKey::KEY_A | KeyboardKey::KEY_LEFT => Direction::Left,
        KeyboardKey::KEY_D | KeyboardKey::KEY_RIGHT => Direction::Right,
        _ => return None,
    };
    Some(InputEvent::Direction(dir))
}

// raylib's default font is roughly half as wide as it is tall
fn approx_text_width(text: &str, font_size: i32) -> i32 {
    text.chars().count() as i32 * font_size / 2
}

fn draw_cell(d: &mut impl RaylibDraw, xo: i32, yo: i32, tile_size: i32, color: Color) {
    d.draw_rectangle(xo, yo, tile_size, tile_size, color);
}

fn render_level(d: &mut impl RaylibDraw, level: &Level, tile_size: i32) {
    for (row_index, row) in level.rows().iter().enumerate() {
        for (col_index, &tile) in row.iter().enumerate() {
            if let Some(color) = palette::tile_color(tile) {
                let xo = col_index as i32 * tile_size;
                let yo = row_index as i32 * tile_size;
                draw_cell(d, xo, yo, tile_size, color);
            }
        }
    }
}

fn render_player(d: &mut impl RaylibDraw, pos: Position, tile_size: i32) {
    let side = (tile_size - 2 * PLAYER_INSET).max(1);
    d.draw_rectangle(
        pos.x as i32 * tile_size + PLAYER_INSET,
        pos.y as i32 * tile_size + PLAYER_INSET,
        side,
        side,
        palette::PLAYER,
    );
}

fn draw_centered(d: &mut impl RaylibDraw, text: &str, screen_width: i32, y: i32, font_size: i32) {
    let x = (screen_width - approx_text_width(text, font_size)) / 2;
    d.draw_text(text, x.max(0), y, font_size, palette::TEXT);
}

pub struct RaylibDisplay {
    rl: RaylibHandle,
    thread: RaylibThread,
    tile_size: u32,
    frame_time: Duration,
    completion_time: Duration,
}

impl RaylibDisplay {
    /// Opens a window sized for a `width` x `height` tile level.
    pub fn open(config: &GameConfig, width: usize, height: usize) -> Self {
        let (w, h) = config.viewport_pixels(width, height);
        let (rl, thread) = raylib::init()
            .size(w, h)
            .title(&config.window_title)
            .build();
        log::info!("Opened {}x{} window", w, h);

        Self {
            rl,
            thread,
            tile_size: config.tile_size,
            frame_time: config.frame_duration(),
            completion_time: config.completion_duration(),
        }
    }
}

impl Display for RaylibDisplay {
    fn resize_to(&mut self, width: usize, height: usize) {
        let w = config::tiles_to_pixels(width, self.tile_size);
        let h = config::tiles_to_pixels(height, self.tile_size);
        log::debug!("Resizing window to {}x{}", w, h);
        self.rl.set_window_size(w, h);
    }

    fn poll_input(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if self.rl.window_should_close() {
            events.push(InputEvent::Quit);
        }
        while let Some(key) = self.rl.get_key_pressed() {
            if let Some(event) = key_to_event(key) {
                events.push(event);
            }
        }
        events
    }

    fn render(&mut self, view: &FrameView<'_>) {
        let label = view.label();
        let tile_size = config::tiles_to_pixels(1, self.tile_size);
        {
            let mut d = self.rl.begin_drawing(&self.thread);
            d.clear_background(palette::FLOOR);
            render_level(&mut d, view.level, tile_size);
            render_player(&mut d, view.position, tile_size);
            d.draw_text(&label, 10, 10, LABEL_FONT, palette::TEXT);
        }

        thread::sleep(self.frame_time);
    }

    fn show_completion(&mut self) {
        let shown_at = Instant::now();
        // keep drawing so the window stays responsive while the message is up
        while shown_at.elapsed() < self.completion_time && !self.rl.window_should_close() {
            let width = self.rl.get_screen_width();
            {
                let mut d = self.rl.begin_drawing(&self.thread);
                d.clear_background(palette::FLOOR);
                draw_centered(&mut d, COMPLETION_TITLE, width, 120, TITLE_FONT);
                draw_centered(&mut d, COMPLETION_SUBTITLE, width, 180, SUBTITLE_FONT);
            }
            thread::sleep(self.frame_time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_arrows_map_to_directions() {
        let cases = [
            (KeyboardKey::KEY_W, Direction::Up),
            (KeyboardKey::KEY_UP, Direction::Up),
            (KeyboardKey::KEY_S, Direction::Down),
            (KeyboardKey::KEY_DOWN, Direction::Down),
            (KeyboardKey::KEY_A, Direction::Left),
            (KeyboardKey::KEY_LEFT, Direction::Left),
            (KeyboardKey::KEY_D, Direction::Right),
            (KeyboardKey::KEY_RIGHT, Direction::Right),
        ];
        for (key, dir) in cases {
            assert_eq!(key_to_event(key), Some(InputEvent::Direction(dir)));
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(key_to_event(KeyboardKey::KEY_SPACE), None);
        assert_eq!(key_to_event(KeyboardKey::KEY_M), None);
    }

    #[test]
    fn centered_text_estimate_scales_with_font() {
        assert_eq!(approx_text_width("abcd", 20), 40);
        assert_eq!(approx_text_width("", 36), 0);
    }
}
