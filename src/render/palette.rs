use raylib::prelude::*;

use crate::core::Tile;

pub const WALL: Color = Color::new(30, 30, 30, 255);
pub const FLOOR: Color = Color::new(240, 240, 240, 255);
pub const PLAYER: Color = Color::new(50, 120, 220, 255);
pub const START: Color = Color::new(120, 200, 120, 255);
pub const EXIT: Color = Color::new(220, 120, 120, 255);
pub const TEXT: Color = Color::new(20, 20, 20, 255);

/// Fill color for a tile; floor tiles show the background and are not drawn.
#[inline]
pub fn tile_color(tile: Tile) -> Option<Color> {
    match tile {
        Tile::Wall => Some(WALL),
        Tile::Start => Some(START),
        Tile::Exit => Some(EXIT),
        Tile::Floor => None,
    }
}
