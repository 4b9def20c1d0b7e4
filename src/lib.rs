//! Maze Adventure - a tile maze played level by level.
//!
//! Core modules:
//! - `core`: Levels, movement and progression (no window needed)
//! - `render`: Display capability and the raylib window
//! - `driver`: Frame loop tying a session to a display
//! - `audio_manager`: Optional rodio sound cues
//! - `config`: Tile size, legend and pacing options

pub mod audio_manager;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod render;

pub use config::{GameConfig, Legend};
pub use error::{ConfigError, InvalidLevelError, LevelDefect, OutOfRangeError, StartupError};
