//! Game configuration: tile size, legend, pacing.
//!
//! Read from a JSON file (`maze.json` unless `MAZE_CONFIG` points elsewhere).
//! Every field is optional; a missing file means defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::tile::Tile;
use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "maze.json";
pub const CONFIG_PATH_ENV: &str = "MAZE_CONFIG";

/// Character-to-tile mapping used when parsing level rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legend {
    pub wall: char,
    pub floor: char,
    pub start: char,
    pub exit: char,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            wall: '#',
            floor: '.',
            start: 'S',
            exit: 'E',
        }
    }
}

impl Legend {
    /// `None` for characters outside the legend; level parsing rejects those.
    pub fn tile_for(&self, ch: char) -> Option<Tile> {
        if ch == self.wall {
            Some(Tile::Wall)
        } else if ch == self.floor {
            Some(Tile::Floor)
        } else if ch == self.start {
            Some(Tile::Start)
        } else if ch == self.exit {
            Some(Tile::Exit)
        } else {
            None
        }
    }

    pub fn char_for(&self, tile: Tile) -> char {
        match tile {
            Tile::Wall => self.wall,
            Tile::Floor => self.floor,
            Tile::Start => self.start,
            Tile::Exit => self.exit,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let chars = [self.wall, self.floor, self.start, self.exit];
        for (i, ch) in chars.iter().enumerate() {
            if chars[i + 1..].contains(ch) {
                return Err(ConfigError::AmbiguousLegend { ch: *ch });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pixel edge length of one tile.
    pub tile_size: u32,
    pub fps: u32,
    /// How long the completion screen stays up.
    pub completion_seconds: f32,
    pub window_title: String,
    /// Play sound cues when an output device and cue files are available.
    pub audio: bool,
    /// Sound effect volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub legend: Legend,
    /// Plain-text level file replacing the built-in levels.
    pub levels_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: 32,
            fps: 60,
            completion_seconds: 2.5,
            window_title: "Maze Adventure".to_string(),
            audio: true,
            sfx_volume: 0.8,
            legend: Legend::default(),
            levels_path: None,
        }
    }
}

impl GameConfig {
    /// Config path from `MAZE_CONFIG`, falling back to `maze.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn from_json(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.legend.validate()?;
        Ok(config)
    }

    /// Loads `path`. A missing file yields the defaults; anything else unreadable is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let config = Self::from_json(path, &text)?;
                log::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    pub fn completion_duration(&self) -> Duration {
        Duration::from_secs_f32(self.completion_seconds.max(0.0))
    }

    /// Window size in pixels for a grid of `width` x `height` tiles.
    pub fn viewport_pixels(&self, width: usize, height: usize) -> (i32, i32) {
        (
            tiles_to_pixels(width, self.tile_size),
            tiles_to_pixels(height, self.tile_size),
        )
    }
}

/// Pixel length of `tiles` tiles, saturating at `i32::MAX`.
pub fn tiles_to_pixels(tiles: usize, tile_size: u32) -> i32 {
    let tiles = i32::try_from(tiles).unwrap_or(i32::MAX);
    let tile_size = i32::try_from(tile_size).unwrap_or(i32::MAX);
    tiles.saturating_mul(tile_size)
}
