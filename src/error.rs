//! Error types for level loading and configuration.
use std::path::PathBuf;

use thiserror::Error;

/// Why a level layout was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelDefect {
    #[error("no levels")]
    NoLevels,
    #[error("empty grid")]
    EmptyGrid,
    #[error("ragged row width: row {row} has width {width}, expected {expected}")]
    RaggedRow { row: usize, width: usize, expected: usize },
    #[error("missing start tile")]
    MissingStart,
    #[error("multiple start tiles")]
    MultipleStarts,
    #[error("missing exit tile")]
    MissingExit,
    #[error("unknown tile character {ch:?} at column {x}, row {y}")]
    UnknownTile { ch: char, x: usize, y: usize },
}

/// A level failed validation while the level set was being built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid level {index}: {defect}")]
pub struct InvalidLevelError {
    pub index: usize,
    pub defect: LevelDefect,
}

/// `level_at` was asked for an index past the end of the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("level index {index} out of range (level count {count})")]
pub struct OutOfRangeError {
    pub index: usize,
    pub count: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("legend maps {ch:?} to more than one tile")]
    AmbiguousLegend { ch: char },
}

/// Anything that stops the game before the first frame.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Level(#[from] InvalidLevelError),
}
