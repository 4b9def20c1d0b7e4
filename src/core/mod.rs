//! Core game types and logic (levels, movement, progression).
//!
//! Re-exports:
//! - `tile`: Tile kinds, positions and directions
//! - `level`: Level grids and the validated level set
//! - `levels`: Built-in layouts and level file loading
//! - `session`: Movement and level progression state machine

pub mod level;
pub mod levels;
pub mod session;
pub mod tile;

pub use level::{Level, LevelSet};
pub use session::{GameSession, MoveOutcome, SessionState};
pub use tile::{Direction, Position, Tile};
