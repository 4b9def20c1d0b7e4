//! Level grids and the validated level set.
use crate::config::Legend;
use crate::core::levels;
use crate::core::tile::{Position, Tile};
use crate::error::{InvalidLevelError, LevelDefect, OutOfRangeError};

/// A rectangular, validated tile grid. Never mutated after parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    grid: Vec<Vec<Tile>>,
    width: usize,
    start: Position,
}

impl Level {
    /// Parses raw rows into a level; `index` is only used for error reporting.
    pub fn parse<R, S>(index: usize, rows: R, legend: &Legend) -> Result<Level, InvalidLevelError>
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let defect = |defect| InvalidLevelError { index, defect };

        let mut grid: Vec<Vec<Tile>> = Vec::new();
        for (y, raw) in rows.into_iter().enumerate() {
            let mut row = Vec::new();
            for (x, ch) in raw.as_ref().chars().enumerate() {
                let tile = legend
                    .tile_for(ch)
                    .ok_or_else(|| defect(LevelDefect::UnknownTile { ch, x, y }))?;
                row.push(tile);
            }
            grid.push(row);
        }

        let width = grid.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(defect(LevelDefect::EmptyGrid));
        }
        if let Some((row, r)) = grid.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(defect(LevelDefect::RaggedRow {
                row,
                width: r.len(),
                expected: width,
            }));
        }

        let mut start = None;
        let mut has_exit = false;
        for (y, row) in grid.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                match tile {
                    Tile::Start if start.is_some() => {
                        return Err(defect(LevelDefect::MultipleStarts));
                    }
                    Tile::Start => start = Some(Position::new(x, y)),
                    Tile::Exit => has_exit = true,
                    _ => {}
                }
            }
        }
        let start = start.ok_or_else(|| defect(LevelDefect::MissingStart))?;
        if !has_exit {
            return Err(defect(LevelDefect::MissingExit));
        }

        Ok(Level { grid, width, start })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.len()
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Tile under `pos`, or `None` outside the grid.
    #[inline]
    pub fn tile_at(&self, pos: Position) -> Option<Tile> {
        self.grid.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.grid
    }

    pub fn exits(&self) -> impl Iterator<Item = Position> + '_ {
        self.grid.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, t)| **t == Tile::Exit)
                .map(move |(x, _)| Position::new(x, y))
        })
    }
}

/// Ordered, non-empty sequence of levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelSet {
    levels: Vec<Level>,
}

impl LevelSet {
    /// Builds and validates every level up front. The first bad level aborts the build.
    pub fn parse<L, R, S>(levels: L, legend: &Legend) -> Result<LevelSet, InvalidLevelError>
    where
        L: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let levels = levels
            .into_iter()
            .enumerate()
            .map(|(index, rows)| Level::parse(index, rows, legend))
            .collect::<Result<Vec<_>, _>>()?;
        if levels.is_empty() {
            return Err(InvalidLevelError {
                index: 0,
                defect: LevelDefect::NoLevels,
            });
        }
        Ok(LevelSet { levels })
    }

    /// The levels compiled into the game, rendered through `legend`.
    pub fn builtin(legend: &Legend) -> Result<LevelSet, InvalidLevelError> {
        LevelSet::parse(levels::builtin_rows(legend), legend)
    }

    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn level_at(&self, index: usize) -> Result<&Level, OutOfRangeError> {
        self.levels.get(index).ok_or(OutOfRangeError {
            index,
            count: self.levels.len(),
        })
    }

    /// Indexing for callers that already hold a valid index.
    pub(crate) fn level(&self, index: usize) -> &Level {
        &self.levels[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}
