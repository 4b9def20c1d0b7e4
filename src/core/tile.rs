//! Tiles, positions and movement directions.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Floor,
    Start,
    Exit,
}

impl Tile {
    #[inline]
    pub fn is_walkable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

/// Column/row coordinates into a level grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbour in `dir`, or `None` when it would leave the non-negative quadrant.
    pub fn step(self, dir: Direction) -> Option<Position> {
        let (dx, dy) = dir.delta();
        Some(Position {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// (dx, dy) with y growing downwards.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_applies_delta() {
        let p = Position::new(2, 3);
        assert_eq!(p.step(Direction::Up), Some(Position::new(2, 2)));
        assert_eq!(p.step(Direction::Down), Some(Position::new(2, 4)));
        assert_eq!(p.step(Direction::Left), Some(Position::new(1, 3)));
        assert_eq!(p.step(Direction::Right), Some(Position::new(3, 3)));
    }

    #[test]
    fn step_off_the_top_left_edge_is_none() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
    }

    #[test]
    fn only_walls_block() {
        assert!(!Tile::Wall.is_walkable());
        assert!(Tile::Floor.is_walkable());
        assert!(Tile::Start.is_walkable());
        assert!(Tile::Exit.is_walkable());
    }
}
