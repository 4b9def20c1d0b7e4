//! Player movement and level progression.
//!
//! A session is either playing a level or completed. Bumping into walls or the
//! grid edge is ordinary play, so `attempt_move` never fails; all validation
//! happened when the [`LevelSet`] was built.
use crate::core::level::{Level, LevelSet};
use crate::core::tile::{Direction, Position, Tile};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Playing { level_index: usize, position: Position },
    /// Keeps the last level index and position so queries stay answerable.
    Completed { level_index: usize, position: Position },
}

/// What a single `attempt_move` did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Wall or grid edge; nothing changed.
    Blocked,
    Moved(Position),
    /// Reached an exit and a new level started.
    Advanced { level_index: usize },
    /// Reached the exit of the last level.
    Completed,
    /// The session was already completed.
    Ignored,
}

pub struct GameSession {
    levels: LevelSet,
    state: SessionState,
}

impl GameSession {
    pub fn new(levels: LevelSet) -> Self {
        let position = levels.level(0).start();
        log::info!("Level 1 of {} (start at {:?})", levels.level_count(), position);
        Self {
            levels,
            state: SessionState::Playing {
                level_index: 0,
                position,
            },
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn level_count(&self) -> usize {
        self.levels.level_count()
    }

    pub fn current_level_index(&self) -> usize {
        match self.state {
            SessionState::Playing { level_index, .. } | SessionState::Completed { level_index, .. } => {
                level_index
            }
        }
    }

    pub fn current_position(&self) -> Position {
        match self.state {
            SessionState::Playing { position, .. } | SessionState::Completed { position, .. } => position,
        }
    }

    /// The level being played, or the last one once completed.
    pub fn current_level(&self) -> &Level {
        self.levels.level(self.current_level_index())
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, SessionState::Completed { .. })
    }

    pub fn attempt_move(&mut self, dir: Direction) -> MoveOutcome {
        let SessionState::Playing { level_index, position } = self.state else {
            return MoveOutcome::Ignored;
        };

        let level = self.current_level();
        let Some(candidate) = position.step(dir) else {
            log::trace!("Bumped grid edge at {:?} going {:?}", position, dir);
            return MoveOutcome::Blocked;
        };
        let tile = match level.tile_at(candidate) {
            Some(tile) if tile.is_walkable() => tile,
            _ => {
                log::trace!("Bumped {:?} going {:?}", candidate, dir);
                return MoveOutcome::Blocked;
            }
        };

        self.state = SessionState::Playing {
            level_index,
            position: candidate,
        };
        log::debug!("Moved {:?} to {:?}", dir, candidate);

        if tile == Tile::Exit {
            self.advance_level()
        } else {
            MoveOutcome::Moved(candidate)
        }
    }

    /// Leaves the current level: next level's start, or completion after the last one.
    pub fn advance_level(&mut self) -> MoveOutcome {
        let SessionState::Playing { level_index, position } = self.state else {
            return MoveOutcome::Ignored;
        };
        let next = level_index + 1;
        match self.levels.level_at(next) {
            Ok(level) => {
                let start = level.start();
                log::info!("Level {} of {} (start at {:?})", next + 1, self.level_count(), start);
                self.state = SessionState::Playing {
                    level_index: next,
                    position: start,
                };
                MoveOutcome::Advanced { level_index: next }
            }
            Err(_) => {
                log::info!("All {} levels cleared", self.level_count());
                self.state = SessionState::Completed { level_index, position };
                MoveOutcome::Completed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Legend;
    use proptest::prelude::*;

    const CORRIDOR: &[&str] = &["#####", "#S.E#", "#####"];
    const OPEN: &[&str] = &["....", ".S..", "...E"];

    fn session(levels: &[&[&str]]) -> GameSession {
        GameSession::new(LevelSet::parse(levels.iter().copied(), &Legend::default()).unwrap())
    }

    #[test]
    fn starts_on_first_start_tile() {
        let s = session(&[CORRIDOR]);
        assert_eq!(s.current_position(), Position::new(1, 1));
        assert_eq!(s.current_level_index(), 0);
        assert!(!s.is_completed());
    }

    #[test]
    fn single_level_walkthrough_completes() {
        let mut s = session(&[CORRIDOR]);
        assert_eq!(s.attempt_move(Direction::Right), MoveOutcome::Moved(Position::new(2, 1)));
        assert_eq!(s.current_position(), Position::new(2, 1));
        assert!(!s.is_completed());

        assert_eq!(s.attempt_move(Direction::Right), MoveOutcome::Completed);
        assert!(s.is_completed());
    }

    #[test]
    fn exit_leads_to_next_level_start() {
        let mut s = session(&[CORRIDOR, OPEN]);
        s.attempt_move(Direction::Right);
        assert_eq!(s.attempt_move(Direction::Right), MoveOutcome::Advanced { level_index: 1 });
        assert_eq!(s.current_level_index(), 1);
        assert_eq!(s.current_position(), Position::new(1, 1));
        assert_eq!(s.current_level().width(), 4);
        assert!(!s.is_completed());
    }

    #[test]
    fn wall_bump_leaves_state_unchanged() {
        let mut s = session(&[CORRIDOR]);
        for _ in 0..5 {
            assert_eq!(s.attempt_move(Direction::Up), MoveOutcome::Blocked);
            assert_eq!(s.attempt_move(Direction::Left), MoveOutcome::Blocked);
            assert_eq!(s.current_position(), Position::new(1, 1));
            assert_eq!(s.current_level_index(), 0);
        }
    }

    #[test]
    fn grid_edge_blocks_without_walls() {
        let mut s = session(&[OPEN]);
        s.attempt_move(Direction::Up);
        assert_eq!(s.current_position(), Position::new(1, 0));
        assert_eq!(s.attempt_move(Direction::Up), MoveOutcome::Blocked);
        s.attempt_move(Direction::Left);
        assert_eq!(s.attempt_move(Direction::Left), MoveOutcome::Blocked);
        assert_eq!(s.current_position(), Position::new(0, 0));
    }

    #[test]
    fn completed_session_is_stable() {
        let mut s = session(&[CORRIDOR]);
        s.attempt_move(Direction::Right);
        s.attempt_move(Direction::Right);
        let frozen = s.state();
        for dir in Direction::ALL {
            assert_eq!(s.attempt_move(dir), MoveOutcome::Ignored);
            assert_eq!(s.state(), frozen);
        }
        assert_eq!(s.advance_level(), MoveOutcome::Ignored);
    }

    #[test]
    fn queries_after_completion_report_last_state() {
        let mut s = session(&[OPEN, CORRIDOR]);
        s.advance_level();
        s.attempt_move(Direction::Right);
        s.attempt_move(Direction::Right);
        assert!(s.is_completed());
        assert_eq!(s.current_level_index(), 1);
        assert_eq!(s.current_position(), Position::new(3, 1));
        assert_eq!(s.current_level().tile_at(s.current_position()), Some(Tile::Exit));
    }

    #[test]
    fn small_rooms_clear_in_a_few_moves() {
        use Direction::*;
        let mut s = session(&[OPEN, OPEN, CORRIDOR]);
        let mut outcomes = Vec::new();
        for dir in [Right, Right, Down, Right, Right, Down, Right, Right] {
            outcomes.push(s.attempt_move(dir));
        }
        assert_eq!(outcomes[2], MoveOutcome::Advanced { level_index: 1 });
        assert_eq!(outcomes[5], MoveOutcome::Advanced { level_index: 2 });
        assert_eq!(outcomes[7], MoveOutcome::Completed);
        assert!(s.is_completed());
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn never_stands_on_a_wall(moves in prop::collection::vec(direction(), 0..400)) {
            let mut s = GameSession::new(LevelSet::builtin(&Legend::default()).unwrap());
            for dir in moves {
                s.attempt_move(dir);
                let tile = s.current_level().tile_at(s.current_position());
                prop_assert!(matches!(tile, Some(t) if t.is_walkable()));
            }
        }

        #[test]
        fn level_index_only_moves_forward(moves in prop::collection::vec(direction(), 0..200)) {
            // small open rooms so random walks actually reach the exits
            let mut s = session(&[OPEN, OPEN, CORRIDOR]);
            let mut last = s.current_level_index();
            for dir in moves {
                let outcome = s.attempt_move(dir);
                let index = s.current_level_index();
                match outcome {
                    MoveOutcome::Advanced { level_index } => {
                        prop_assert_eq!(level_index, last + 1);
                        prop_assert_eq!(s.current_position(), s.current_level().start());
                    }
                    _ => prop_assert_eq!(index, last),
                }
                last = index;
            }
        }
    }
}
