//! Frame loop: poll input, move, render.
use crate::core::{GameSession, MoveOutcome};
use crate::render::{Display, FrameView, InputEvent};

/// Why the loop stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Completed,
}

/// Runs frames until the player quits or clears the last level.
/// `on_move` sees every move outcome, in order.
pub fn run<D, F>(session: &mut GameSession, display: &mut D, mut on_move: F) -> SessionEnd
where
    D: Display + ?Sized,
    F: FnMut(MoveOutcome),
{
    let level = session.current_level();
    display.resize_to(level.width(), level.height());

    loop {
        if let Some(end) = step_frame(session, display, &mut on_move) {
            log::info!("Session ended: {:?}", end);
            return end;
        }
    }
}

/// One frame. Returns `Some` once the session is over.
pub fn step_frame<D, F>(session: &mut GameSession, display: &mut D, on_move: &mut F) -> Option<SessionEnd>
where
    D: Display + ?Sized,
    F: FnMut(MoveOutcome),
{
    let level_before = session.current_level_index();

    for event in display.poll_input() {
        match event {
            InputEvent::Quit => return Some(SessionEnd::Quit),
            InputEvent::Direction(dir) => {
                on_move(session.attempt_move(dir));
                // rest of the batch is dropped once the game is won
                if session.is_completed() {
                    break;
                }
            }
        }
    }

    if session.is_completed() {
        display.show_completion();
        return Some(SessionEnd::Completed);
    }

    if session.current_level_index() != level_before {
        let level = session.current_level();
        display.resize_to(level.width(), level.height());
    }

    display.render(&FrameView::of(session));
    None
}
