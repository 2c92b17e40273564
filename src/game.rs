use std::time::Duration;

use sdl2::EventPump;

use crate::grid::GridState;
use crate::input::{Direction, InputEvent, InputSystem};
use crate::screen::GameScreen;

/// Tracks the in-flight key gesture for commit-on-release movement
///
/// A directional key-down arms a pending one-tile step; the following
/// key-up commits it. `None` means no key is currently held. Holding a key
/// therefore never produces more than one move, and a key-up that arrives
/// with nothing pending (focus loss during a press) is dropped silently.
pub struct MoveTracker {
    pending: Option<(i32, i32)>,
}

impl MoveTracker {
    pub fn new() -> Self {
        MoveTracker { pending: None }
    }

    /// Arms the step for `direction`. A later key-down before any key-up
    /// overwrites the pending step, so rapid alternating presses use only
    /// the latest direction.
    pub fn key_down(&mut self, direction: Direction) {
        self.pending = Some(direction.step());
    }

    /// Commits the pending step, if any, and returns to idle.
    ///
    /// The released key is not inspected: any key-up completes the
    /// gesture, matching or not.
    pub fn key_up(&mut self, grid: &mut GridState) {
        if let Some((delta_row, delta_col)) = self.pending.take() {
            grid.try_move(delta_row, delta_col);
        }
    }

    #[cfg(test)]
    fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}

impl Default for MoveTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// The game context: screen, grid, and input threaded explicitly through
/// the loop. Constructed once at startup; there are no ambient globals.
pub struct Game<'a> {
    screen: GameScreen<'a>,
    grid: GridState,
    input: InputSystem,
    tracker: MoveTracker,
}

impl<'a> Game<'a> {
    pub fn new(screen: GameScreen<'a>) -> Self {
        Game {
            screen,
            grid: GridState::new(),
            input: InputSystem::new(),
            tracker: MoveTracker::new(),
        }
    }

    /// The main loop: poll, apply transitions, draw one frame, sleep.
    ///
    /// Quit breaks out before the frame's draw call, so no drawing happens
    /// after a quit event. Returns Ok on user-initiated quit; the only Err
    /// path is a failed draw.
    pub fn run(&mut self, event_pump: &mut EventPump) -> Result<(), String> {
        'running: loop {
            for event in self.input.poll(event_pump) {
                match event {
                    InputEvent::Quit => break 'running,
                    InputEvent::KeyDown(direction) => self.tracker.key_down(direction),
                    InputEvent::KeyUp(_) => self.tracker.key_up(&mut self.grid),
                    InputEvent::Other => {}
                }
            }

            self.screen.render_frame(self.grid.current_position())?;

            // Cap framerate to ~60 FPS
            std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
        }

        Ok(())
    }
}
