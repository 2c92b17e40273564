use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::grid::TILE_SIZE;

/// The four cardinal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Maps an arrow key to its direction; every other key is `None`
    pub fn from_keycode(key: Keycode) -> Option<Direction> {
        match key {
            Keycode::Left => Some(Direction::Left),
            Keycode::Right => Some(Direction::Right),
            Keycode::Up => Some(Direction::Up),
            Keycode::Down => Some(Direction::Down),
            _ => None,
        }
    }

    /// Full-tile step for this direction as a (delta_row, delta_col) pair.
    ///
    /// Left/Right move along the horizontal (row) axis, Up/Down along the
    /// vertical (col) axis; only one axis is ever non-zero.
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Left => (-TILE_SIZE, 0),
            Direction::Right => (TILE_SIZE, 0),
            Direction::Up => (0, -TILE_SIZE),
            Direction::Down => (0, TILE_SIZE),
        }
    }
}

/// A raw SDL event translated at the boundary
///
/// Game logic only ever sees this enum; it never inspects SDL event fields
/// directly. Anything outside the recognized set becomes `Other` and is
/// dropped downstream without logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Direction),
    KeyUp(Direction),
    Quit,
    Other,
}

impl InputEvent {
    /// Translates one SDL event.
    ///
    /// Window-close and the Escape key both translate to `Quit`; arrow
    /// key presses and releases carry their direction.
    pub fn from_sdl(event: &Event) -> InputEvent {
        match event {
            Event::Quit { .. } => InputEvent::Quit,
            Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => InputEvent::Quit,
            Event::KeyDown {
                keycode: Some(key), ..
            } => match Direction::from_keycode(*key) {
                Some(direction) => InputEvent::KeyDown(direction),
                None => InputEvent::Other,
            },
            Event::KeyUp {
                keycode: Some(key), ..
            } => match Direction::from_keycode(*key) {
                Some(direction) => InputEvent::KeyUp(direction),
                None => InputEvent::Other,
            },
            _ => InputEvent::Other,
        }
    }
}

/// Polls SDL events and produces translated `InputEvent`s for the game loop
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drains all queued events from the pump and translates each one.
    ///
    /// Never blocks: an empty queue yields an empty batch.
    pub fn poll(&self, event_pump: &mut EventPump) -> Vec<InputEvent> {
        event_pump
            .poll_iter()
            .map(|event| InputEvent::from_sdl(&event))
            .collect()
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
