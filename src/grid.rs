/// Number of tiles along the vertical axis of the board
pub const COLUMNS: i32 = 16;
/// Number of tiles along the horizontal axis of the board
pub const ROWS: i32 = 21;
/// Edge length of one board tile, in pixels
pub const TILE_SIZE: i32 = 48;

// Window resolution constants
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 832;

/// The player's top-left draw coordinate, in pixels.
///
/// Both components are multiples of TILE_SIZE. `row` advances along the
/// horizontal axis and `col` along the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn origin() -> Self {
        Position { row: 0, col: 0 }
    }
}

/// Holds the player's current position on the fixed grid
///
/// The grid carries no per-tile state; it is purely a bounding region for
/// the player. `try_move` is the only mutator of the position.
pub struct GridState {
    position: Position,
}

impl GridState {
    /// Creates a new grid with the player at the top-left tile
    pub fn new() -> Self {
        GridState {
            position: Position::origin(),
        }
    }

    pub fn current_position(&self) -> Position {
        self.position
    }

    /// Attempts a full-tile step and returns the resulting position.
    ///
    /// The bounds check is on the destination: a step that would land
    /// outside the grid is rejected entirely, never truncated to the
    /// boundary. A rejected step leaves the position unchanged, so
    /// repeating it is a no-op.
    pub fn try_move(&mut self, delta_row: i32, delta_col: i32) -> Position {
        let row = self.position.row + delta_row;
        let col = self.position.col + delta_col;

        if row < 0 || row > (ROWS - 1) * TILE_SIZE || col < 0 || col > (COLUMNS - 1) * TILE_SIZE {
            return self.position;
        }

        self.position = Position { row, col };
        self.position
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin() {
        let grid = GridState::new();
        assert_eq!(grid.current_position(), Position { row: 0, col: 0 });
    }

    #[test]
    fn test_move_within_bounds() {
        let mut grid = GridState::new();
        let pos = grid.try_move(TILE_SIZE, 0);
        assert_eq!(pos, Position { row: 48, col: 0 });

        let pos = grid.try_move(0, TILE_SIZE);
        assert_eq!(pos, Position { row: 48, col: 48 });
    }

    #[test]
    fn test_rejects_step_off_left_edge() {
        let mut grid = GridState::new();
        let pos = grid.try_move(-TILE_SIZE, 0);

        // Rejected whole, not clamped
        assert_eq!(pos, Position { row: 0, col: 0 });
    }

    #[test]
    fn test_rejects_step_off_top_edge() {
        let mut grid = GridState::new();
        let pos = grid.try_move(0, -TILE_SIZE);
        assert_eq!(pos, Position { row: 0, col: 0 });
    }

    #[test]
    fn test_rejects_step_past_row_limit() {
        let mut grid = GridState::new();

        // Walk to the last tile on the horizontal axis
        for _ in 0..(ROWS - 1) {
            grid.try_move(TILE_SIZE, 0);
        }
        assert_eq!(grid.current_position().row, (ROWS - 1) * TILE_SIZE);

        // One more step must be rejected
        let pos = grid.try_move(TILE_SIZE, 0);
        assert_eq!(pos.row, (ROWS - 1) * TILE_SIZE);
    }

    #[test]
    fn test_rejects_step_past_col_limit() {
        let mut grid = GridState::new();

        for _ in 0..(COLUMNS - 1) {
            grid.try_move(0, TILE_SIZE);
        }
        assert_eq!(grid.current_position().col, (COLUMNS - 1) * TILE_SIZE);

        let pos = grid.try_move(0, TILE_SIZE);
        assert_eq!(pos.col, (COLUMNS - 1) * TILE_SIZE);
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let mut grid = GridState::new();
        grid.try_move(TILE_SIZE, TILE_SIZE);
        let before = grid.current_position();

        for _ in 0..10 {
            grid.try_move(-(ROWS * TILE_SIZE), 0);
        }

        assert_eq!(grid.current_position(), before);
    }

    #[test]
    fn test_step_lands_on_step_or_stays() {
        // From any in-bounds tile, a unit step either lands exactly one
        // tile away or leaves the position untouched — never a third value.
        let deltas = [
            (TILE_SIZE, 0),
            (-TILE_SIZE, 0),
            (0, TILE_SIZE),
            (0, -TILE_SIZE),
        ];

        for start_row in 0..ROWS {
            for start_col in 0..COLUMNS {
                for (delta_row, delta_col) in deltas {
                    let mut grid = GridState::new();
                    grid.try_move(start_row * TILE_SIZE, 0);
                    grid.try_move(0, start_col * TILE_SIZE);
                    let before = grid.current_position();

                    let after = grid.try_move(delta_row, delta_col);

                    let stepped = Position {
                        row: before.row + delta_row,
                        col: before.col + delta_col,
                    };
                    assert!(after == before || after == stepped);
                }
            }
        }
    }

    #[test]
    fn test_grid_fits_window() {
        // Last tile's far edge must stay inside the window on both axes
        assert!(ROWS * TILE_SIZE <= WINDOW_WIDTH as i32);
        assert!(COLUMNS * TILE_SIZE <= WINDOW_HEIGHT as i32);
    }
}
