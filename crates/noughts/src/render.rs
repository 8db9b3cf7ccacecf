//! Text rendering of the board.
//!
//! Grid strokes come from each cell's wall flags, so the picture matches
//! whatever the graphical front end would draw.

use noughts_tictactoe::{BoardState, GameStatus, Occupant, Player, Position, Walls};

const CELL_WIDTH: usize = 4;
const CELL_HEIGHT: usize = 2;
const GRID_WIDTH: usize = CELL_WIDTH * 3 + 1;
const GRID_HEIGHT: usize = CELL_HEIGHT * 3 + 1;

/// Renders the board as a character grid.
///
/// Empty cells show their 1-based number.
pub fn render_board(board: &BoardState) -> String {
    let mut grid = [[' '; GRID_WIDTH]; GRID_HEIGHT];

    for cell in board.cells() {
        let pos = cell.position();
        let top = pos.row() * CELL_HEIGHT;
        let left = pos.col() * CELL_WIDTH;
        let walls = cell.walls();

        grid[top + 1][left + 2] = symbol(pos, cell.occupant());

        for col in left + 1..left + CELL_WIDTH {
            if walls.contains(Walls::NORTH) {
                grid[top][col] = '-';
            }
            if walls.contains(Walls::SOUTH) {
                grid[top + CELL_HEIGHT][col] = '-';
            }
        }
        if walls.contains(Walls::WEST) {
            grid[top + 1][left] = '|';
        }
        if walls.contains(Walls::EAST) {
            grid[top + 1][left + CELL_WIDTH] = '|';
        }
    }

    join_corners(&mut grid);

    let lines: Vec<String> = grid
        .iter()
        .map(|row| row.iter().collect::<String>().trim_end().to_string())
        .collect();
    let first = lines.iter().position(|line| !line.is_empty()).unwrap_or(0);
    let last = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |i| i + 1);
    lines[first..last].join("\n")
}

/// One-line summary of the board for the prompt.
pub fn status_line(status: &GameStatus, turn: Player) -> String {
    match status {
        GameStatus::InProgress => format!("Player {}'s turn", turn),
        GameStatus::Won(..) | GameStatus::Draw => format!("{} - type 'reset' to play again", status),
    }
}

fn symbol(pos: Position, occupant: Occupant) -> char {
    match occupant {
        Occupant::Empty => char::from_digit(pos.to_index() as u32 + 1, 10).unwrap_or('?'),
        occupant => occupant.symbol(),
    }
}

/// Fills grid corners where strokes meet.
fn join_corners(grid: &mut [[char; GRID_WIDTH]; GRID_HEIGHT]) {
    for row in (0..GRID_HEIGHT).step_by(CELL_HEIGHT) {
        for col in (0..GRID_WIDTH).step_by(CELL_WIDTH) {
            let horizontal = (col > 0 && grid[row][col - 1] == '-')
                || (col + 1 < GRID_WIDTH && grid[row][col + 1] == '-');
            let vertical = (row > 0 && grid[row - 1][col] == '|')
                || (row + 1 < GRID_HEIGHT && grid[row + 1][col] == '|');

            grid[row][col] = match (horizontal, vertical) {
                (true, true) => '+',
                (true, false) => '-',
                (false, true) => '|',
                (false, false) => ' ',
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_tictactoe::WinLine;

    #[test]
    fn test_render_empty_board() {
        let board = BoardState::new();
        assert_eq!(
            render_board(&board),
            "    |   |\n  1 | 2 | 3\n----+---+----\n  4 | 5 | 6\n----+---+----\n  7 | 8 | 9\n    |   |"
        );
    }

    #[test]
    fn test_render_marks() {
        let mut board = BoardState::new();
        board.mark(0).unwrap();
        board.mark(8).unwrap();
        let rendered = render_board(&board);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[1], "  O | 2 | 3");
        assert_eq!(lines[5], "  7 | 8 | X");
    }

    #[test]
    fn test_status_line() {
        assert_eq!(
            status_line(&GameStatus::InProgress, Player::O),
            "Player O's turn"
        );
        assert_eq!(
            status_line(&GameStatus::Won(WinLine::TopRow, Player::X), Player::O),
            "Player X wins (Top row) - type 'reset' to play again"
        );
    }
}
