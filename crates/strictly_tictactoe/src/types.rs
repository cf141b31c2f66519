//! Core domain types for tic-tac-toe.

use crate::action::Move;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The character used for this player's mark in board text.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the player whose mark is in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        self.player().map_or('.', Player::mark)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition produces a new board and
/// whose turn it is, the winner and the outcome are always derived from
/// the cells rather than stored.
///
/// Serializes as its [`Board::compact`] text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Gets the cell at the given move's coordinates.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.col()]
    }

    /// Checks if the cell at the given coordinates is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// Overwrites a cell. Only the crate may do this; callers go through
    /// [`crate::result`].
    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.row()][mv.col()] = cell;
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        Move::ALL.iter().map(move |&mv| (mv, self.get(mv)))
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count()
    }

    /// Counts all marks on the board.
    pub fn marks(&self) -> usize {
        self.cells().filter(|(_, cell)| *cell != Cell::Empty).count()
    }

    /// Formats the board on a single line, row-major, `.` for empty.
    pub fn compact(&self) -> String {
        self.cells().map(|(_, cell)| cell.symbol()).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            write!(
                f,
                "{}|{}|{}",
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
        }
        Ok(())
    }
}

/// Failed to parse a [`Board`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// The text did not hold exactly nine cells.
    #[display("a board needs exactly 9 cells, found {}", _0)]
    InvalidLength(usize),

    /// A character is neither a mark, an empty cell nor a separator.
    #[display("{:?} is not a valid tic-tac-toe cell", _0)]
    InvalidChar(char),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`x` and `O`/`o` are marks, `.` and `_` are empty cells.
    /// Whitespace and the separators `/ | , - +` are ignored, so the
    /// output of [`Board`]'s `Display` parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            let cell = match c {
                'x' | 'X' => Cell::Occupied(Player::X),
                'o' | 'O' => Cell::Occupied(Player::O),
                '.' | '_' => Cell::Empty,
                '/' | '|' | ',' | '-' | '+' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(ParseBoardError::InvalidChar(c)),
            };
            cells.push(cell);
        }

        if cells.len() != 9 {
            return Err(ParseBoardError::InvalidLength(cells.len()));
        }

        let mut board = Board::new();
        for (mv, cell) in Move::ALL.iter().zip(cells) {
            board.set(*mv, cell);
        }
        Ok(board)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.compact()
    }
}

impl TryFrom<String> for Board {
    type Error = ParseBoardError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

/// Outcome of a board, derived from its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// X completed a line.
    XWins,
    /// O completed a line.
    OWins,
    /// The board is full and nobody completed a line.
    Draw,
    /// Play continues.
    InProgress,
}

impl Outcome {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::XWins => write!(f, "X wins"),
            Outcome::OWins => write!(f, "O wins"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}

/// Returns the starting board: all nine cells empty.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player whose turn it is.
///
/// X moves when both sides have the same number of marks, O otherwise.
/// This is total, terminal boards included.
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let board = initial_state();
        assert_eq!(board.marks(), 0);
        assert!(board.cells().all(|(_, cell)| cell == Cell::Empty));
    }

    #[test]
    fn test_x_moves_first() {
        assert_eq!(player(&initial_state()), Player::X);
    }

    #[test]
    fn test_o_moves_after_x() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(player(&board), Player::O);
    }

    #[test]
    fn test_player_on_full_board() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(player(&board), Player::O);
    }

    #[test]
    fn test_display_round_trip() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        assert_eq!(board.to_string(), "X|.|O\n-+-+-\n.|X|.\n-+-+-\nO|.|.");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_compact() {
        let board: Board = "x _ o | _ x _ | o _ _".parse().unwrap();
        assert_eq!(board.compact(), "X.O.X.O..");
    }

    #[test]
    fn test_serde_uses_compact_text() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "\"X.O.X.O..\"");
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
        assert!(serde_json::from_str::<Board>("\"XO\"").is_err());
    }

    #[test]
    fn test_parse_rejects_short_input() {
        assert_eq!(
            "XO.".parse::<Board>(),
            Err(ParseBoardError::InvalidLength(3))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_char() {
        assert_eq!(
            "XO.Z.....".parse::<Board>(),
            Err(ParseBoardError::InvalidChar('Z'))
        );
    }

    #[test]
    fn test_outcome_is_over() {
        assert!(Outcome::Draw.is_over());
        assert!(!Outcome::InProgress.is_over());
    }
}
