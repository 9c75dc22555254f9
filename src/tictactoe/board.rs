//! Cell markers, utilities and immutable board states

use std::{fmt, ops::Neg, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

/// Index of a cell in a [`State`]
pub type Action = usize;

/// Occupant of a cell.
///
/// `X` and `O` are numeric negatives of each other, so the opponent of a
/// player is its negation. `Empty` marks an unoccupied cell and negates to
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i8)]
pub enum Player {
    O = -1,
    Empty = 0,
    X = 1,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        -self
    }

    /// Numeric marker (`X = 1`, `O = -1`, `Empty = 0`)
    pub fn value(self) -> i8 {
        self as i8
    }

    pub fn is_empty(self) -> bool {
        self == Player::Empty
    }

    pub fn to_char(self) -> char {
        match self {
            Player::Empty => '.',
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Player> {
        match c {
            '.' | ' ' | '_' => Some(Player::Empty),
            'X' | 'x' => Some(Player::X),
            'O' | 'o' | '0' => Some(Player::O),
            _ => None,
        }
    }
}

impl Neg for Player {
    type Output = Player;

    fn neg(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
            Player::Empty => Player::Empty,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Value of a position from one player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i8)]
pub enum Utility {
    Lose = -1,
    Draw = 0,
    Win = 1,
}

impl Utility {
    pub fn value(self) -> i32 {
        self as i32
    }
}

impl Neg for Utility {
    type Output = Utility;

    fn neg(self) -> Utility {
        match self {
            Utility::Win => Utility::Lose,
            Utility::Lose => Utility::Win,
            Utility::Draw => Utility::Draw,
        }
    }
}

/// Immutable board state: one [`Player`] marker per cell, row-major.
///
/// Cloning is cheap because the cells live in a shared buffer. No method
/// mutates a state in place; transitions build a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    cells: Arc<[Player]>,
}

impl State {
    /// Create a state of `len` empty cells
    pub fn empty(len: usize) -> Self {
        State {
            cells: vec![Player::Empty; len].into(),
        }
    }

    pub fn cells(&self) -> &[Player] {
        &self.cells
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-cell state (never produced by a valid game)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: Action) -> Option<Player> {
        self.cells.get(index).copied()
    }

    /// Count the cells holding `marker`
    pub fn count(&self, marker: Player) -> usize {
        self.cells.iter().filter(|&&c| c == marker).count()
    }

    /// Indices of empty cells in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = Action> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    /// Copy of this state with `marker` written at `index`.
    ///
    /// Callers validate `index` first.
    pub(crate) fn with_mark(&self, index: Action, marker: Player) -> State {
        let mut cells = self.cells.to_vec();
        cells[index] = marker;
        State {
            cells: cells.into(),
        }
    }
}

impl From<Vec<Player>> for State {
    fn from(cells: Vec<Player>) -> Self {
        State {
            cells: cells.into(),
        }
    }
}

impl From<&[Player]> for State {
    fn from(cells: &[Player]) -> Self {
        State {
            cells: cells.into(),
        }
    }
}

impl FromStr for State {
    type Err = crate::Error;

    /// Parse one character per cell (`X`, `O`, `.` or space), ignoring line
    /// breaks and `|` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(s.len());
        let characters = s.chars().filter(|c| !matches!(c, '\n' | '\r' | '|'));
        for (position, character) in characters.enumerate() {
            let cell =
                Player::from_char(character).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character,
                    position,
                    context: s.to_string(),
                })?;
            cells.push(cell);
        }
        if cells.is_empty() {
            return Err(crate::Error::InvalidBoardLength {
                expected: 1,
                got: 0,
                context: s.to_string(),
            });
        }
        Ok(State::from(cells))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells.iter() {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_negation() {
        assert_eq!(-Player::X, Player::O);
        assert_eq!(-Player::O, Player::X);
        assert_eq!(-Player::Empty, Player::Empty);
        assert_eq!(Player::X.value(), -Player::O.value());
    }

    #[test]
    fn test_utility_negation() {
        assert_eq!(-Utility::Win, Utility::Lose);
        assert_eq!(-Utility::Draw, Utility::Draw);
        assert_eq!(Utility::Lose.value(), -1);
    }

    #[test]
    fn test_from_str() {
        let state: State = "XO. x o".parse().unwrap();
        assert_eq!(
            state.cells(),
            &[
                Player::X,
                Player::O,
                Player::Empty,
                Player::Empty,
                Player::X,
                Player::Empty,
                Player::O
            ]
        );

        let grid: State = "X|O|.\n.|X|.\nO|.|.".parse().unwrap();
        assert_eq!(grid.len(), 9);
        assert_eq!(grid.count(Player::X), 2);
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        assert!(matches!(
            "XOZ".parse::<State>(),
            Err(crate::Error::InvalidCellCharacter { character: 'Z', position: 2, .. })
        ));
        assert!(matches!(
            "".parse::<State>(),
            Err(crate::Error::InvalidBoardLength { .. })
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        let state: State = "XXXOO....".parse().unwrap();
        assert_eq!(state.to_string(), "XXXOO....");
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let state = State::empty(9);
        let next = state.with_mark(4, Player::X);

        assert_eq!(state.count(Player::X), 0);
        assert_eq!(next.get(4), Some(Player::X));
        assert_eq!(next.count(Player::Empty), 8);
        assert_ne!(state, next);
    }

    #[test]
    fn test_empty_cells_ascending() {
        let state: State = "X.O..X".parse().unwrap();
        assert_eq!(state.empty_cells().collect::<Vec<_>>(), vec![1, 3, 4]);
    }
}
