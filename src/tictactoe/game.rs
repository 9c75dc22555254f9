//! The `Game` contract and its Tic-Tac-Toe implementation

use std::fmt;

use log::trace;

use super::{
    Action, Player, State, Utility,
    cache::{CacheStats, Memo},
    lines::Lines,
};
use crate::{Error, Result};

/// State transition and terminal evaluation of a two-player, zero-sum,
/// perfect-information grid game.
///
/// Every operation is a pure function of its arguments: equal inputs always
/// produce equal outputs.
pub trait Game {
    fn height(&self) -> usize;

    fn width(&self) -> usize;

    /// Winning lines in scan order
    fn lines(&self) -> &Lines;

    /// The state with every cell empty
    fn initial_state(&self) -> State;

    /// Indices of the empty cells of `state`, ascending.
    ///
    /// Search breaks ties in favour of the first action, so the order matters.
    fn actions(&self, state: &State) -> Vec<Action>;

    /// The state reached by the inferred mover marking `action`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`] if `action` is out of range or the cell
    /// is occupied, and [`Error::InvalidBoardLength`] if `state` does not fit
    /// the board.
    fn result(&self, state: &State, action: Action) -> Result<State>;

    /// Outcome of `state` from `player`'s perspective
    fn utility(&self, state: &State, player: Player) -> Utility;

    /// True once the board is full or somebody completed a line
    fn terminal_test(&self, state: &State) -> bool;

    fn cell_count(&self) -> usize {
        self.height() * self.width()
    }

    /// Player whose turn it is: `O` if `X` has more marks, otherwise `X`
    fn to_move(&self, state: &State) -> Player {
        if state.count(Player::X) > state.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Owner of a completed line, if any
    fn winner(&self, state: &State) -> Option<Player> {
        match self.utility(state, Player::X) {
            Utility::Win => Some(Player::X),
            Utility::Lose => Some(Player::O),
            Utility::Draw => None,
        }
    }

    /// Reject states whose size does not match the board
    fn check_state(&self, state: &State) -> Result<()> {
        if state.len() != self.cell_count() {
            return Err(Error::InvalidBoardLength {
                expected: self.cell_count(),
                got: state.len(),
                context: state.to_string(),
            });
        }
        Ok(())
    }
}

/// Tic-Tac-Toe on a `height × width` board, won by filling a whole row,
/// column, or (square boards only) diagonal.
///
/// Results of `actions`, `result`, `utility` and `terminal_test` are memoized
/// per instance; the search revisits the same positions through transpositions.
pub struct TicTacToe {
    height: usize,
    width: usize,
    lines: Lines,
    actions: Memo<State, Vec<Action>>,
    results: Memo<(State, Action), State>,
    utilities: Memo<(State, Player), Utility>,
    terminals: Memo<State, bool>,
}

impl TicTacToe {
    /// Create a memoized game on a `height × width` board
    ///
    /// # Errors
    ///
    /// Returns [`Error::MisconfiguredGame`] if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        Self::with_memoization(height, width, true)
    }

    pub fn with_memoization(height: usize, width: usize, memoize: bool) -> Result<Self> {
        Self::check_dimensions(height, width)?;
        Ok(Self::build(height, width, memoize))
    }

    /// The classic 3x3 game
    pub fn standard() -> Self {
        Self::build(3, 3, true)
    }

    /// Reject boards with a zero dimension
    pub fn check_dimensions(height: usize, width: usize) -> Result<()> {
        if height == 0 || width == 0 {
            return Err(Error::misconfigured(format!(
                "board dimensions must be positive, got {height}x{width}"
            )));
        }
        Ok(())
    }

    /// Callers check the dimensions first
    fn build(height: usize, width: usize, memoize: bool) -> Self {
        TicTacToe {
            height,
            width,
            lines: Lines::new(height, width),
            actions: Memo::new(memoize),
            results: Memo::new(memoize),
            utilities: Memo::new(memoize),
            terminals: Memo::new(memoize),
        }
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            actions: self.actions.stats(),
            result: self.results.stats(),
            utility: self.utilities.stats(),
            terminal_test: self.terminals.stats(),
        }
    }

    pub fn clear_caches(&self) {
        trace!("clearing game caches: {:?}", self.cache_stats());
        self.actions.clear();
        self.results.clear();
        self.utilities.clear();
        self.terminals.clear();
    }

    /// Parse a board in text form and check that it fits this game
    pub fn parse_state(&self, s: &str) -> Result<State> {
        let state: State = s.parse()?;
        self.check_state(&state)?;
        Ok(state)
    }

    /// Render `state` as rows of `|`-separated cells with `-` rules between rows
    pub fn render(&self, state: &State) -> String {
        let rule = "-".repeat(self.width * 2 - 1);
        let rows: Vec<String> = state
            .cells()
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|&cell| match cell {
                        Player::Empty => " ".to_string(),
                        marked => marked.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join(&format!("\n{rule}\n"))
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicTacToe")
            .field("height", &self.height)
            .field("width", &self.width)
            .field("lines", &self.lines.len())
            .finish_non_exhaustive()
    }
}

impl Game for TicTacToe {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    fn lines(&self) -> &Lines {
        &self.lines
    }

    fn initial_state(&self) -> State {
        State::empty(self.cell_count())
    }

    fn actions(&self, state: &State) -> Vec<Action> {
        self.actions
            .get_or_insert_with(state.clone(), || state.empty_cells().collect())
    }

    fn result(&self, state: &State, action: Action) -> Result<State> {
        self.results
            .try_get_or_insert_with((state.clone(), action), || {
                self.check_state(state)?;
                match state.get(action) {
                    None => Err(Error::InvalidAction {
                        action,
                        reason: format!("board has only {} cells", state.len()),
                    }),
                    Some(Player::Empty) => Ok(state.with_mark(action, self.to_move(state))),
                    Some(occupant) => Err(Error::InvalidAction {
                        action,
                        reason: format!("cell is occupied by {occupant}"),
                    }),
                }
            })
    }

    fn utility(&self, state: &State, player: Player) -> Utility {
        self.utilities
            .get_or_insert_with((state.clone(), player), || {
                match self.lines.first_complete(state) {
                    Some(mark) if mark == player => Utility::Win,
                    Some(_) => Utility::Lose,
                    None => Utility::Draw,
                }
            })
    }

    fn terminal_test(&self, state: &State) -> bool {
        self.terminals.get_or_insert_with(state.clone(), || {
            self.actions(state).is_empty() || self.utility(state, Player::X) != Utility::Draw
        })
    }
}
