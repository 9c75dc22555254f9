//! Console strategy: a person types the moves

use std::io::{self, BufRead, Write};

use crate::{
    Error, Result,
    strategy::Strategy,
    tictactoe::{Action, Game, Player, State, TicTacToe},
};

/// Reads moves from `input`, prompting on `output` until a legal cell is given
pub struct HumanStrategy<'g, R, W> {
    game: &'g TicTacToe,
    input: R,
    output: W,
}

impl<'g> HumanStrategy<'g, io::StdinLock<'static>, io::Stdout> {
    /// A human player on the process console
    pub fn console(game: &'g TicTacToe) -> Self {
        Self::new(game, io::stdin().lock(), io::stdout())
    }
}

impl<'g, R: BufRead, W: Write> HumanStrategy<'g, R, W> {
    pub fn new(game: &'g TicTacToe, input: R, output: W) -> Self {
        HumanStrategy {
            game,
            input,
            output,
        }
    }

    fn prompt(&mut self, state: &State, player: Player, legal: &[Action]) -> io::Result<()> {
        writeln!(self.output, "{}", self.game.render(state))?;
        write!(self.output, "{player} to move, choose a cell {legal:?}: ")?;
        self.output.flush()
    }
}

impl<'g, R: BufRead, W: Write> Strategy for HumanStrategy<'g, R, W> {
    type Game = TicTacToe;

    fn game(&self) -> &TicTacToe {
        self.game
    }

    fn name(&self) -> &str {
        "human"
    }

    fn action(&mut self, state: &State, player: Player) -> Result<Action> {
        let legal = self.game.actions(state);
        if legal.is_empty() {
            return Err(Error::SearchExhausted {
                state: state.to_string(),
            });
        }

        loop {
            self.prompt(state, player, &legal)?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::Io {
                    operation: "read a move".to_string(),
                    source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
                });
            }
            match line.trim().parse::<Action>() {
                Ok(action) if legal.contains(&action) => return Ok(action),
                Ok(action) => writeln!(self.output, "cell {action} is not available")?,
                Err(_) => writeln!(self.output, "'{}' is not a cell number", line.trim())?,
            }
        }
    }

    fn evaluation(&mut self, state: &State, player: Player) -> i32 {
        self.game.utility(state, player).value()
    }

    fn leaf_count(&self) -> u64 {
        0
    }
}
