//! Configuration types for games, strategies and matches

use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    strategy::{self, AlphaBeta, DEFAULT_DEPTH, Heuristic, MinMax, RandomStrategy, Strategy},
    tictactoe::{Game, TicTacToe},
};

/// Board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    /// Memoize game queries
    pub memoize: bool,
}

impl GameConfig {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            memoize: true,
        }
    }

    pub fn with_memoization(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    pub fn validate(&self) -> Result<()> {
        TicTacToe::check_dimensions(self.height, self.width)
    }

    pub fn build(&self) -> Result<TicTacToe> {
        TicTacToe::with_memoization(self.height, self.width, self.memoize)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(3, 3)
    }
}

/// Which policy controls a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    MinMax,
    Heuristic,
    #[default]
    AlphaBeta,
    Random,
    Human,
}

impl StrategyKind {
    const EXPECTED: &'static str = "minmax, heuristic, alphabeta, random, human";

    /// Whether the strategy takes a search depth
    pub fn is_depth_limited(self) -> bool {
        matches!(self, StrategyKind::Heuristic | StrategyKind::AlphaBeta)
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minmax" | "minimax" => Ok(StrategyKind::MinMax),
            "heuristic" => Ok(StrategyKind::Heuristic),
            "alphabeta" | "alpha-beta" | "ab" => Ok(StrategyKind::AlphaBeta),
            "random" => Ok(StrategyKind::Random),
            "human" => Ok(StrategyKind::Human),
            _ => Err(Error::ParseStrategyKind {
                input: s.to_string(),
                expected: Self::EXPECTED.to_string(),
            }),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::MinMax => "minmax",
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::AlphaBeta => "alphabeta",
            StrategyKind::Random => "random",
            StrategyKind::Human => "human",
        };
        f.write_str(name)
    }
}

/// Configuration of one seat's strategy
///
/// # Examples
///
/// ```
/// use gamesearch::config::{StrategyConfig, StrategyKind};
///
/// let config = StrategyConfig::new(StrategyKind::Heuristic).with_depth(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub kind: StrategyKind,
    /// Search depth in plies (depth-limited strategies only)
    pub depth: usize,
    /// Random seed for reproducibility (random strategy only)
    pub seed: Option<u64>,
}

impl StrategyConfig {
    pub fn new(kind: StrategyKind) -> Self {
        Self {
            kind,
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.kind.is_depth_limited() {
            strategy::check_depth(self.depth)?;
        }
        Ok(())
    }

    /// Construct the configured strategy on `game`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MisconfiguredGame`] for an invalid depth, or for
    /// [`StrategyKind::Human`], which needs a console and is built by the CLI.
    pub fn build<'g, G: Game + 'g>(
        &self,
        game: &'g G,
    ) -> Result<Box<dyn Strategy<Game = G> + 'g>> {
        self.validate()?;
        let built: Box<dyn Strategy<Game = G> + 'g> = match self.kind {
            StrategyKind::MinMax => Box::new(MinMax::new(game)),
            StrategyKind::Heuristic => Box::new(Heuristic::new(game, self.depth)?),
            StrategyKind::AlphaBeta => Box::new(AlphaBeta::new(game, self.depth)?),
            StrategyKind::Random => match self.seed {
                Some(seed) => Box::new(RandomStrategy::with_seed(game, seed)),
                None => Box::new(RandomStrategy::new(game)),
            },
            StrategyKind::Human => {
                return Err(Error::misconfigured(
                    "the human strategy reads from a console and is only available in the CLI",
                ));
            }
        };
        Ok(built)
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::new(StrategyKind::default())
    }
}

/// A full match: board plus one strategy per seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub game: GameConfig,
    pub x: StrategyConfig,
    pub o: StrategyConfig,
}

impl MatchConfig {
    /// Load a match configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read match config {}", path.display()),
            source,
        })?;
        let config: MatchConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.game.validate()?;
        self.x.validate()?;
        self.o.validate()
    }
}
