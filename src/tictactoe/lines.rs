//! Winning line geometry for rectangular boards

use super::{Player, State};

/// Every line that wins when fully marked by one player.
///
/// Lines are stored in scan order: rows, then columns, then (square boards
/// only) the main diagonal and the anti-diagonal. The order decides which
/// line is reported first when several are complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lines {
    lines: Vec<Vec<usize>>,
}

impl Lines {
    pub fn new(height: usize, width: usize) -> Self {
        let mut lines = Vec::with_capacity(height + width + 2);

        for row in 0..height {
            lines.push((0..width).map(|col| row * width + col).collect());
        }
        for col in 0..width {
            lines.push((0..height).map(|row| row * width + col).collect());
        }

        if height == width {
            lines.push((0..width).map(|i| i * (width + 1)).collect());
            lines.push((1..=width).map(|i| i * (width - 1)).collect());
        }

        Lines { lines }
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.lines.iter().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The mark filling `line`, if every cell holds the same non-empty mark
    pub fn completed_by(state: &State, line: &[usize]) -> Option<Player> {
        let cells = state.cells();
        let first = *cells.get(*line.first()?)?;
        if first.is_empty() || line.iter().any(|&idx| cells.get(idx) != Some(&first)) {
            return None;
        }
        Some(first)
    }

    /// Mark of the first complete line in scan order
    pub fn first_complete(&self, state: &State) -> Option<Player> {
        self.iter().find_map(|line| Self::completed_by(state, line))
    }

    /// Count lines `player` could still complete, i.e. lines holding no
    /// opponent mark
    pub fn open_for(&self, state: &State, player: Player) -> usize {
        let cells = state.cells();
        let opponent = -player;
        self.iter()
            .filter(|line| line.iter().all(|&idx| cells.get(idx) != Some(&opponent)))
            .count()
    }
}
