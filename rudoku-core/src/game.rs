use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::generator::{GenerateError, Generator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] =
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Expert];

    /// How many solved cells are blanked for this tier.
    pub fn cells_to_remove(self) -> usize {
        match self {
            Difficulty::Easy => 45,
            Difficulty::Medium => 50,
            Difficulty::Hard => 55,
            Difficulty::Expert => 60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// Outcome of a single guess. All move validation surfaces here; nothing is
/// signalled through panics or errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Guess matched the solution and was committed into the field.
    Committed,
    /// Guess did not match the solution. The field is untouched; any
    /// transient display of the wrong digit is the caller's business.
    Wrong,
    /// The target cell already holds a value.
    AlreadyFilled,
    /// Row, column or guess outside 1..=9.
    InvalidInput,
}

/// One play session: the working field, the solution it was derived from,
/// and the set of cells the player has filled so far.
///
/// The solution is snapshotted once, right after generation, and never
/// mutated; it exists only to validate guesses.
pub struct Game {
    field: Field,
    solution: Field,
    player_filled: HashSet<(usize, usize)>,
    removed: usize,
}

impl Game {
    /// Generate a solved field, snapshot it as the solution, then blank
    /// `cells_to_remove` cells to produce the working puzzle.
    pub fn new(generator: &mut Generator, cells_to_remove: usize) -> Result<Self, GenerateError> {
        let solution = generator.generate()?;
        let mut field = solution.clone();
        generator.remove_cells(&mut field, cells_to_remove);
        log::info!("new game with {cells_to_remove} cells removed");
        Ok(Self { field, solution, player_filled: HashSet::new(), removed: cells_to_remove })
    }

    pub fn with_difficulty(
        generator: &mut Generator,
        difficulty: Difficulty,
    ) -> Result<Self, GenerateError> {
        Self::new(generator, difficulty.cells_to_remove())
    }

    /// Validate a guess at 1-indexed `(row, col)` and commit it when it
    /// matches the solution. See `MoveOutcome` for the possible results;
    /// only `Committed` mutates the session.
    pub fn guess(&mut self, row: usize, col: usize, value: u8) -> MoveOutcome {
        if !(1..=9).contains(&row) || !(1..=9).contains(&col) || !(1..=9).contains(&value) {
            return MoveOutcome::InvalidInput;
        }
        let (x, y) = (col - 1, row - 1);
        if self.field.get(x, y) != 0 {
            return MoveOutcome::AlreadyFilled;
        }
        if self.solution.get(x, y) == value {
            self.field.set(x, y, value);
            self.player_filled.insert((x, y));
            MoveOutcome::Committed
        } else {
            log::debug!("wrong guess {value} at row {row}, col {col}");
            MoveOutcome::Wrong
        }
    }

    pub fn field(&self) -> &Field { &self.field }

    pub fn solution(&self) -> &Field { &self.solution }

    /// Cells the player has filled, as 0-indexed `(x, y)` pairs. Rendering
    /// emphasis only.
    pub fn player_filled(&self) -> &HashSet<(usize, usize)> { &self.player_filled }

    pub fn removed(&self) -> usize { self.removed }

    pub fn has_empty_cells(&self) -> bool { self.field.has_empty_cells() }

    pub fn count_remaining(&self) -> [usize; 10] { self.field.count_remaining() }

    pub fn is_complete(&self) -> bool { !self.has_empty_cells() }
}
