use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use thiserror::Error;

use crate::field::Field;
use crate::solver;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The backtracking pass failed to complete a seeded field. Unreachable
    /// for the diagonal seeding used here, since the three boxes share no
    /// row, column or box, but the condition is surfaced instead of ever
    /// handing out a partial grid.
    #[error("seeded field could not be completed into a valid solution")]
    Ungenerable,
}

/// Produces solved fields and derives playable puzzles from them.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// `seed` pins the RNG for reproducible fields; `None` seeds from the
    /// system entropy source.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Build a fully solved field: the three diagonal boxes are each filled
    /// with an independent uniform permutation of 1..=9, then the remaining
    /// 54 cells are completed by backtracking.
    pub fn generate(&mut self) -> Result<Field, GenerateError> {
        let mut field = Field::empty();
        for corner in [0, 3, 6] {
            let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
            digits.shuffle(&mut self.rng);
            field.write_box(digits, corner, corner);
        }
        if !solver::solve(&mut field) {
            return Err(GenerateError::Ungenerable);
        }
        log::debug!("generated solved field:\n{field}");
        Ok(field)
    }

    /// Blank `amount` distinct cells at uniformly random positions. The
    /// amount is capped at the number of currently filled cells, so an
    /// oversized request empties the field rather than looping forever.
    pub fn remove_cells(&mut self, field: &mut Field, amount: usize) {
        let amount = amount.min(81 - field.count_remaining()[0]);
        let mut removed = 0;
        while removed < amount {
            let x = self.rng.gen_range(0..9);
            let y = self.rng.gen_range(0..9);
            if field.get(x, y) != 0 {
                field.set(x, y, 0);
                removed += 1;
            }
        }
        log::debug!("removed {removed} cells");
    }
}
