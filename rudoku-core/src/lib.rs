pub mod field;
pub mod game;
pub mod generator;
pub mod solver;

pub use field::Field;
pub use game::{Difficulty, Game, MoveOutcome};
pub use generator::{GenerateError, Generator};
