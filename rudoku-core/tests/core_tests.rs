use pretty_assertions::assert_eq;
use rudoku_core::{Difficulty, Field, Game, Generator, MoveOutcome};

fn solved_field(seed: u64) -> Field {
    Generator::new(Some(seed)).generate().expect("generation")
}

fn assert_permutation(unit: [u8; 9]) {
    let mut sorted = unit;
    sorted.sort_unstable();
    assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn generated_field_is_valid_everywhere() {
    let field = solved_field(42);
    assert!(field.check_field());
    for i in 0..9 {
        assert_permutation(field.row(i));
        assert_permutation(field.column(i));
    }
    for y0 in [0, 3, 6] {
        for x0 in [0, 3, 6] {
            assert_permutation(field.box_at(x0, y0));
        }
    }
}

#[test]
fn solved_values_are_never_insertable_again() {
    let field = solved_field(7);
    for y in 0..9 {
        for x in 0..9 {
            assert!(!field.safe_to_insert(x, y, field.get(x, y)));
        }
    }
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    assert_eq!(solved_field(1234), solved_field(1234));
}

#[test]
fn removal_blanks_the_exact_amount() {
    for amount in [45, 50, 55, 60] {
        let mut gen = Generator::new(Some(5));
        let mut field = gen.generate().unwrap();
        gen.remove_cells(&mut field, amount);
        let nonzero: usize = (0..9)
            .map(|y| field.row(y).iter().filter(|&&v| v != 0).count())
            .sum();
        assert_eq!(nonzero, 81 - amount);
        assert_eq!(field.count_remaining()[0], amount);
    }
}

#[test]
fn count_remaining_matches_occurrences() {
    let mut gen = Generator::new(Some(11));
    let mut field = gen.generate().unwrap();
    gen.remove_cells(&mut field, 50);

    let counts = field.count_remaining();
    let mut occurrences = [0usize; 10];
    for y in 0..9 {
        for &v in &field.row(y) {
            occurrences[v as usize] += 1;
        }
    }
    assert_eq!(counts[0], occurrences[0]);
    for d in 1..=9 {
        assert_eq!(counts[d], 9 - occurrences[d]);
    }
}

#[test]
fn committed_guess_round_trips() {
    let mut gen = Generator::new(Some(21));
    let mut game = Game::with_difficulty(&mut gen, Difficulty::Easy).unwrap();
    let before = game.count_remaining()[0];

    let (x, y) = rudoku_core::solver::find_empty_cell(game.field()).unwrap();
    let value = game.solution().get(x, y);
    assert_eq!(game.guess(y + 1, x + 1, value), MoveOutcome::Committed);
    assert_eq!(game.field().get(x, y), value);
    assert_eq!(game.count_remaining()[0], before - 1);
    assert!(game.player_filled().contains(&(x, y)));
}

#[test]
fn easy_game_fills_to_completion() {
    let mut gen = Generator::new(Some(33));
    let mut game = Game::with_difficulty(&mut gen, Difficulty::Easy).unwrap();
    assert!(game.has_empty_cells());
    assert_eq!(game.count_remaining()[0], 45);

    for y in 0..9 {
        for x in 0..9 {
            if game.field().get(x, y) == 0 {
                let value = game.solution().get(x, y);
                assert_eq!(game.guess(y + 1, x + 1, value), MoveOutcome::Committed);
            }
        }
    }
    assert!(!game.has_empty_cells());
    assert!(game.is_complete());
    assert_eq!(game.player_filled().len(), 45);
    assert_eq!(game.field(), game.solution());
}

#[test]
fn wrong_guess_does_not_persist() {
    let mut gen = Generator::new(Some(55));
    let mut game = Game::new(&mut gen, 60).unwrap();
    let (x, y) = rudoku_core::solver::find_empty_cell(game.field()).unwrap();
    let wrong = game.solution().get(x, y) % 9 + 1;
    assert_eq!(game.guess(y + 1, x + 1, wrong), MoveOutcome::Wrong);
    assert_eq!(game.field().get(x, y), 0);
}

#[test]
fn one_indexed_boundaries() {
    let mut gen = Generator::new(Some(77));
    let mut game = Game::new(&mut gen, 45).unwrap();
    // raw row 10 decrements past the grid and must be rejected outright
    assert_eq!(game.guess(10, 1, 5), MoveOutcome::InvalidInput);
    assert_eq!(game.guess(1, 10, 5), MoveOutcome::InvalidInput);
    // raw row/col 1 address the top-left cell and are always in range
    let outcome = game.guess(1, 1, 5);
    assert_ne!(outcome, MoveOutcome::InvalidInput);
    // raw row/col 9 address the bottom-right cell
    let outcome = game.guess(9, 9, 5);
    assert_ne!(outcome, MoveOutcome::InvalidInput);
}

#[test]
fn field_serializes_round_trip() {
    let field = solved_field(3);
    let json = serde_json::to_string(&field).unwrap();
    let back: Field = serde_json::from_str(&json).unwrap();
    assert_eq!(field, back);
}
