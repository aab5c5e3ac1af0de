use crate::field::Field;

/// First empty cell in scan order, or `None` when the field is full.
///
/// The scan is row-major: top to bottom, left to right. Given the same
/// partial field, the solver always works the same cell next, which keeps
/// seeded generation reproducible.
pub fn find_empty_cell(field: &Field) -> Option<(usize, usize)> {
    for y in 0..9 {
        for x in 0..9 {
            if field.get(x, y) == 0 { return Some((x, y)); }
        }
    }
    None
}

/// Complete the field in place by backtracking. Returns false when no
/// completion exists from the current partial state; the field is then left
/// exactly as it was passed in.
///
/// Candidates are tried in ascending order 1..=9. Placements go through
/// `safe_to_insert` only, so a successful run never violates row, column or
/// box uniqueness.
pub fn solve(field: &mut Field) -> bool {
    let Some((x, y)) = find_empty_cell(field) else { return true };
    for candidate in 1..=9 {
        if field.safe_to_insert(x, y, candidate) {
            field.set(x, y, candidate);
            if solve(field) { return true; }
            field.set(x, y, 0);
        }
    }
    false
}
