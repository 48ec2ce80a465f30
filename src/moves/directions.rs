//! Direction and offset tables as `(d_row, d_col)` pairs.
//!
//! The first four compass directions are orthogonal and the last four
//! diagonal; the attack analyzer relies on that split.

pub type Direction = (i8, i8);

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const KING_DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1),
    (-1, -2),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
];

#[inline]
pub const fn is_orthogonal(direction: Direction) -> bool {
    direction.0 == 0 || direction.1 == 0
}

/// True when `candidate` lies on the same line as `axis`, in either sense.
#[inline]
pub const fn on_axis(candidate: Direction, axis: Direction) -> bool {
    (candidate.0 == axis.0 && candidate.1 == axis.1)
        || (candidate.0 == -axis.0 && candidate.1 == -axis.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_directions_list_orthogonals_first() {
        assert!(KING_DIRECTIONS[..4].iter().all(|d| is_orthogonal(*d)));
        assert!(KING_DIRECTIONS[4..].iter().all(|d| !is_orthogonal(*d)));
    }

    #[test]
    fn axis_accepts_both_senses() {
        assert!(on_axis((1, 1), (-1, -1)));
        assert!(on_axis((0, 1), (0, 1)));
        assert!(!on_axis((1, -1), (1, 1)));
    }
}
