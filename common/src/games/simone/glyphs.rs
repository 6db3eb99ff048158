//! Fixed point lists for the arrow and digit glyphs.
//!
//! Arrows live on a 7×5 grid anchored at the top-left pixel. Digits are 3×5 and get shifted
//! horizontally when drawn.

use super::types::Direction;

/// `(x, y)` with `y` growing downwards.
pub type Point = (u8, u8);

pub const DIGIT_WIDTH: u8 = 3;

/// Horizontal offsets of the tens and ones digit of a two-digit number.
pub const TENS_OFFSET: u8 = 0;
pub const ONES_OFFSET: u8 = DIGIT_WIDTH + 1;

#[rustfmt::skip]
const ARROW_UP_LEFT: &[Point] = &[
    (0, 0), (0, 1), (0, 2), (1, 0), (2, 0),
    (1, 1), (2, 2), (3, 3), (4, 4),
];

#[rustfmt::skip]
const ARROW_DOWN_LEFT: &[Point] = &[
    (0, 4), (0, 3), (0, 2), (1, 4), (2, 4),
    (1, 3), (2, 2), (3, 1), (4, 0),
];

#[rustfmt::skip]
const ARROW_DOWN_RIGHT: &[Point] = &[
    (6, 4), (6, 3), (6, 2), (5, 4), (4, 4),
    (5, 3), (4, 2), (3, 1), (2, 0),
];

#[rustfmt::skip]
const ARROW_UP_RIGHT: &[Point] = &[
    (6, 0), (6, 1), (6, 2), (5, 0), (4, 0),
    (5, 1), (4, 2), (3, 3), (2, 4),
];

#[rustfmt::skip]
const DIGIT_0: &[Point] = &[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (2, 2), (0, 3), (2, 3), (0, 4), (1, 4), (2, 4)];
#[rustfmt::skip]
const DIGIT_1: &[Point] = &[(1, 0), (0, 1), (1, 1), (1, 2), (1, 3), (0, 4), (1, 4), (2, 4)];
#[rustfmt::skip]
const DIGIT_2: &[Point] = &[(0, 0), (1, 0), (2, 0), (2, 1), (0, 2), (1, 2), (2, 2), (0, 3), (0, 4), (1, 4), (2, 4)];
#[rustfmt::skip]
const DIGIT_3: &[Point] = &[(0, 0), (1, 0), (2, 0), (2, 1), (0, 2), (1, 2), (2, 2), (2, 3), (0, 4), (1, 4), (2, 4)];
#[rustfmt::skip]
const DIGIT_4: &[Point] = &[(0, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2), (2, 3), (2, 4)];
#[rustfmt::skip]
const DIGIT_5: &[Point] = &[(0, 0), (1, 0), (2, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 3), (0, 4), (1, 4), (2, 4)];
#[rustfmt::skip]
const DIGIT_6: &[Point] = &[(0, 0), (1, 0), (2, 0), (0, 1), (0, 2), (1, 2), (2, 2), (0, 3), (2, 3), (0, 4), (1, 4), (2, 4)];
#[rustfmt::skip]
const DIGIT_7: &[Point] = &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (2, 3), (2, 4)];
#[rustfmt::skip]
const DIGIT_8: &[Point] = &[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2), (0, 3), (2, 3), (0, 4), (1, 4), (2, 4)];
#[rustfmt::skip]
const DIGIT_9: &[Point] = &[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2), (2, 3), (0, 4), (1, 4), (2, 4)];

const DIGITS: [&[Point]; 10] = [
    DIGIT_0, DIGIT_1, DIGIT_2, DIGIT_3, DIGIT_4, DIGIT_5, DIGIT_6, DIGIT_7, DIGIT_8, DIGIT_9,
];

pub fn arrow_points(direction: Direction) -> &'static [Point] {
    match direction {
        Direction::UpLeft => ARROW_UP_LEFT,
        Direction::DownLeft => ARROW_DOWN_LEFT,
        Direction::DownRight => ARROW_DOWN_RIGHT,
        Direction::UpRight => ARROW_UP_RIGHT,
    }
}

/// Panics for values above 9.
pub fn digit_points(digit: u8) -> &'static [Point] {
    DIGITS[digit as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::simone::types::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use std::collections::HashSet;

    #[test]
    fn test_glyphs_fit_on_screen() {
        for direction in Direction::ALL {
            for &(x, y) in arrow_points(direction) {
                assert!(x < 7 && (y as usize) < SCREEN_HEIGHT);
            }
        }
        for digit in 0..10 {
            for &(x, y) in digit_points(digit) {
                assert!(x < DIGIT_WIDTH && (y as usize) < SCREEN_HEIGHT);
                assert!(((x + ONES_OFFSET) as usize) < SCREEN_WIDTH);
            }
        }
    }

    #[test]
    fn test_glyphs_have_no_duplicate_points() {
        let tables = Direction::ALL
            .into_iter()
            .map(arrow_points)
            .chain((0..10).map(digit_points));
        for table in tables {
            let unique: HashSet<_> = table.iter().collect();
            assert_eq!(unique.len(), table.len());
        }
    }

    #[test]
    fn test_digit_glyphs_are_distinct() {
        let shapes: HashSet<Vec<Point>> = (0..10)
            .map(|digit| {
                let mut points = digit_points(digit).to_vec();
                points.sort();
                points
            })
            .collect();
        assert_eq!(shapes.len(), 10);
    }

    #[test]
    fn test_arrows_mirror_each_other() {
        let mirrored: HashSet<Point> = arrow_points(Direction::UpLeft)
            .iter()
            .map(|&(x, y)| (6 - x, y))
            .collect();
        let up_right: HashSet<Point> = arrow_points(Direction::UpRight).iter().copied().collect();
        assert_eq!(mirrored, up_right);
    }
}
