use super::glyphs::{arrow_points, digit_points, Point, ONES_OFFSET, TENS_OFFSET};
use super::platform::Screen;
use super::types::{Color, Direction, MAX_LEVEL};

fn draw_points(screen: &mut impl Screen, points: &[Point], x_offset: u8) {
    for &(x, y) in points {
        screen.draw_point(x + x_offset, y);
    }
}

pub fn draw_arrow(screen: &mut impl Screen, direction: Direction, color: Color) {
    screen.set_color(color);
    draw_points(screen, arrow_points(direction), 0);
}

/// Draws `level` as two digits, with a leading zero below 10.
///
/// Panics when `level` exceeds the maximum level.
pub fn draw_level(screen: &mut impl Screen, level: usize, color: Color) {
    assert!(level <= MAX_LEVEL, "level {} cannot be rendered", level);

    screen.set_color(color);
    draw_points(screen, digit_points((level / 10) as u8), TENS_OFFSET);
    draw_points(screen, digit_points((level % 10) as u8), ONES_OFFSET);
}
