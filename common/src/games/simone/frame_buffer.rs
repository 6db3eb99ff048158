use super::platform::Screen;
use super::types::{Color, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Pixel store for the 8×5 display plus the pen color used by `draw_point`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [[Color; SCREEN_WIDTH]; SCREEN_HEIGHT],
    color: Color,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: [[Color::Black; SCREEN_WIDTH]; SCREEN_HEIGHT],
            color: Color::Black,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn rows(&self) -> &[[Color; SCREEN_WIDTH]; SCREEN_HEIGHT] {
        &self.pixels
    }

    /// Coordinates of every pixel that is not black, row by row.
    pub fn lit_points(&self) -> Vec<(u8, u8)> {
        let mut points = Vec::new();
        for (y, row) in self.pixels.iter().enumerate() {
            for (x, color) in row.iter().enumerate() {
                if *color != Color::Black {
                    points.push((x as u8, y as u8));
                }
            }
        }
        points
    }

    pub fn is_blank(&self) -> bool {
        self.pixels
            .iter()
            .all(|row| row.iter().all(|color| *color == Color::Black))
    }
}

impl Screen for FrameBuffer {
    fn clear(&mut self) {
        for row in self.pixels.iter_mut() {
            row.fill(Color::Black);
        }
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Points outside the display are ignored.
    fn draw_point(&mut self, x: u8, y: u8) {
        if let Some(pixel) = self
            .pixels
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *pixel = self.color;
        }
    }
}
