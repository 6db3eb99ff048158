use common::config::Validate;
use serde::{Deserialize, Serialize};

const MIN_CELL_SIZE: f32 = 8.0;
const MAX_CELL_SIZE: f32 = 96.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct DisplayConfig {
    /// Side of one LED cell in points.
    pub cell_size: f32,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&self.cell_size) {
            return Err(format!(
                "Cell size must be between {} and {}, got {}",
                MIN_CELL_SIZE, MAX_CELL_SIZE, self.cell_size
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { cell_size: 40.0 }
    }
}
