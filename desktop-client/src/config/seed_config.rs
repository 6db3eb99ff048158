use common::config::Validate;
use serde::{Deserialize, Serialize};

/// Pins both generator registers so every game plays the same sequence.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub struct SeedConfig {
    pub seed_a: u8,
    pub seed_b: u8,
}

impl Validate for SeedConfig {
    fn validate(&self) -> Result<(), String> {
        if self.seed_a == 0 || self.seed_b == 0 {
            return Err(format!(
                "Seeds must be nonzero, got {}/{}",
                self.seed_a, self.seed_b
            ));
        }
        Ok(())
    }
}
