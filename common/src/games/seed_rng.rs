use rand::Rng;

/// Two-register 8-bit multiply-add generator.
///
/// Reproducible bit for bit from the same seeds and call sequence. Not suitable for anything
/// beyond picking the next arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedRng {
    seed_a: u8,
    seed_b: u8,
}

impl SeedRng {
    pub fn new(seed_a: u8, seed_b: u8) -> Self {
        Self { seed_a, seed_b }
    }

    /// Seeds both registers from the thread RNG. Zero is a fixed point of both registers,
    /// so seeds are drawn from `1..=255`.
    pub fn from_entropy() -> Self {
        let mut rng = rand::rng();
        Self::new(rng.random_range(1..=u8::MAX), rng.random_range(1..=u8::MAX))
    }

    pub fn seeds(&self) -> (u8, u8) {
        (self.seed_a, self.seed_b)
    }

    /// Advances both registers and returns a value in `0..max`.
    ///
    /// Panics when `max` is zero.
    pub fn next_random(&mut self, max: u8) -> u8 {
        assert!(max > 0, "next_random called with max == 0");

        self.seed_a = 0x7F_u8
            .wrapping_mul(self.seed_a & 0x0F)
            .wrapping_add(self.seed_a >> 4);
        self.seed_b = 0x3C_u8
            .wrapping_mul(self.seed_b & 0x0F)
            .wrapping_add(self.seed_b >> 4);

        let mixed = ((self.seed_a as u16) << 4) + self.seed_b as u16;
        (mixed % max as u16) as u8
    }
}
