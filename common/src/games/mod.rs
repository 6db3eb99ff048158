mod seed_rng;

pub mod simone;

pub use seed_rng::SeedRng;
