pub const EVENT_LOG_SIZE: usize = 64;
pub const WINDOW_SIZE: [f32; 2] = [420.0, 620.0];
pub const REPAINT_INTERVAL_MS: u64 = 16;
