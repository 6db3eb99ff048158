use super::tunes::Song;
use super::types::{ButtonState, Color};

/// Immediate-mode pixel output into the device's back buffer.
pub trait Screen {
    fn clear(&mut self);
    fn set_color(&mut self, color: Color);
    fn draw_point(&mut self, x: u8, y: u8);
}

pub trait Speaker {
    /// Starts playing and returns immediately; a new song replaces the current one.
    fn play_song(&mut self, song: &'static Song);
}

pub trait Keypad {
    fn poll_buttons(&mut self) -> ButtonState;
}

pub trait Delay {
    fn sleep_ms(&mut self, ms: u32);
}

/// Notified by the session as a game progresses.
pub trait SessionListener {
    /// A round of `level` directions is about to be played back.
    fn round_started(&mut self, _level: usize) {}
}

/// Everything a session needs from the device.
pub trait Platform: Screen + Speaker + Keypad + Delay + SessionListener {}

impl<T: Screen + Speaker + Keypad + Delay + SessionListener> Platform for T {}
