use crate::state::{SessionStatus, SharedState};
use common::games::simone::{
    ButtonState, Color, Delay, FrameBuffer, Keypad, Screen, SessionListener, Song, Speaker,
};
use std::thread;
use std::time::Duration;

/// The handheld as seen by the game thread.
///
/// Drawing goes to a back buffer that is presented whenever the game waits or polls,
/// so the grid never shows a half-drawn glyph.
pub struct DesktopPlatform {
    shared_state: SharedState,
    back_buffer: FrameBuffer,
}

impl DesktopPlatform {
    pub fn new(shared_state: SharedState) -> Self {
        Self {
            shared_state,
            back_buffer: FrameBuffer::new(),
        }
    }

    /// Shows the back buffer on the LED grid.
    pub fn present(&self) {
        self.shared_state.present(&self.back_buffer);
    }
}

impl Screen for DesktopPlatform {
    fn clear(&mut self) {
        self.back_buffer.clear();
    }

    fn set_color(&mut self, color: Color) {
        self.back_buffer.set_color(color);
    }

    fn draw_point(&mut self, x: u8, y: u8) {
        self.back_buffer.draw_point(x, y);
    }
}

impl Speaker for DesktopPlatform {
    fn play_song(&mut self, song: &'static Song) {
        let generation = self.shared_state.start_song(song.name);
        let shared_state = self.shared_state.clone();
        thread::spawn(move || {
            for note in song.notes {
                let pitch = note.pitch.frequency_hz().map(|_| note.pitch);
                if !shared_state.set_note(generation, pitch) {
                    return;
                }
                let duration_ms = note.length.duration_ms(song.tempo_bpm);
                thread::sleep(Duration::from_millis(duration_ms as u64));
            }
            shared_state.finish_song(generation);
        });
    }
}

impl Keypad for DesktopPlatform {
    fn poll_buttons(&mut self) -> ButtonState {
        self.present();
        self.shared_state.get_buttons()
    }
}

impl Delay for DesktopPlatform {
    fn sleep_ms(&mut self, ms: u32) {
        self.present();
        if ms > 0 {
            thread::sleep(Duration::from_millis(ms as u64));
        }
    }
}

impl SessionListener for DesktopPlatform {
    fn round_started(&mut self, level: usize) {
        self.shared_state.set_status(SessionStatus::Playing { level });
        if level > 1 {
            self.shared_state.add_event(format!("Level {}", level));
        }
    }
}
