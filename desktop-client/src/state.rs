use crate::constants::EVENT_LOG_SIZE;
use chrono::Local;
use common::games::simone::{ButtonState, FrameBuffer, GameResult, Pitch};
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Starting,
    Playing { level: usize },
    Finished { result: GameResult, level: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    PlayAgain,
}

/// What the speaker is sounding right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpeakerState {
    pub song: Option<&'static str>,
    pub pitch: Option<Pitch>,
    /// Bumped by every new song; a playing song stops once it is stale.
    pub generation: u64,
}

pub struct SharedState {
    display: Arc<Mutex<FrameBuffer>>,
    buttons: Arc<Mutex<ButtonState>>,
    speaker: Arc<Mutex<SpeakerState>>,
    status: Arc<Mutex<SessionStatus>>,
    event_log: Arc<Mutex<AllocRingBuffer<String>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            display: Arc::new(Mutex::new(FrameBuffer::new())),
            buttons: Arc::new(Mutex::new(ButtonState::none())),
            speaker: Arc::new(Mutex::new(SpeakerState::default())),
            status: Arc::new(Mutex::new(SessionStatus::Starting)),
            event_log: Arc::new(Mutex::new(AllocRingBuffer::new(EVENT_LOG_SIZE))),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.context.lock().unwrap() = Some(ctx);
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().unwrap().is_some()
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.context.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }

    /// Replaces what the LED grid shows.
    pub fn present(&self, frame: &FrameBuffer) {
        let mut display = self.display.lock().unwrap();
        if *display != *frame {
            *display = frame.clone();
            drop(display);
            self.request_repaint();
        }
    }

    pub fn get_display(&self) -> FrameBuffer {
        self.display.lock().unwrap().clone()
    }

    pub fn set_buttons(&self, buttons: ButtonState) {
        *self.buttons.lock().unwrap() = buttons;
    }

    pub fn get_buttons(&self) -> ButtonState {
        *self.buttons.lock().unwrap()
    }

    /// Makes `song` the current one and returns its generation.
    pub fn start_song(&self, song: &'static str) -> u64 {
        let mut speaker = self.speaker.lock().unwrap();
        speaker.generation += 1;
        speaker.song = Some(song);
        speaker.pitch = None;
        let generation = speaker.generation;
        drop(speaker);
        self.request_repaint();
        generation
    }

    /// Returns false when a newer song has started in the meantime.
    pub fn set_note(&self, generation: u64, pitch: Option<Pitch>) -> bool {
        let mut speaker = self.speaker.lock().unwrap();
        if speaker.generation != generation {
            return false;
        }
        speaker.pitch = pitch;
        drop(speaker);
        self.request_repaint();
        true
    }

    pub fn finish_song(&self, generation: u64) {
        let mut speaker = self.speaker.lock().unwrap();
        if speaker.generation == generation {
            speaker.song = None;
            speaker.pitch = None;
            drop(speaker);
            self.request_repaint();
        }
    }

    pub fn get_speaker(&self) -> SpeakerState {
        *self.speaker.lock().unwrap()
    }

    pub fn set_status(&self, status: SessionStatus) {
        *self.status.lock().unwrap() = status;
        self.request_repaint();
    }

    pub fn get_status(&self) -> SessionStatus {
        *self.status.lock().unwrap()
    }

    pub fn add_event(&self, event: String) {
        let timestamp = Local::now().format("%H:%M:%S");
        self.event_log
            .lock()
            .unwrap()
            .push(format!("[{}] {}", timestamp, event));
        self.request_repaint();
    }

    pub fn get_events(&self) -> Vec<String> {
        self.event_log.lock().unwrap().to_vec()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            display: Arc::clone(&self.display),
            buttons: Arc::clone(&self.buttons),
            speaker: Arc::clone(&self.speaker),
            status: Arc::clone(&self.status),
            event_log: Arc::clone(&self.event_log),
            context: Arc::clone(&self.context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::simone::{Color, Screen};

    #[test]
    fn test_present_is_visible_through_clones() {
        let shared_state = SharedState::new();
        let ui_side = shared_state.clone();

        let mut frame = FrameBuffer::new();
        frame.set_color(Color::Red);
        frame.draw_point(2, 3);
        shared_state.present(&frame);

        assert_eq!(ui_side.get_display().pixel(2, 3), Some(Color::Red));
    }

    #[test]
    fn test_stale_song_cannot_set_notes() {
        let shared_state = SharedState::new();
        let first = shared_state.start_song("intro");
        let second = shared_state.start_song("up-left");

        assert!(!shared_state.set_note(first, Some(Pitch::E4)));
        assert!(shared_state.set_note(second, Some(Pitch::G4)));
        shared_state.finish_song(first);

        let speaker = shared_state.get_speaker();
        assert_eq!(speaker.song, Some("up-left"));
        assert_eq!(speaker.pitch, Some(Pitch::G4));

        shared_state.finish_song(second);
        assert_eq!(shared_state.get_speaker().song, None);
    }

    #[test]
    fn test_event_log_keeps_latest_entries() {
        let shared_state = SharedState::new();
        for i in 0..EVENT_LOG_SIZE + 5 {
            shared_state.add_event(format!("event {}", i));
        }
        let events = shared_state.get_events();
        assert_eq!(events.len(), EVENT_LOG_SIZE);
        assert!(events[0].ends_with("event 5"));
        assert!(events[EVENT_LOG_SIZE - 1].ends_with(&format!("event {}", EVENT_LOG_SIZE + 4)));
    }
}
