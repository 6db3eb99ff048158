mod frame_buffer;
mod game_state;
mod glyphs;
mod platform;
mod render;
mod session;
mod settings;
mod tunes;
mod types;

pub use frame_buffer::FrameBuffer;
pub use game_state::{Press, SimoneGameState, StepOutcome, StepResult};
pub use glyphs::{arrow_points, digit_points, Point};
pub use platform::{Delay, Keypad, Platform, Screen, SessionListener, Speaker};
pub use render::{draw_arrow, draw_level};
pub use session::{GameOutcome, SimoneSession, SimoneSessionState};
pub use settings::SimoneSettings;
pub use tunes::{
    Note, NoteLength, Pitch, Song, CORRECT_CHIME, FAILURE_TUNE, INTRO_SONG, VICTORY_FANFARE,
};
pub use types::{
    Button, ButtonState, Color, Direction, GamePhase, GameResult, MAX_LEVEL, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
