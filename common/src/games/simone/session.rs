use std::time::{Duration, Instant};

use crate::games::SeedRng;
use crate::log;

use super::game_state::{SimoneGameState, StepResult};
use super::platform::Platform;
use super::render::{draw_arrow, draw_level};
use super::settings::SimoneSettings;
use super::tunes::{CORRECT_CHIME, FAILURE_TUNE, INTRO_SONG, VICTORY_FANFARE};
use super::types::{Color, Direction, GameResult, MAX_LEVEL};

const PLAYBACK_COLOR: Color = Color::Green;
const PRESS_COLOR: Color = Color::Red;
const LOSS_SCORE_COLOR: Color = Color::Yellow;
const WIN_SCORE_COLOR: Color = Color::Green;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub result: GameResult,
    pub level: usize,
    /// Generator seeds the session started from.
    pub seeds: (u8, u8),
    /// Input polls performed over the whole session.
    pub ticks: u64,
    pub elapsed: Duration,
}

pub struct SimoneSessionState {
    pub game_state: SimoneGameState,
    pub rng: SeedRng,
    pub settings: SimoneSettings,
    pub tick: u64,
    initial_seeds: (u8, u8),
    start_time: Instant,
}

impl SimoneSessionState {
    pub fn create(settings: SimoneSettings, rng: SeedRng) -> Self {
        Self {
            game_state: SimoneGameState::new(),
            initial_seeds: rng.seeds(),
            rng,
            settings,
            tick: 0,
            start_time: Instant::now(),
        }
    }

    fn outcome(&self, result: GameResult) -> GameOutcome {
        GameOutcome {
            result,
            level: self.game_state.level(),
            seeds: self.initial_seeds,
            ticks: self.tick,
            elapsed: self.start_time.elapsed(),
        }
    }
}

pub struct SimoneSession;

impl SimoneSession {
    /// Plays one game from the intro to a terminal screen and reports how it ended.
    pub fn run<P: Platform>(
        session_state: &mut SimoneSessionState,
        platform: &mut P,
    ) -> GameOutcome {
        let (seed_a, seed_b) = session_state.initial_seeds;
        log!("Session starting, seeds 0x{:02X}/0x{:02X}", seed_a, seed_b);

        Self::intro(platform, &session_state.settings);
        session_state.game_state.start(&mut session_state.rng);

        loop {
            platform.round_started(session_state.game_state.level());
            Self::playback(platform, session_state);
            session_state.game_state.begin_input();

            match Self::await_input(platform, session_state) {
                StepResult::LevelComplete { level } => {
                    log!("Level {} reached", level);
                    platform.play_song(&CORRECT_CHIME);
                    platform.sleep_ms(session_state.settings.level_transition_ms);
                }
                StepResult::GameOver { level } => {
                    log!("Game over at level {}", level);
                    platform.play_song(&FAILURE_TUNE);
                    platform.clear();
                    draw_level(platform, level, LOSS_SCORE_COLOR);
                    return session_state.outcome(GameResult::Lost);
                }
                StepResult::GameWon => {
                    log!("All {} levels cleared", MAX_LEVEL);
                    platform.play_song(&VICTORY_FANFARE);
                    platform.clear();
                    draw_level(platform, MAX_LEVEL, WIN_SCORE_COLOR);
                    return session_state.outcome(GameResult::Won);
                }
                StepResult::Idle | StepResult::Advanced { .. } => {
                    unreachable!("await_input only returns round-ending results")
                }
            }
        }
    }

    fn intro<P: Platform>(platform: &mut P, settings: &SimoneSettings) {
        platform.play_song(&INTRO_SONG);
        for direction in Direction::ALL {
            draw_arrow(platform, direction, PLAYBACK_COLOR);
            platform.sleep_ms(settings.intro_demo_hold_ms);
            platform.clear();
        }
        platform.sleep_ms(settings.intro_pause_ms);
    }

    fn playback<P: Platform>(platform: &mut P, session_state: &SimoneSessionState) {
        let hold_ms = session_state.settings.playback_hold_ms;
        platform.clear();
        for &direction in session_state.game_state.playback() {
            draw_arrow(platform, direction, PLAYBACK_COLOR);
            platform.play_song(direction.tone());
            platform.sleep_ms(hold_ms);
            platform.clear();
        }
    }

    /// Polls until the round ends; there is no timeout.
    fn await_input<P: Platform>(
        platform: &mut P,
        session_state: &mut SimoneSessionState,
    ) -> StepResult {
        let settings = session_state.settings;
        loop {
            platform.clear();
            let buttons = platform.poll_buttons();
            session_state.tick += 1;

            let outcome = session_state
                .game_state
                .step(buttons, &mut session_state.rng);

            for press in &outcome.presses {
                let direction = press.button.direction();
                draw_arrow(platform, direction, PRESS_COLOR);
                platform.play_song(direction.tone());
                platform.sleep_ms(settings.press_feedback_ms);
            }

            match outcome.result {
                StepResult::Idle | StepResult::Advanced { .. } => {
                    if settings.poll_interval_ms > 0 {
                        platform.sleep_ms(settings.poll_interval_ms);
                    }
                }
                result => return result,
            }
        }
    }
}
