use crate::games::SeedRng;
use crate::log;

use super::types::{Button, ButtonState, Direction, GamePhase, MAX_LEVEL};

/// One button tested during an input tick, in the order it was tested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Press {
    pub button: Button,
    pub correct: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// Nothing new: no button down, a button still held, or not accepting input.
    Idle,
    Advanced { cursor: usize },
    LevelComplete { level: usize },
    GameOver { level: usize },
    GameWon,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub presses: Vec<Press>,
    pub result: StepResult,
}

impl StepOutcome {
    fn idle() -> Self {
        Self {
            presses: Vec::new(),
            result: StepResult::Idle,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SimoneGameState {
    sequence: Vec<Direction>,
    level: usize,
    cursor: usize,
    button_down: bool,
    phase: GamePhase,
}

impl Default for SimoneGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimoneGameState {
    pub fn new() -> Self {
        Self {
            sequence: Vec::with_capacity(MAX_LEVEL),
            level: 0,
            cursor: 0,
            button_down: false,
            phase: GamePhase::Intro,
        }
    }

    /// Leaves the intro with a one-long sequence.
    pub fn start(&mut self, rng: &mut SeedRng) {
        assert_eq!(self.phase, GamePhase::Intro, "start called outside of intro");

        self.sequence.push(Direction::random(rng));
        self.level = 1;
        self.phase = GamePhase::Playback;
    }

    /// Playback finished; the player's turn starts at the first direction.
    pub fn begin_input(&mut self) {
        assert_eq!(
            self.phase,
            GamePhase::Playback,
            "begin_input called outside of playback"
        );

        self.cursor = 0;
        self.phase = GamePhase::AwaitingInput;
    }

    /// Advances the game by one input tick.
    ///
    /// A press only counts on the transition from no button held to some button held.
    /// Simultaneous presses are tested in A, B, C, D order against the same cursor and the
    /// first wrong one ends the game.
    pub fn step(&mut self, buttons: ButtonState, rng: &mut SeedRng) -> StepOutcome {
        if self.phase != GamePhase::AwaitingInput {
            return StepOutcome::idle();
        }

        if !buttons.any() {
            self.button_down = false;
            return StepOutcome::idle();
        }

        if self.button_down {
            return StepOutcome::idle();
        }
        self.button_down = true;

        let expected = self.sequence[self.cursor];
        let mut presses = Vec::new();
        for button in buttons.pressed() {
            let correct = button.direction() == expected;
            presses.push(Press { button, correct });

            if !correct {
                log!(
                    "Wrong button {:?} at {}/{}, expected {:?}",
                    button,
                    self.cursor + 1,
                    self.level,
                    expected
                );
                self.phase = GamePhase::GameOver;
                return StepOutcome {
                    presses,
                    result: StepResult::GameOver { level: self.level },
                };
            }
        }

        self.cursor += 1;
        let result = if self.cursor < self.level {
            StepResult::Advanced {
                cursor: self.cursor,
            }
        } else if self.level == MAX_LEVEL {
            self.phase = GamePhase::GameWon;
            StepResult::GameWon
        } else {
            self.sequence.push(Direction::random(rng));
            self.level += 1;
            self.phase = GamePhase::Playback;
            StepResult::LevelComplete { level: self.level }
        };

        StepOutcome { presses, result }
    }

    /// Directions shown during this round's playback.
    pub fn playback(&self) -> &[Direction] {
        &self.sequence[..self.level]
    }

    pub fn sequence(&self) -> &[Direction] {
        &self.sequence
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_button_down(&self) -> bool {
        self.button_down
    }

    /// Jumps straight into the input phase of a prepared round.
    #[cfg(test)]
    pub fn from_sequence(directions: &[Direction]) -> Self {
        assert!(!directions.is_empty() && directions.len() <= MAX_LEVEL);
        Self {
            sequence: directions.to_vec(),
            level: directions.len(),
            cursor: 0,
            button_down: false,
            phase: GamePhase::AwaitingInput,
        }
    }
}
