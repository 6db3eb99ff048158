use serde::{Deserialize, Serialize};

use crate::games::SeedRng;

/// Highest reachable level; completing it wins the game.
pub const MAX_LEVEL: usize = 99;

pub const SCREEN_WIDTH: usize = 8;
pub const SCREEN_HEIGHT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    UpLeft,
    DownLeft,
    DownRight,
    UpRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::DownLeft,
        Direction::DownRight,
        Direction::UpRight,
    ];

    /// Panics for indices above 3.
    pub fn from_index(index: u8) -> Self {
        Self::ALL[index as usize]
    }

    pub fn random(rng: &mut SeedRng) -> Self {
        Self::from_index(rng.next_random(Self::ALL.len() as u8))
    }

    pub fn button(&self) -> Button {
        match self {
            Direction::UpLeft => Button::A,
            Direction::DownLeft => Button::B,
            Direction::DownRight => Button::C,
            Direction::UpRight => Button::D,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    A,
    B,
    C,
    D,
}

impl Button {
    /// Order in which simultaneous presses are tested.
    pub const PRIORITY: [Button; 4] = [Button::A, Button::B, Button::C, Button::D];

    pub fn direction(&self) -> Direction {
        match self {
            Button::A => Direction::UpLeft,
            Button::B => Direction::DownLeft,
            Button::C => Direction::DownRight,
            Button::D => Direction::UpRight,
        }
    }
}

/// One poll of the four buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub a: bool,
    pub b: bool,
    pub c: bool,
    pub d: bool,
}

impl ButtonState {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn only(button: Button) -> Self {
        let mut state = Self::default();
        state.set(button, true);
        state
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::A => self.a,
            Button::B => self.b,
            Button::C => self.c,
            Button::D => self.d,
        }
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        match button {
            Button::A => self.a = pressed,
            Button::B => self.b = pressed,
            Button::C => self.c = pressed,
            Button::D => self.d = pressed,
        }
    }

    pub fn any(&self) -> bool {
        self.a || self.b || self.c || self.d
    }

    /// Pressed buttons in priority order A, B, C, D.
    pub fn pressed(&self) -> impl Iterator<Item = Button> + '_ {
        Button::PRIORITY
            .into_iter()
            .filter(|button| self.is_pressed(*button))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Black,
    Green,
    Red,
    Yellow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Intro,
    Playback,
    AwaitingInput,
    GameOver,
    GameWon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
}
