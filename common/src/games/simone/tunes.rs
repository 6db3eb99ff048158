use super::types::Direction;

#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pitch {
    C3, Cs3, D3, Ds3, E3, F3, Fs3, G3, Gs3, A3, As3, B3,
    C4, Cs4, D4, Ds4, E4, F4, Fs4, G4, Gs4, A4, As4, B4,
    C5, Cs5, D5, Ds5, E5, F5, Fs5, G5, Gs5, A5, As5, B5,
    C6,
    Rest,
}

// Equal temperament, A4 = 440 Hz, rounded to 0.01 Hz.
#[rustfmt::skip]
const FREQUENCIES: [f32; 37] = [
    130.81, 138.59, 146.83, 155.56, 164.81, 174.61, 185.00, 196.00, 207.65, 220.00, 233.08, 246.94,
    261.63, 277.18, 293.66, 311.13, 329.63, 349.23, 369.99, 392.00, 415.30, 440.00, 466.16, 493.88,
    523.25, 554.37, 587.33, 622.25, 659.25, 698.46, 739.99, 783.99, 830.61, 880.00, 932.33, 987.77,
    1046.50,
];

impl Pitch {
    /// `None` for a rest.
    pub fn frequency_hz(&self) -> Option<f32> {
        match self {
            Pitch::Rest => None,
            pitch => Some(FREQUENCIES[*pitch as usize]),
        }
    }

    pub fn name(&self) -> &'static str {
        #[rustfmt::skip]
        const NAMES: [&str; 37] = [
            "C3", "C#3", "D3", "D#3", "E3", "F3", "F#3", "G3", "G#3", "A3", "A#3", "B3",
            "C4", "C#4", "D4", "D#4", "E4", "F4", "F#4", "G4", "G#4", "A4", "A#4", "B4",
            "C5", "C#5", "D5", "D#5", "E5", "F5", "F#5", "G5", "G#5", "A5", "A#5", "B5",
            "C6",
        ];
        match self {
            Pitch::Rest => "rest",
            pitch => NAMES[*pitch as usize],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteLength {
    Sixteenth,
    Eighth,
    Quarter,
    Half,
    Whole,
}

impl NoteLength {
    pub fn duration_ms(&self, tempo_bpm: u16) -> u32 {
        let quarter = 60_000 / tempo_bpm.max(1) as u32;
        match self {
            NoteLength::Sixteenth => quarter / 4,
            NoteLength::Eighth => quarter / 2,
            NoteLength::Quarter => quarter,
            NoteLength::Half => quarter * 2,
            NoteLength::Whole => quarter * 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    pub pitch: Pitch,
    pub length: NoteLength,
}

const fn note(pitch: Pitch, length: NoteLength) -> Note {
    Note { pitch, length }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Song {
    pub name: &'static str,
    pub tempo_bpm: u16,
    pub notes: &'static [Note],
}

use NoteLength::{Eighth, Half, Quarter, Sixteenth};
use Pitch::*;

/// Opening of "Jesu, Joy of Man's Desiring".
#[rustfmt::skip]
pub static INTRO_SONG: Song = Song {
    name: "intro",
    tempo_bpm: 120,
    notes: &[
        note(E4, Eighth), note(C4, Eighth), note(D4, Eighth), note(E4, Eighth),
        note(G4, Eighth), note(F4, Eighth), note(F4, Eighth), note(A4, Eighth),
        note(G4, Eighth), note(G4, Eighth), note(C5, Eighth), note(B4, Eighth),
        note(C5, Eighth), note(G4, Eighth), note(E4, Eighth), note(C4, Half),
    ],
};

pub static CORRECT_CHIME: Song = Song {
    name: "correct",
    tempo_bpm: 150,
    notes: &[note(C5, Sixteenth), note(E5, Sixteenth), note(G5, Eighth)],
};

#[rustfmt::skip]
pub static FAILURE_TUNE: Song = Song {
    name: "failure",
    tempo_bpm: 90,
    notes: &[
        note(G4, Eighth), note(Fs4, Eighth), note(F4, Eighth), note(E4, Quarter),
        note(Rest, Eighth), note(C4, Half),
    ],
};

#[rustfmt::skip]
pub static VICTORY_FANFARE: Song = Song {
    name: "victory",
    tempo_bpm: 140,
    notes: &[
        note(C4, Eighth), note(E4, Eighth), note(G4, Eighth), note(C5, Quarter),
        note(G4, Eighth), note(C5, Half), note(Rest, Eighth),
        note(E5, Eighth), note(G5, Eighth), note(C6, Half),
    ],
};

static TONE_UP_LEFT: Song = Song {
    name: "up-left",
    tempo_bpm: 120,
    notes: &[note(G4, Eighth)],
};

static TONE_DOWN_LEFT: Song = Song {
    name: "down-left",
    tempo_bpm: 120,
    notes: &[note(C4, Eighth)],
};

static TONE_DOWN_RIGHT: Song = Song {
    name: "down-right",
    tempo_bpm: 120,
    notes: &[note(E4, Eighth)],
};

static TONE_UP_RIGHT: Song = Song {
    name: "up-right",
    tempo_bpm: 120,
    notes: &[note(C5, Eighth)],
};

impl Direction {
    pub fn tone(&self) -> &'static Song {
        match self {
            Direction::UpLeft => &TONE_UP_LEFT,
            Direction::DownLeft => &TONE_DOWN_LEFT,
            Direction::DownRight => &TONE_DOWN_RIGHT,
            Direction::UpRight => &TONE_UP_RIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_is_440() {
        assert_eq!(A4.frequency_hz(), Some(440.0));
        assert_eq!(Rest.frequency_hz(), None);
        assert_eq!(Cs5.name(), "C#5");
    }

    #[test]
    fn test_frequencies_strictly_increase() {
        let frequencies: Vec<f32> = FREQUENCIES.to_vec();
        assert!(frequencies.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_note_lengths_at_120_bpm() {
        assert_eq!(Quarter.duration_ms(120), 500);
        assert_eq!(Eighth.duration_ms(120), 250);
        assert_eq!(Sixteenth.duration_ms(120), 125);
        assert_eq!(Half.duration_ms(120), 1000);
        assert_eq!(NoteLength::Whole.duration_ms(120), 2000);
    }

    #[test]
    fn test_intro_song_matches_melody() {
        let pitches: Vec<Pitch> = INTRO_SONG.notes.iter().map(|n| n.pitch).collect();
        assert_eq!(
            pitches,
            vec![E4, C4, D4, E4, G4, F4, F4, A4, G4, G4, C5, B4, C5, G4, E4, C4]
        );
        assert_eq!(INTRO_SONG.notes.last().map(|n| n.length), Some(Half));
        assert!(INTRO_SONG.notes[..15].iter().all(|n| n.length == Eighth));
    }

    #[test]
    fn test_every_direction_has_a_distinct_tone() {
        let pitches: std::collections::HashSet<Pitch> = Direction::ALL
            .iter()
            .map(|d| d.tone().notes[0].pitch)
            .collect();
        assert_eq!(pitches.len(), 4);
    }

    #[test]
    fn test_failure_tune_descends() {
        let frequencies: Vec<f32> = FAILURE_TUNE
            .notes
            .iter()
            .filter_map(|n| n.pitch.frequency_hz())
            .collect();
        assert!(frequencies.windows(2).all(|pair| pair[0] > pair[1]));
    }
}
