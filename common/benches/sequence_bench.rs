use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::collections::VecDeque;
use std::hint::black_box;
use std::time::Duration;
use common::games::SeedRng;
use common::games::simone::{
    Button, ButtonState, Color, Delay, Direction, FrameBuffer, Keypad, Screen, SessionListener,
    SimoneSession, SimoneSessionState, SimoneSettings, Song, Speaker, MAX_LEVEL,
};

const SEED_A: u8 = 0x5A;
const SEED_B: u8 = 0xC3;

/// Plays back a prepared list of polls into an in-memory screen.
struct ReplayPlatform {
    screen: FrameBuffer,
    polls: VecDeque<ButtonState>,
}

impl Screen for ReplayPlatform {
    fn clear(&mut self) {
        self.screen.clear();
    }

    fn set_color(&mut self, color: Color) {
        self.screen.set_color(color);
    }

    fn draw_point(&mut self, x: u8, y: u8) {
        self.screen.draw_point(x, y);
    }
}

impl Speaker for ReplayPlatform {
    fn play_song(&mut self, _song: &'static Song) {}
}

impl Keypad for ReplayPlatform {
    fn poll_buttons(&mut self) -> ButtonState {
        self.polls.pop_front().unwrap_or_default()
    }
}

impl Delay for ReplayPlatform {
    fn sleep_ms(&mut self, _ms: u32) {}
}

impl SessionListener for ReplayPlatform {}

fn perfect_game_polls() -> Vec<ButtonState> {
    let mut oracle = SeedRng::new(SEED_A, SEED_B);
    let sequence: Vec<Button> = (0..MAX_LEVEL)
        .map(|_| Direction::random(&mut oracle).button())
        .collect();

    let mut polls = Vec::new();
    for level in 1..=MAX_LEVEL {
        for &button in &sequence[..level] {
            polls.push(ButtonState::only(button));
            polls.push(ButtonState::none());
        }
    }
    polls
}

fn bench_generate_full_sequence() {
    let mut rng = SeedRng::new(SEED_A, SEED_B);
    for _ in 0..MAX_LEVEL {
        black_box(Direction::random(&mut rng));
    }
}

fn bench_perfect_game(polls: &[ButtonState]) {
    let mut platform = ReplayPlatform {
        screen: FrameBuffer::new(),
        polls: polls.iter().copied().collect(),
    };
    let mut session_state =
        SimoneSessionState::create(SimoneSettings::instant(), SeedRng::new(SEED_A, SEED_B));
    black_box(SimoneSession::run(&mut session_state, &mut platform));
}

fn sequence_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("simone");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(50)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("generate_99_directions", |b| {
        b.iter(bench_generate_full_sequence)
    });

    let polls = perfect_game_polls();
    group.bench_function("perfect_game", |b| {
        b.iter(|| bench_perfect_game(&polls))
    });

    group.finish();
}

criterion_group!(benches, sequence_bench);
criterion_main!(benches);
