use crate::platform::DesktopPlatform;
use crate::state::{HostCommand, SessionStatus, SharedState};
use common::games::simone::{
    GameOutcome, GameResult, SimoneSession, SimoneSessionState, SimoneSettings,
};
use common::games::SeedRng;
use common::log;
use std::sync::mpsc;

/// Runs games back to back on the calling thread until the UI goes away.
///
/// With pinned seeds every game replays the same sequence.
pub fn game_loop(
    settings: SimoneSettings,
    pinned_seeds: Option<(u8, u8)>,
    shared_state: SharedState,
    command_rx: mpsc::Receiver<HostCommand>,
) {
    let mut platform = DesktopPlatform::new(shared_state.clone());

    loop {
        let rng = match pinned_seeds {
            Some((seed_a, seed_b)) => SeedRng::new(seed_a, seed_b),
            None => SeedRng::from_entropy(),
        };
        let (seed_a, seed_b) = rng.seeds();

        shared_state.set_status(SessionStatus::Starting);
        shared_state.add_event(format!("New game, seeds {:02X}/{:02X}", seed_a, seed_b));

        let mut session_state = SimoneSessionState::create(settings, rng);
        let outcome = SimoneSession::run(&mut session_state, &mut platform);
        // The final score is drawn after the last wait.
        platform.present();
        log!(
            "Game finished: {:?} at level {} (seeds 0x{:02X}/0x{:02X}) after {} ticks in {:.1}s",
            outcome.result,
            outcome.level,
            outcome.seeds.0,
            outcome.seeds.1,
            outcome.ticks,
            outcome.elapsed.as_secs_f32()
        );

        // Clicks sent before the game ended are meaningless.
        while command_rx.try_recv().is_ok() {}

        shared_state.set_status(SessionStatus::Finished {
            result: outcome.result,
            level: outcome.level,
        });
        shared_state.add_event(describe_outcome(&outcome));

        match command_rx.recv() {
            Ok(HostCommand::PlayAgain) => {}
            Err(_) => break,
        }
    }
}

fn describe_outcome(outcome: &GameOutcome) -> String {
    match outcome.result {
        GameResult::Won => format!("Won! All {} levels cleared", outcome.level),
        GameResult::Lost => format!("Game over at level {}", outcome.level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::simone::{draw_level, Button, ButtonState, Color, FrameBuffer};
    use std::time::Duration;

    fn outcome(result: GameResult, level: usize) -> GameOutcome {
        GameOutcome {
            result,
            level,
            seeds: (1, 1),
            ticks: 0,
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn test_describe_outcome() {
        assert_eq!(describe_outcome(&outcome(GameResult::Lost, 7)), "Game over at level 7");
        assert_eq!(
            describe_outcome(&outcome(GameResult::Won, 99)),
            "Won! All 99 levels cleared"
        );
    }

    #[test]
    fn test_final_score_is_shown_after_a_lost_game() {
        let shared_state = SharedState::new();
        // Sequence for these seeds opens with B.
        shared_state.set_buttons(ButtonState::only(Button::D));
        let (command_tx, command_rx) = mpsc::channel();
        drop(command_tx);

        game_loop(
            SimoneSettings::instant(),
            Some((0x01, 0x1D)),
            shared_state.clone(),
            command_rx,
        );

        let mut expected = FrameBuffer::new();
        draw_level(&mut expected, 1, Color::Yellow);
        let display = shared_state.get_display();
        assert_eq!(display.lit_points(), expected.lit_points());
        assert_eq!(display.pixel(0, 0), Some(Color::Yellow));
        assert_eq!(
            shared_state.get_status(),
            SessionStatus::Finished {
                result: GameResult::Lost,
                level: 1,
            }
        );
    }
}
