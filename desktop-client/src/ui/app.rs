use super::colors::{led_color, CASE_COLOR};
use crate::constants::REPAINT_INTERVAL_MS;
use crate::state::{HostCommand, SessionStatus, SharedState, SpeakerState};
use common::games::simone::{
    Button, ButtonState, FrameBuffer, GameResult, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use common::log;
use eframe::egui;
use std::sync::mpsc;
use std::time::Duration;

/// Buttons as they sit around the display: top row, then bottom row.
const BUTTON_ROWS: [[Button; 2]; 2] = [[Button::A, Button::D], [Button::B, Button::C]];

fn button_label(button: Button) -> &'static str {
    match button {
        Button::A => "↖ A",
        Button::B => "↙ B",
        Button::C => "C ↘",
        Button::D => "D ↗",
    }
}

pub struct SimoneApp {
    shared_state: SharedState,
    command_tx: mpsc::Sender<HostCommand>,
    key_bindings: Vec<(Button, egui::Key)>,
    cell_size: f32,
}

impl SimoneApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::Sender<HostCommand>,
        key_bindings: Vec<(Button, egui::Key)>,
        cell_size: f32,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            key_bindings,
            cell_size,
        }
    }

    fn keyboard_buttons(&self, ctx: &egui::Context) -> ButtonState {
        ctx.input(|i| {
            let mut buttons = ButtonState::none();
            for (button, key) in &self.key_bindings {
                if i.key_down(*key) {
                    buttons.set(*button, true);
                }
            }
            buttons
        })
    }

    fn key_name(&self, button: Button) -> &'static str {
        self.key_bindings
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, key)| key.name())
            .unwrap_or("?")
    }

    fn render_status(&self, ui: &mut egui::Ui, status: SessionStatus) {
        let text = match status {
            SessionStatus::Starting => egui::RichText::new("Starting..."),
            SessionStatus::Playing { level } => egui::RichText::new(format!("Level {}", level)),
            SessionStatus::Finished {
                result: GameResult::Won,
                ..
            } => egui::RichText::new("You Win!").color(egui::Color32::GREEN),
            SessionStatus::Finished {
                result: GameResult::Lost,
                level,
            } => egui::RichText::new(format!("Game Over - level {}", level))
                .color(egui::Color32::RED),
        };
        ui.heading(text.size(24.0));
    }

    fn render_display(&self, ui: &mut egui::Ui, display: &FrameBuffer) {
        let cell = self.cell_size;
        let size = egui::vec2(SCREEN_WIDTH as f32 * cell, SCREEN_HEIGHT as f32 * cell);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());

        let painter = ui.painter();
        painter.rect_filled(rect.expand(6.0), 8.0, CASE_COLOR);

        for (y, row) in display.rows().iter().enumerate() {
            for (x, color) in row.iter().enumerate() {
                let offset = egui::vec2((x as f32 + 0.5) * cell, (y as f32 + 0.5) * cell);
                let center = rect.min + offset;
                painter.circle_filled(center, cell * 0.38, led_color(*color));
            }
        }
    }

    /// Adds the on-screen buttons held with the pointer to `buttons`.
    fn render_buttons(&self, ui: &mut egui::Ui, buttons: &mut ButtonState) {
        let width = SCREEN_WIDTH as f32 * self.cell_size;
        let button_size = egui::vec2(width / 2.0 - 8.0, 44.0);

        for row in BUTTON_ROWS {
            ui.horizontal(|ui| {
                for button in row {
                    let label = format!("{} ({})", button_label(button), self.key_name(button));
                    let mut widget = egui::Button::new(label).min_size(button_size);
                    if buttons.is_pressed(button) {
                        widget = widget.fill(egui::Color32::from_rgb(90, 60, 60));
                    }
                    if ui.add(widget).is_pointer_button_down_on() {
                        buttons.set(button, true);
                    }
                }
            });
        }
    }

    fn render_speaker(&self, ui: &mut egui::Ui, speaker: SpeakerState) {
        let text = match (speaker.song, speaker.pitch) {
            (Some(song), Some(pitch)) => format!("♪ {} ({})", pitch.name(), song),
            (Some(song), None) => format!("♪ ... ({})", song),
            (None, _) => "♪ -".to_string(),
        };
        ui.label(egui::RichText::new(text).monospace());
    }

    fn render_event_log(&self, ui: &mut egui::Ui, events: &[String]) {
        ui.label("Events:");
        egui::ScrollArea::vertical()
            .id_salt("event_log_scroll")
            .max_height(140.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for event in events {
                    ui.label(event);
                }
            });
    }
}

impl eframe::App for SimoneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        let status = self.shared_state.get_status();
        let mut buttons = self.keyboard_buttons(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.render_status(ui, status);
                ui.add_space(10.0);
                self.render_display(ui, &self.shared_state.get_display());
                ui.add_space(14.0);
                self.render_buttons(ui, &mut buttons);
                ui.add_space(6.0);
                self.render_speaker(ui, self.shared_state.get_speaker());

                if let SessionStatus::Finished { .. } = status {
                    ui.add_space(6.0);
                    if ui.button("Play again").clicked()
                        && self.command_tx.send(HostCommand::PlayAgain).is_err()
                    {
                        log!("Game thread is gone, can't start a new game");
                    }
                }
            });

            ui.separator();
            self.render_event_log(ui, &self.shared_state.get_events());
        });

        self.shared_state.set_buttons(buttons);
        ctx.request_repaint_after(Duration::from_millis(REPAINT_INTERVAL_MS));
    }
}
