use common::games::simone::Color;
use eframe::egui;

pub const CASE_COLOR: egui::Color32 = egui::Color32::from_rgb(18, 18, 22);

pub fn led_color(color: Color) -> egui::Color32 {
    match color {
        Color::Black => egui::Color32::from_rgb(40, 40, 46),
        Color::Green => egui::Color32::from_rgb(60, 210, 90),
        Color::Red => egui::Color32::from_rgb(230, 60, 50),
        Color::Yellow => egui::Color32::from_rgb(240, 205, 50),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_colors_are_distinct_from_case() {
        let all = [Color::Black, Color::Green, Color::Red, Color::Yellow];
        for (i, color) in all.iter().enumerate() {
            assert_ne!(led_color(*color), CASE_COLOR);
            for other in &all[i + 1..] {
                assert_ne!(led_color(*color), led_color(*other));
            }
        }
    }
}
