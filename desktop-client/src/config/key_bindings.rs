use common::config::Validate;
use common::games::simone::Button;
use serde::{Deserialize, Serialize};

/// Keyboard keys for the four buttons, by `egui::Key` name.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct KeyBindings {
    pub up_left: String,
    pub down_left: String,
    pub down_right: String,
    pub up_right: String,
}

impl KeyBindings {
    fn names(&self) -> [(Button, &str); 4] {
        [
            (Button::A, self.up_left.as_str()),
            (Button::B, self.down_left.as_str()),
            (Button::C, self.down_right.as_str()),
            (Button::D, self.up_right.as_str()),
        ]
    }

    pub fn resolve(&self) -> Result<Vec<(Button, egui::Key)>, String> {
        self.names()
            .into_iter()
            .map(|(button, name)| {
                egui::Key::from_name(name)
                    .map(|key| (button, key))
                    .ok_or_else(|| format!("Unknown key name '{}' for button {:?}", name, button))
            })
            .collect()
    }
}

impl Validate for KeyBindings {
    fn validate(&self) -> Result<(), String> {
        let resolved = self.resolve()?;
        for (i, (button, key)) in resolved.iter().enumerate() {
            if let Some((other, _)) = resolved[i + 1..].iter().find(|(_, k)| k == key) {
                return Err(format!(
                    "Key '{}' is bound to both {:?} and {:?}",
                    key.name(),
                    button,
                    other
                ));
            }
        }
        Ok(())
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up_left: "Q".to_string(),
            down_left: "Z".to_string(),
            down_right: "M".to_string(),
            up_right: "P".to_string(),
        }
    }
}
