mod display_config;
mod key_bindings;
mod log_config;
mod main_config;
mod seed_config;

pub use display_config::DisplayConfig;
pub use key_bindings::KeyBindings;
pub use log_config::LogConfig;
pub use main_config::{get_config_manager, Config, SimoneConfigManager};
pub use seed_config::SeedConfig;
