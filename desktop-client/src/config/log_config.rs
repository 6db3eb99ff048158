use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    pub prefix: Option<String>,
    /// Lines are appended to this file as well as printed.
    pub file: Option<String>,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(file) = &self.file
            && file.trim().is_empty()
        {
            return Err("log file must not be empty".to_string());
        }
        Ok(())
    }
}
