use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    file: Option<Mutex<File>>,
}

impl Logger {
    fn new(prefix: Option<String>, file: Option<File>) -> Self {
        Self {
            prefix,
            file: file.map(Mutex::new),
        }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let formatted = self.format_line(file, line, message);
        println!("{}", formatted);

        if let Some(ref log_file) = self.file
            && let Ok(mut log_file) = log_file.lock()
            && let Err(e) = writeln!(log_file, "{}", formatted)
        {
            eprintln!("Failed to write log file: {}", e);
        }
    }
}

/// Installs the process-wide logger. Only the first call has an effect.
///
/// When `log_file` is given, every line is also appended to that file.
pub fn init_logger(prefix: Option<String>, log_file: Option<&str>) -> Result<(), String> {
    let file = match log_file {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Failed to open log file {}: {}", path, e))?,
        ),
        None => None,
    };

    LOGGER.get_or_init(|| Logger::new(prefix, file));
    Ok(())
}

pub fn log(file: &str, line: u32, message: &str) {
    // Dropped until a binary calls init_logger.
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories_and_adds_prefix() {
        let logger = Logger::new(Some("Game".to_string()), None);
        let line = logger.format_line("common/src/games/simone/session.rs", 42, "level up");
        assert!(line.ends_with("[Game][session.rs:42] level up"));
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None, None);
        let line = logger.format_line("C:\\work\\main.rs", 7, "hello");
        assert!(line.ends_with("[main.rs:7] hello"));
        assert!(!line.contains("work"));
    }

    #[test]
    fn test_lines_are_appended_to_the_log_file() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("simone_log_test_{}.log", random_number));

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();
        let logger = Logger::new(Some("Test".to_string()), Some(file));
        logger.log("session.rs", 1, "first");
        logger.log("session.rs", 2, "second");

        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[Test][session.rs:1] first"));
        assert!(lines[1].ends_with("[Test][session.rs:2] second"));
    }
}
