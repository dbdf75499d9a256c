use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum LogLevel {
    Info(Color),
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
        }
    }
}

/// Writes timestamped log lines to a per-tower file, optionally mirrored to
/// the console with ANSI colors.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
}

impl Logger {
    /// Creates a new `Logger` instance.
    ///
    /// # Parameters
    /// - `log_dir`: Directory for the log file; created if it does not exist.
    /// - `name`: The tower name used in the log file name.
    ///
    /// # Returns
    /// A new `Logger` appending to `tower_<name>.log`.
    pub fn new(log_dir: &Path, name: &str) -> Result<Self, LoggerError> {
        fs::create_dir_all(log_dir).map_err(LoggerError::from)?;

        let sanitized = name.replace(' ', "_").replace(':', "_");
        let log_file = log_dir.join(format!("tower_{}.log", sanitized));

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .map_err(LoggerError::from)?;

        Ok(Logger { log_file })
    }

    // Generic method for writing log messages
    fn log(&self, level: LogLevel, message: &str, to_console: bool) -> Result<(), LoggerError> {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let log_message = match &level {
            LogLevel::Info(_) => format!("[INFO] [{}]: {}\n", timestamp, message),
            LogLevel::Warn => format!("[WARN] [{}]: {}\n", timestamp, message),
            LogLevel::Error => format!("[ERROR] [{}]: {}\n", timestamp, message),
        };

        // If logging to console, apply colors
        if to_console {
            let colored_message = match &level {
                LogLevel::Info(color) => format!("{}{}\x1b[0m", color.to_ansi_code(), log_message),
                LogLevel::Warn => format!("\x1b[93m{}\x1b[0m", log_message), // Bright Yellow
                LogLevel::Error => format!("\x1b[91m{}\x1b[0m", log_message), // Bright Red
            };
            print!("{}", colored_message);
            io::stdout().flush().map_err(LoggerError::from)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .map_err(LoggerError::from)?;
        file.write_all(log_message.as_bytes())
            .map_err(LoggerError::from)?;
        file.flush().map_err(LoggerError::from)?;

        Ok(())
    }

    /// Logs an informational message.
    ///
    /// # Parameters
    /// - `message`: The informational message to log.
    /// - `color`: The color to use for the console output.
    /// - `to_console`: Whether to log the message to the console as well.
    pub fn info(&self, message: &str, color: Color, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Info(color), message, to_console)
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Warn, message, to_console)
    }

    /// Logs an error message.
    pub fn error(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, message, to_console)
    }
}

#[derive(Debug)]
pub enum LoggerError {
    IoError(std::io::Error),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    #[test]
    fn test_logger_creation_and_logging() {
        let log_dir = Path::new("/tmp/control_tower_logger_tests");
        let name = "main";
        let logger = Logger::new(log_dir, name).expect("Failed to create logger");

        let message = "Flight FL001 took off.";
        logger
            .info(message, Color::Green, false)
            .expect("Failed to log message");

        let log_file_path = log_dir.join(format!("tower_{}.log", name));
        let log_contents = fs::read_to_string(&log_file_path).expect("Failed to read log file");

        assert!(log_contents.contains("[INFO]"), "INFO level missing in log");
        assert!(log_contents.contains(message), "Logged message missing");

        fs::remove_dir_all(log_dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_missing_directory_is_created() {
        let log_dir = Path::new("/tmp/control_tower_logger_tests_created/nested");
        let logger = Logger::new(log_dir, "tower one");
        assert!(logger.is_ok(), "Logger should create the directory");
        assert!(log_dir.join("tower_tower_one.log").exists());

        fs::remove_dir_all("/tmp/control_tower_logger_tests_created")
            .expect("Failed to remove test directory");
    }
}
