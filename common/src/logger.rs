use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

enum LogSink {
    Stderr,
    File(Mutex<File>),
}

pub struct Logger {
    prefix: Option<String>,
    sink: LogSink,
}

impl Logger {
    fn new(prefix: Option<String>, sink: LogSink) -> Self {
        Self { prefix, sink }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let formatted = self.format_line(file, line, message);
        match &self.sink {
            LogSink::Stderr => eprintln!("{}", formatted),
            LogSink::File(file) => {
                if let Err(e) = write_to_file(file, &formatted) {
                    eprintln!("{}", formatted);
                    eprintln!("Log file write failed: {}", e);
                }
            }
        }
    }
}

fn write_to_file(file: &Mutex<File>, formatted: &str) -> Result<(), String> {
    let mut file = file
        .lock()
        .map_err(|_| "log file lock is poisoned".to_string())?;
    writeln!(file, "{}", formatted).map_err(|e| e.to_string())
}

/// Log lines go to `log_file` when given, otherwise to stderr, keeping stdout for the board.
pub fn init_logger(prefix: Option<String>, log_file: Option<&str>) -> Result<(), String> {
    let sink = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Failed to open log file {}: {}", path, e))?;
            LogSink::File(Mutex::new(file))
        }
        None => LogSink::Stderr,
    };
    LOGGER.get_or_init(|| Logger::new(prefix, sink));
    Ok(())
}

/// Messages logged before `init_logger` are dropped.
pub fn log(file: &str, line: u32, message: &str) {
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
    fn test_format_line_strips_directories() {
        let logger = Logger::new(Some("Client".to_string()), LogSink::Stderr);
        let line = logger.format_line("src/games/tictactoe/session.rs", 12, "hello");
        assert!(line.ends_with("[Client][session.rs:12] hello"));
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None, LogSink::Stderr);
        let line = logger.format_line("C:\\src\\main.rs", 3, "msg");
        assert!(line.ends_with("[main.rs:3] msg"));
    }

    fn temp_log_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("tictactoe_logger_test_{}.log", random_number))
    }

    #[test]
    fn test_write_to_file_appends_line() {
        let path = temp_log_path();
        let file = Mutex::new(File::create(&path).unwrap());

        assert!(write_to_file(&file, "first").is_ok());
        assert!(write_to_file(&file, "second").is_ok());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_to_file_reports_poisoned_lock() {
        let path = temp_log_path();
        let file = Mutex::new(File::create(&path).unwrap());

        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = file.lock().unwrap();
            panic!("poison the log file lock");
        }));
        assert!(file.is_poisoned());

        assert!(write_to_file(&file, "lost").is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_to_file_reports_io_error() {
        let path = temp_log_path();
        File::create(&path).unwrap();
        let read_only = Mutex::new(File::open(&path).unwrap());

        assert!(write_to_file(&read_only, "lost").is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_failed_file_write_falls_back_to_stderr() {
        let path = temp_log_path();
        File::create(&path).unwrap();
        let logger = Logger::new(None, LogSink::File(Mutex::new(File::open(&path).unwrap())));

        logger.log("logger.rs", 1, "still visible");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
        let _ = std::fs::remove_file(&path);
    }
}
