//! Logging setup and helpers for keeping player input on a single log line.
//!
//! The game owns the terminal, so when a log file is configured every record
//! goes to that file and nothing is written to stderr.

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Arc, Mutex};

use log::LevelFilter;

use crate::config::LoggingConfig;

/// Longest slice of raw input copied into a log line.
const MAX_PREVIEW: usize = 120;

/// Escape a string for single-line logging.
///
/// Newlines, carriage returns, tabs and backslashes become their escaped
/// forms, other control characters become `\xNN`. Long input is cut at
/// [`MAX_PREVIEW`] characters with an ellipsis.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Pick the log level: `-v` flags win over the configured level.
pub fn level_for(config: Option<&LoggingConfig>, verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => config
            .and_then(|c| c.level.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info),
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// One timestamped log line.
pub fn format_line(level: log::Level, args: &std::fmt::Arguments<'_>) -> String {
    let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!("{} [{}] {}", ts, level, args)
}

/// Install the global logger.
///
/// With a log file configured, records are appended to it only. If the file
/// cannot be opened, or the path is empty, records go to stderr. Calling this
/// twice is harmless.
pub fn init_logging(config: Option<&LoggingConfig>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(config, verbosity));

    let file = config
        .and_then(|c| c.file.as_deref())
        .filter(|path| !path.is_empty())
        .and_then(|path| OpenOptions::new().create(true).append(true).open(path).ok());

    match file {
        Some(f) => {
            let sink = Arc::new(Mutex::new(f));
            builder.format(move |_fmt, record| {
                let line = format_line(record.level(), record.args());
                if let Ok(mut guard) = sink.lock() {
                    writeln!(guard, "{}", line)?;
                }
                Ok(())
            });
        }
        None => {
            builder.format(|fmt, record| {
                writeln!(fmt, "{}", format_line(record.level(), record.args()))
            });
        }
    }
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_control_characters() {
        assert_eq!(escape_log("rope\r\n"), "rope\\r\\n");
        assert_eq!(escape_log("a\tb\\c"), "a\\tb\\\\c");
        assert_eq!(escape_log("\u{7}"), "\\x07");
    }

    #[test]
    fn truncates_long_input() {
        let long = "y".repeat(MAX_PREVIEW + 10);
        let esc = escape_log(&long);
        assert!(esc.ends_with('…'));
        assert_eq!(esc.chars().count(), MAX_PREVIEW + 1);
    }

    #[test]
    fn verbosity_overrides_config_level() {
        let cfg = LoggingConfig {
            level: "warn".to_string(),
            file: None,
        };
        assert_eq!(level_for(Some(&cfg), 0), LevelFilter::Warn);
        assert_eq!(level_for(Some(&cfg), 1), LevelFilter::Debug);
        assert_eq!(level_for(Some(&cfg), 3), LevelFilter::Trace);
        assert_eq!(level_for(None, 0), LevelFilter::Info);
    }

    #[test]
    fn bad_level_falls_back_to_info() {
        let cfg = LoggingConfig {
            level: "chatty".to_string(),
            file: None,
        };
        assert_eq!(level_for(Some(&cfg), 0), LevelFilter::Info);
    }

    #[test]
    fn lines_carry_level_and_message() {
        let line = format_line(log::Level::Warn, &format_args!("gold {}", 5));
        assert!(line.ends_with("[WARN] gold 5"), "got: {}", line);
    }
}
