use once_cell::sync::OnceCell;
use regex::Regex;

use crate::error::Result;
use crate::models::LogEntry;

/// Access log line shape. Group 1 is the client IP, group 4 the request path
/// with the optional `http://example.net` host already stripped.
pub const LOG_PATTERN: &str =
    r#"^([0-9/.]+) [^ ]+ [^ ]+ (.*) "GET (http://example.net)?([^ ]+) .*""#;

static LOG_REGEX: OnceCell<Regex> = OnceCell::new();

/// Handle on the process-wide compiled pattern.
#[derive(Debug, Clone, Copy)]
pub struct LineParser {
    regex: &'static Regex,
}

impl LineParser {
    /// Compiles the pattern on first use. Every later call reuses it.
    pub fn new() -> Result<Self> {
        let regex = LOG_REGEX.get_or_try_init(|| Regex::new(LOG_PATTERN))?;
        Ok(LineParser { regex })
    }

    pub fn parse_log_line(&self, line: &str) -> Option<LogEntry> {
        let tokens = self.regex.captures(line)?;

        let ip = tokens.get(1)?.as_str().to_string();
        let path = tokens.get(4)?.as_str().to_string();

        Some(LogEntry { ip, path })
    }

    /// Like `parse_log_line`, but a line without the expected shape yields
    /// an entry with an empty ip and path.
    pub fn parse(&self, line: &str) -> LogEntry {
        self.parse_log_line(line).unwrap_or_default()
    }
}

pub fn parse(line: &str) -> Result<LogEntry> {
    Ok(LineParser::new()?.parse(line))
}
