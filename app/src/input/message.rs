use once_cell::sync::Lazy;
use regex::Regex;

// A quoted run (quotes stripped) or a bare run of non-whitespace.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)"|(\S+)"#).expect("token regex is valid"));

/// One incoming message: a selector followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub selector: String,
    pub args: Vec<String>,
}

impl Message {
    pub fn new(selector: impl Into<String>, args: Vec<String>) -> Self {
        Self { selector: selector.into(), args }
    }

    /// Parse a message line. Blank lines and `#` comments yield `None`.
    /// A trailing `;` (message terminator) is dropped.
    pub fn parse(line: &str) -> Option<Message> {
        let line = line.trim();
        let line = line.strip_suffix(';').unwrap_or(line).trim_end();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let mut tokens = TOKEN_RE.captures_iter(line).filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_string())
        });
        let selector = tokens.next()?;
        Some(Message { selector, args: tokens.collect() })
    }
}
