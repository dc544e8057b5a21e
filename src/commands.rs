// * Chat command surface.
// * Parses message text and turns engine outcomes into user-facing replies.

use chrono::{DateTime, Utc};
use chrono_tz::Asia::Tokyo;
use tracing::{info, warn};

use crate::engine::assembler::{CycleSummary, ReportAssembler};
use crate::engine::resolver::ResolveError;
use crate::error::ScoutError;

pub const GW_PREFIX: &str = "$gw";
pub const HELP_PREFIX: &str = "$help";
pub const TIME_PREFIX: &str = "$time";

pub const HELP_TEXT: &str = "```\n\
You know how this goes:\n\
\t- $help: Show this message.\n\
\t- $gw <crew_name>: Retrieves past performances of the specified crew in GW.\n\
\t- $time: Display the current date and time in Japan.\n\
```";
pub const MISSING_NAME_REPLY: &str = "Please input a crew's name.";
pub const NOT_FOUND_REPLY: &str = "Crew not found.";
pub const FAILURE_REPLY: &str = "Sorry, something went wrong.";

// * Day is space padded, e.g. "Tue Jan  2 2024 00:04:05"
const JAPAN_TIME_FORMAT: &str = "%a %b %e %Y %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Time,
    /// Crew name, possibly empty
    Gw(String),
}

impl Command {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if strip_command(text, HELP_PREFIX).is_some() {
            return Some(Command::Help);
        }
        if strip_command(text, TIME_PREFIX).is_some() {
            return Some(Command::Time);
        }
        strip_command(text, GW_PREFIX).map(|rest| Command::Gw(rest.trim().to_string()))
    }
}

// * The prefix must be followed by whitespace or nothing, so "$gwx" is not "$gw"
fn strip_command<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(prefix)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest),
        Some(_) => None,
    }
}

/// Reply to `$time` for the given instant.
pub fn japan_time_reply(now: DateTime<Utc>) -> String {
    let local = now.with_timezone(&Tokyo);
    format!("It is `{}` in Japan right now.", local.format(JAPAN_TIME_FORMAT))
}

pub struct CommandHandler {
    assembler: ReportAssembler,
}

impl CommandHandler {
    pub fn new(assembler: ReportAssembler) -> Self {
        Self { assembler }
    }

    /// Handles one message. Returns the cycle summary when a report ran.
    /// Only a failure to deliver the reply itself is an error.
    pub async fn handle(&self, text: &str) -> Result<Option<CycleSummary>, ScoutError> {
        let Some(command) = Command::parse(text) else {
            return Ok(None);
        };
        let sink = self.assembler.sink();

        match command {
            Command::Help => sink.send_text(HELP_TEXT).await?,
            Command::Time => sink.send_text(&japan_time_reply(Utc::now())).await?,
            Command::Gw(name) if name.is_empty() => sink.send_text(MISSING_NAME_REPLY).await?,
            Command::Gw(name) => {
                info!(crew = %name, "Running GW report");
                match self.assembler.run(&name).await {
                    Ok(summary) => return Ok(Some(summary)),
                    Err(ResolveError::NotFound(_)) => sink.send_text(NOT_FOUND_REPLY).await?,
                    Err(e) => {
                        warn!(crew = %name, error = %e, "GW report failed");
                        sink.send_text(FAILURE_REPLY).await?
                    }
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gw_with_name() {
        assert_eq!(
            Command::parse("  $gw   Blue Knights  "),
            Some(Command::Gw("Blue Knights".to_string()))
        );
    }

    #[test]
    fn test_parse_gw_without_name() {
        assert_eq!(Command::parse("$gw"), Some(Command::Gw(String::new())));
        assert_eq!(Command::parse("$gw   "), Some(Command::Gw(String::new())));
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(Command::parse("$help"), Some(Command::Help));
        assert_eq!(Command::parse("$help me"), Some(Command::Help));
    }

    #[test]
    fn test_parse_rejects_other_text() {
        assert_eq!(Command::parse("hello"), None);
        assert_eq!(Command::parse("$gwfoo"), None);
        assert_eq!(Command::parse("$spark"), None);
        assert_eq!(Command::parse("$timezone"), None);
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(Command::parse("$time"), Some(Command::Time));
        assert_eq!(Command::parse("  $time please "), Some(Command::Time));
    }

    #[test]
    fn test_japan_time_reply_is_nine_hours_ahead() {
        let now = "2024-01-01T15:04:05Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(
            japan_time_reply(now),
            "It is `Tue Jan  2 2024 00:04:05` in Japan right now."
        );
    }

    #[test]
    fn test_help_lists_time() {
        assert!(HELP_TEXT.contains("$time"));
    }
}
