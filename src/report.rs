//! One call that both logs a message and shows it to the user through the host's
//! report mechanism.

use crate::level::Level;
use crate::logger::Logger;
use std::borrow::Cow;
use std::fmt;

/// Severity vocabulary of the host's report call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Info,
    Warning,
    Error,
}

impl ReportKind {
    /// Tag the host expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl From<Level> for ReportKind {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug | Level::Info => Self::Info,
            Level::Warning => Self::Warning,
            Level::Error | Level::Critical => Self::Error,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host capability: something that can show a short message to the user,
/// typically the running operator.
pub trait Reporter {
    fn report(&self, kind: ReportKind, message: &str);

    /// Translation context for user-facing messages.
    fn translation_context(&self) -> &str {
        "*"
    }

    /// Hook for the host's translation lookup; messages are shown untranslated by default.
    fn translate<'a>(&self, msgid: &'a str, _msgctxt: &str) -> Cow<'a, str> {
        Cow::Borrowed(msgid)
    }
}

/// Replaces each `{key}` in `template` with its value from `args`. Unknown keys are
/// kept as written; `{{` and `}}` produce literal braces.
#[must_use]
pub fn format_message(template: &str, args: &[(&str, &dyn fmt::Display)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let Some(close) = tail.find('}') else {
            rest = tail;
            break;
        };
        let key = &tail[1..close];
        match args.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(&value.to_string()),
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Logs `message` at `level` and reports it to the user with the mapped
/// [`ReportKind`]. The log gets the untranslated text; the report gets the text
/// translated in the reporter's context. Both are formatted with `args`.
#[track_caller]
pub fn report_and_log(
    logger: &Logger,
    reporter: &dyn Reporter,
    level: Level,
    message: &str,
    args: &[(&str, &dyn fmt::Display)],
) {
    logger.log(level, &format_message(message, args));

    let translated = reporter.translate(message, reporter.translation_context());
    reporter.report(ReportKind::from(level), &format_message(&translated, args));
}
