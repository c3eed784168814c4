//! Console and file lines carry different columns: the console omits the timestamp
//! that the file needs for later analysis. Templates keep that a matter of configuration
//! instead of two hardcoded renderers.

/// Closed set of known substitution tokens: unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Level,
    Timestamp,
    Name,
    Location,
    Msg,
}

impl Placeholder {
    /// Template parsing needs to match brace-delimited names against known placeholders.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Timestamp => "timestamp",
            Self::Name => "name",
            Self::Location => "location",
            Self::Msg => "msg",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Level,
        Self::Timestamp,
        Self::Name,
        Self::Location,
        Self::Msg,
    ];
}

/// Parsing into segments once avoids re-scanning the template on every log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Whitespace, separators, and unknown `{names}` pass through untouched.
    Literal(String),
    /// Known tokens are substituted with formatted values at render time.
    Placeholder(Placeholder),
}

/// Pre-parsed line template: parse once, render many.
#[derive(Debug, Clone)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// Console layout: `{level} {name} {location}: {msg}`.
    pub const CONSOLE: &'static str = "{level} {name} {location}: {msg}";
    /// File layout adds the timestamp column.
    pub const FILE: &'static str = "{level} {timestamp} {name} {location}: {msg}";

    /// Turns `"{level} {name}: {msg}"` into a segment list for fast repeated rendering.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|c| open + c) else {
                break;
            };
            current.push_str(&rest[..open]);
            let name = &rest[open + 1..close];

            match Self::match_placeholder(name) {
                Some(ph) => {
                    if !current.is_empty() {
                        segments.push(FormatSegment::Literal(std::mem::take(&mut current)));
                    }
                    segments.push(FormatSegment::Placeholder(ph));
                }
                None => current.push_str(&rest[open..=close]),
            }

            rest = &rest[close + 1..];
        }

        current.push_str(rest);
        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self { segments }
    }

    fn match_placeholder(name: &str) -> Option<Placeholder> {
        Placeholder::ALL
            .iter()
            .copied()
            .find(|ph| ph.as_str() == name)
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Substitutes formatted values into the pre-parsed segments: the hot path for every log line.
    #[must_use]
    pub fn render(&self, values: &FormatValues) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => {
                    let value = match ph {
                        Placeholder::Level => &values.level,
                        Placeholder::Timestamp => &values.timestamp,
                        Placeholder::Name => &values.name,
                        Placeholder::Location => &values.location,
                        Placeholder::Msg => &values.msg,
                    };
                    result.push_str(value);
                }
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse(Self::CONSOLE)
    }
}

/// Typed value bag ensures every placeholder has a corresponding field.
#[derive(Debug, Clone, Default)]
pub struct FormatValues {
    pub level: String,
    pub timestamp: String,
    pub name: String,
    pub location: String,
    pub msg: String,
}

impl FormatValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Level names are right-aligned to eight columns so messages line up.
    #[must_use]
    pub fn level(mut self, level: &str) -> Self {
        self.level = format!("{level:>8}");
        self
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Logger name, so lines from several add-ons sharing one console stay attributable.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Source location (`file:line`) of the logging call.
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }
}
