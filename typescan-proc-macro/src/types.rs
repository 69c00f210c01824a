//! Core types for the `scan!` macro.

/// Kind requested by the specifier inside a placeholder.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Specifier {
    /// `{}`: the kind comes from the target type.
    Inferred,
    /// `{%d}`
    Signed,
    /// `{%u}`
    Unsigned,
    /// `{%f}`
    Float,
    /// `{%s}`
    Text,
}

impl Specifier {
    /// Parses the text between `{` and `}`.
    pub fn parse(content: &str) -> Option<Self> {
        match content {
            "" => Some(Self::Inferred),
            "%d" => Some(Self::Signed),
            "%u" => Some(Self::Unsigned),
            "%f" => Some(Self::Float),
            "%s" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inferred => "",
            Self::Signed => "%d",
            Self::Unsigned => "%u",
            Self::Float => "%f",
            Self::Text => "%s",
        }
    }
}

/// Token of a tokenized format string.
///
/// Only lives during macro expansion; the generated code re-tokenizes the
/// format at run time.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FormatToken {
    /// A literal text segment that must be found in the input.
    Text(Box<str>),

    /// A placeholder that captures a value from the input.
    Placeholder(Specifier),
}
