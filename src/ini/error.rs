use std::io;

/// A syntax error in a single line of the `.ini` source.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum IniErrorKind {
    /// Empty or malformed group name in a `[...]` header.
    #[error("Invalid group name")]
    InvalidGroupName,
    /// Group name not followed by a group end delimiter (`']'`).
    #[error("Group name is not closed")]
    UnclosedGroup,
    /// Empty or malformed key before the key-value separator.
    #[error("Parameter name is invalid")]
    InvalidParameterName,
    /// Key not followed by a key-value separator (`'='`).
    #[error("Equal sign expected")]
    MissingEquals,
    /// Malformed value, e.g. an unterminated quoted string.
    #[error("Parameter value is invalid")]
    InvalidParameterValue,
    /// Non-comment characters following a group header or a value.
    #[error("Unexpected characters at the end of the line")]
    TrailingGarbage,
}

/// A syntax error reported by the `.ini` parser.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
#[error("INI parse error. Line: {line}. {error}")]
pub struct IniError {
    /// Line in the source where the error occured (1-based).
    pub line: u32,
    /// Actual error.
    pub error: IniErrorKind,
}

/// An error which stopped the `.ini` parser before the end of the source.
#[derive(Debug, thiserror::Error)]
pub enum IniParseError {
    /// The handler rejected a parameter; no further lines were read.
    #[error("INI parse rejected by handler. Line: {line}.")]
    Rejected { line: u32 },
    /// The source has more lines than the line counter can number.
    #[error("INI source exceeds {} lines.", u32::MAX)]
    TooManyLines,
    /// Failed to read a line from the source (including invalid UTF-8).
    #[error("INI read error. Line: {line}.")]
    Io {
        line: u32,
        #[source]
        source: io::Error,
    },
}

impl IniParseError {
    /// Returns the line at which parsing stopped.
    pub fn line(&self) -> u32 {
        match self {
            IniParseError::Rejected { line } | IniParseError::Io { line, .. } => *line,
            IniParseError::TooManyLines => u32::MAX,
        }
    }
}
