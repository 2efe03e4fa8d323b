use crate::IniError;

/// An event produced by the `.ini` parser for a single line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum IniEvent {
    /// A group header was parsed; contains the new active group name.
    Group(String),
    /// A key-value pair was parsed in the active group.
    Parameter {
        group: String,
        key: String,
        value: String,
    },
    /// A syntax error was encountered.
    Error(IniError),
}
