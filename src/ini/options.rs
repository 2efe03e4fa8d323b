/// Configuration options for the `.ini` parser.
#[derive(Clone, Copy, Debug)]
pub(crate) struct IniOptions {
    /// Whether unquoted values may contain whitespace.
    /// If `true`, an unquoted value extends to the comment delimiter / end of the line
    /// and is trimmed at both ends.
    /// If `false`, an unquoted value ends at the first whitespace character,
    /// so values must be quoted to contain whitespace.
    ///
    /// Default: `true`.
    pub(crate) unquoted_spaces: bool,
}

impl Default for IniOptions {
    fn default() -> Self {
        Self {
            unquoted_spaces: true,
        }
    }
}
