mod fsm_state;

use {
    super::*,
    fsm_state::*,
    log::{debug, trace},
    std::io::{BufRead, Lines},
};

/// Persistent state used to communicate information between lines.
pub(super) struct IniParserPersistentState {
    // Current active group; empty before the first group header.
    pub group: String,
    // Current line number, 1-based; `0` before the first line was read.
    pub line: u32,
}

impl IniParserPersistentState {
    fn new() -> Self {
        Self {
            group: String::new(),
            line: 0,
        }
    }
}

/// Result of a [`parse`](struct.IniParser.html#method.parse) which did not fail.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IniParseOutcome {
    /// Reached the end of the source, possibly after recoverable syntax errors.
    Completed,
    /// The handler asked to stop after a syntax error at `line`; no further lines were read.
    Halted { line: u32 },
}

/// Parses the `.ini` config source line by line, using the user-provided parsing options
/// and reporting the parsed groups / parameters / errors
/// to the [`event handler`](trait.IniHandler.html) object or the [`event iterator`](struct.IniEvents.html).
pub struct IniParser<R> {
    /// Source line reader.
    reader: Lines<R>,
    /// Parsing options as provided by the user.
    options: IniOptions,
}

impl<'s> IniParser<&'s [u8]> {
    /// Creates a new [`parser`](struct.IniParser.html) from the `.ini` config `string`
    /// using default parsing options.
    pub fn new(string: &'s str) -> Self {
        Self::from_reader(string.as_bytes())
    }
}

impl<R: BufRead> IniParser<R> {
    /// Creates a new [`parser`](struct.IniParser.html) which reads the `.ini` config from the `reader`
    /// using default parsing options.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: reader.lines(),
            options: Default::default(),
        }
    }

    /// Sets whether unquoted values may contain whitespace.
    /// If `true`, an unquoted value extends to the comment delimiter (`';'`) / end of the line
    /// and is trimmed at both ends (`a = b c` -> `"b c"`).
    /// If `false`, an unquoted value ends at the first whitespace character
    /// and values must be quoted to contain whitespace (`a = "b c"`).
    ///
    /// Default: `true`.
    pub fn unquoted_spaces(mut self, unquoted_spaces: bool) -> Self {
        self.options.unquoted_spaces = unquoted_spaces;
        self
    }

    /// Consumes the parser and parses the `.ini` config, calling the methods on the passed `handler`.
    ///
    /// Returns [`Completed`](enum.IniParseOutcome.html#variant.Completed) if the end of the source was reached,
    /// or [`Halted`](enum.IniParseOutcome.html#variant.Halted) if the handler asked to stop after a syntax error.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`](enum.IniParseError.html#variant.Rejected) if the handler rejected a parameter,
    /// or [`Io`](enum.IniParseError.html#variant.Io) if a line could not be read.
    pub fn parse<H: IniHandler>(mut self, mut handler: H) -> Result<IniParseOutcome, IniParseError> {
        let options = self.options;
        let mut state = IniParserPersistentState::new();

        while let Some(line) = Self::next(&mut self.reader, &mut state)? {
            match parse_line(&line, &mut handler, &mut state, &options) {
                IniLineResult::Continue => {}
                IniLineResult::Halted => {
                    debug!("parsing halted after error at line {}", state.line);
                    return Ok(IniParseOutcome::Halted { line: state.line });
                }
                IniLineResult::Rejected => {
                    debug!("parameter rejected at line {}", state.line);
                    return Err(IniParseError::Rejected { line: state.line });
                }
            }
        }

        Ok(IniParseOutcome::Completed)
    }

    /// Consumes the parser and returns an iterator over the parsed events.
    /// Lines are read lazily; syntax errors are yielded as [`Error`](enum.IniEvent.html#variant.Error) events
    /// and never stop the iteration.
    pub fn events(self) -> IniEvents<R> {
        IniEvents {
            reader: self.reader,
            options: self.options,
            state: IniParserPersistentState::new(),
            queue: EventQueue::default(),
            done: false,
        }
    }

    /// Reads the next line from the source, incrementing the line counter.
    fn next(
        reader: &mut Lines<R>,
        state: &mut IniParserPersistentState,
    ) -> Result<Option<String>, IniParseError> {
        match reader.next() {
            Some(Ok(line)) => {
                state.line = state
                    .line
                    .checked_add(1)
                    .ok_or(IniParseError::TooManyLines)?;
                trace!("line {}: `{}`", state.line, line);
                Ok(Some(line))
            }
            Some(Err(source)) => Err(IniParseError::Io {
                line: state.line.saturating_add(1),
                source,
            }),
            None => Ok(None),
        }
    }
}

/// Pull-style iterator over the events of an `.ini` config.
/// See [`events`](struct.IniParser.html#method.events).
pub struct IniEvents<R> {
    reader: Lines<R>,
    options: IniOptions,
    state: IniParserPersistentState,
    // Events of the last parsed line not yet yielded.
    queue: EventQueue,
    // Set after a read error or the end of the source.
    done: bool,
}

impl<R: BufRead> Iterator for IniEvents<R> {
    type Item = Result<IniEvent, IniParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.queue.pop() {
                return Some(Ok(event));
            }

            if self.done {
                return None;
            }

            match IniParser::<R>::next(&mut self.reader, &mut self.state) {
                Ok(Some(line)) => {
                    // The queue never stops the parser.
                    let result = parse_line(&line, &mut self.queue, &mut self.state, &self.options);
                    debug_assert_eq!(result, IniLineResult::Continue);
                }
                Ok(None) => self.done = true,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
