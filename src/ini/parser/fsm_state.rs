use {super::*, log::debug};

/// `.ini` line parser FSM states.
/// The FSM is reset to `Init` at the start of each line and always reaches `Done` (or stops with an error)
/// before the next line is read.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum IniParserFSMState {
    /// We started parsing a new line.
    /// Skip whitespace,
    /// finish on the end of the line or a comment delimiter (`';'`) (-> Done),
    /// accept group start delimiters (`'['`) (-> Group),
    /// everything else starts a key (-> Param).
    Init,
    /// We encountered a group start delimiter (`'['`).
    /// Parse the group name up to the group end delimiter (`']'`) (-> End).
    Group,
    /// We encountered the start of a key.
    /// Parse the key, the key-value separator (`'='`) and the (maybe quoted, maybe empty) value (-> End).
    Param,
    /// We finished parsing a group name or a value.
    /// Accept whitespace,
    /// the end of the line or a comment delimiter (`';'`) (-> Done).
    End,
    /// We finished parsing the line.
    Done,
}

/// Reason the FSM stopped processing the line early.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum IniLineError {
    /// Syntax error - reported to the handler, which decides whether to continue with the next line.
    Syntax(IniErrorKind),
    /// The handler rejected the parsed parameter.
    Rejected,
}

/// What the driver must do after the line was processed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum IniLineResult {
    /// Read the next line.
    Continue,
    /// The handler asked to stop after a syntax error.
    Halted,
    /// The handler rejected a parameter.
    Rejected,
}

impl IniParserFSMState {
    /// Processes the `line` starting at byte offset `pos`, advancing it.
    /// Returns the new parser state or an error.
    pub(super) fn process<H: IniHandler>(
        self,
        line: &str,
        pos: &mut usize,
        handler: &mut H,
        state: &mut IniParserPersistentState,
        options: &IniOptions,
    ) -> Result<IniParserFSMState, IniLineError> {
        use IniErrorKind::*;

        Ok(match self {
            IniParserFSMState::Init => {
                let (c, new_pos) = skip_space(line, *pos);
                *pos = new_pos;

                match c {
                    // Blank line or line comment.
                    None | Some(COMMENT) => IniParserFSMState::Done,
                    Some(GROUP_START) => IniParserFSMState::Group,
                    Some(_) => IniParserFSMState::Param,
                }
            }
            IniParserFSMState::Group => {
                debug_assert!(line[*pos..].starts_with(GROUP_START));

                let (c, new_pos) = skip_space(line, *pos + GROUP_START.len_utf8());
                *pos = new_pos;

                if c.is_none() {
                    return Err(IniLineError::Syntax(InvalidGroupName));
                }

                let (group, new_pos) = extract_token(line, *pos, GROUP_END, GROUP_NAME);
                *pos = new_pos;

                let group = group.ok_or(IniLineError::Syntax(InvalidGroupName))?;

                let (c, new_pos) = skip_space(line, *pos);
                *pos = new_pos;

                if c != Some(GROUP_END) {
                    return Err(IniLineError::Syntax(UnclosedGroup));
                }

                *pos += GROUP_END.len_utf8();

                debug!("line {}: group `{}`", state.line, group);

                state.group.clear();
                state.group.push_str(group);

                handler.on_group(&state.group);

                IniParserFSMState::End
            }
            IniParserFSMState::Param => {
                let (key, new_pos) = extract_token(line, *pos, KEY_VALUE_SEPARATOR, KEY);
                *pos = new_pos;

                let key = key.ok_or(IniLineError::Syntax(InvalidParameterName))?;

                let (c, new_pos) = skip_space(line, *pos);
                *pos = new_pos;

                if c != Some(KEY_VALUE_SEPARATOR) {
                    return Err(IniLineError::Syntax(MissingEquals));
                }

                let (c, new_pos) = skip_space(line, *pos + KEY_VALUE_SEPARATOR.len_utf8());
                *pos = new_pos;

                let value = if c.is_none() {
                    ""
                } else {
                    let (value, new_pos) =
                        extract_token(line, *pos, STRING_QUOTE, options.value_token());
                    *pos = new_pos;

                    value.ok_or(IniLineError::Syntax(InvalidParameterValue))?
                };

                debug!(
                    "line {}: parameter `{}`.`{}` = `{}`",
                    state.line, state.group, key, value
                );

                if !handler.on_parameter(&state.group, key, value) {
                    return Err(IniLineError::Rejected);
                }

                IniParserFSMState::End
            }
            IniParserFSMState::End => {
                let (c, new_pos) = skip_space(line, *pos);
                *pos = new_pos;

                match c {
                    None | Some(COMMENT) => IniParserFSMState::Done,
                    Some(_) => return Err(IniLineError::Syntax(TrailingGarbage)),
                }
            }
            IniParserFSMState::Done => self,
        })
    }
}

/// Runs the FSM over a single `line`, reporting the events to the `handler`.
pub(super) fn parse_line<H: IniHandler>(
    line: &str,
    handler: &mut H,
    state: &mut IniParserPersistentState,
    options: &IniOptions,
) -> IniLineResult {
    let mut fsm_state = IniParserFSMState::Init;
    let mut pos = 0;

    while fsm_state != IniParserFSMState::Done {
        fsm_state = match fsm_state.process(line, &mut pos, handler, state, options) {
            Ok(fsm_state) => fsm_state,
            Err(IniLineError::Syntax(error)) => {
                debug!("line {}, column {}: {}", state.line, pos + 1, error);

                return if handler.on_error(state.line, error) {
                    IniLineResult::Continue
                } else {
                    IniLineResult::Halted
                };
            }
            Err(IniLineError::Rejected) => return IniLineResult::Rejected,
        };
    }

    IniLineResult::Continue
}

const GROUP_START: char = '[';
const GROUP_END: char = ']';
const KEY_VALUE_SEPARATOR: char = '=';
const STRING_QUOTE: char = '"';

/// Group names may contain inner spaces; quotes are not special.
const GROUP_NAME: TokenOptions = TokenOptions {
    allow_space: true,
    quote: false,
    allow_empty: false,
    stop_at_comment: false,
};

/// Keys may contain inner spaces; quotes are not special.
const KEY: TokenOptions = GROUP_NAME;

impl IniOptions {
    /// Value token options; values may be quoted, empty, and followed by an inline comment.
    fn value_token(&self) -> TokenOptions {
        TokenOptions {
            allow_space: self.unquoted_spaces,
            quote: true,
            allow_empty: true,
            stop_at_comment: true,
        }
    }
}
