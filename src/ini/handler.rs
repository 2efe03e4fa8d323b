use {
    crate::{IniError, IniErrorKind, IniEvent},
    std::collections::VecDeque,
};

/// Event handler for the [`.ini parser`](struct.IniParser.html).
pub trait IniHandler {
    /// Called when the parser encounters a syntax error at (1-based) `line`.
    ///
    /// Return `true` to continue parsing with the next line,
    /// `false` to stop parsing immediately.
    fn on_error(&mut self, line: u32, error: IniErrorKind) -> bool;

    /// Called for each parsed key-value pair in the active `group`
    /// (empty if no group header was parsed yet).
    ///
    /// Return `true` to continue parsing,
    /// `false` to stop parsing immediately and fail with
    /// [`Rejected`](enum.IniParseError.html#variant.Rejected).
    fn on_parameter(&mut self, group: &str, key: &str, value: &str) -> bool;

    /// Called when a group header was parsed and `group` became the active group.
    fn on_group(&mut self, _group: &str) {}
}

impl<H: IniHandler + ?Sized> IniHandler for &mut H {
    fn on_error(&mut self, line: u32, error: IniErrorKind) -> bool {
        (**self).on_error(line, error)
    }

    fn on_parameter(&mut self, group: &str, key: &str, value: &str) -> bool {
        (**self).on_parameter(group, key, value)
    }

    fn on_group(&mut self, group: &str) {
        (**self).on_group(group)
    }
}

/// [`Handler`](trait.IniHandler.html) which forwards the events to a pair of closures.
/// See [`handler_fn`](fn.handler_fn.html).
pub struct FnHandler<E, P> {
    on_error: E,
    on_parameter: P,
}

/// Creates an [`event handler`](trait.IniHandler.html) from the `on_error` and `on_parameter` closures.
pub fn handler_fn<E, P>(on_error: E, on_parameter: P) -> FnHandler<E, P>
where
    E: FnMut(u32, IniErrorKind) -> bool,
    P: FnMut(&str, &str, &str) -> bool,
{
    FnHandler {
        on_error,
        on_parameter,
    }
}

impl<E, P> IniHandler for FnHandler<E, P>
where
    E: FnMut(u32, IniErrorKind) -> bool,
    P: FnMut(&str, &str, &str) -> bool,
{
    fn on_error(&mut self, line: u32, error: IniErrorKind) -> bool {
        (self.on_error)(line, error)
    }

    fn on_parameter(&mut self, group: &str, key: &str, value: &str) -> bool {
        (self.on_parameter)(group, key, value)
    }
}

/// Buffers the events of the current line for the pull-style [`IniEvents`](struct.IniEvents.html) iterator.
/// Never stops the parser.
#[derive(Default)]
pub(crate) struct EventQueue(VecDeque<IniEvent>);

impl EventQueue {
    pub(crate) fn pop(&mut self) -> Option<IniEvent> {
        self.0.pop_front()
    }
}

impl IniHandler for EventQueue {
    fn on_error(&mut self, line: u32, error: IniErrorKind) -> bool {
        self.0.push_back(IniEvent::Error(IniError { line, error }));
        true
    }

    fn on_parameter(&mut self, group: &str, key: &str, value: &str) -> bool {
        self.0.push_back(IniEvent::Parameter {
            group: group.into(),
            key: key.into(),
            value: value.into(),
        });
        true
    }

    fn on_group(&mut self, group: &str) {
        self.0.push_back(IniEvent::Group(group.into()));
    }
}
