/// UI events targeted at an element by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Element was clicked.
    Click { target: String },
    /// Form control value changed (e.g. a `select` option was picked).
    Change { target: String, value: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: target.into(),
        }
    }

    pub fn change(target: impl Into<String>, value: impl Into<String>) -> Self {
        Event::Change {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Id of the element the event is targeted at.
    pub fn target(&self) -> &str {
        match self {
            Event::Click { target } | Event::Change { target, .. } => target,
        }
    }
}
