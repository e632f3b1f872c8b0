//! Interaction signals raised against a watched field.

use std::fmt;

/// A named interaction signal on a text field.
///
/// These mirror the events a browser input raises while it is being edited:
/// `propertychange` (the legacy change notification), `keyup`, `input`,
/// `paste` and `cut`. Any one of them firing is a hint that the field's value
/// may have changed — the watcher re-checks the value on receipt rather than
/// trusting the signal itself, so spurious firings are harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSignal {
    /// Legacy property-change notification.
    PropertyChange,
    /// Key released while the field has focus.
    KeyUp,
    /// Generic input mutation.
    Input,
    /// Clipboard paste into the field.
    Paste,
    /// Clipboard cut from the field.
    Cut,
}

impl InputSignal {
    /// The full signal set a watcher binds to by default.
    pub const ALL: [InputSignal; 5] = [
        InputSignal::PropertyChange,
        InputSignal::KeyUp,
        InputSignal::Input,
        InputSignal::Paste,
        InputSignal::Cut,
    ];

    /// The event name as a browser would spell it.
    pub fn name(&self) -> &'static str {
        match self {
            InputSignal::PropertyChange => "propertychange",
            InputSignal::KeyUp => "keyup",
            InputSignal::Input => "input",
            InputSignal::Paste => "paste",
            InputSignal::Cut => "cut",
        }
    }
}

impl fmt::Display for InputSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_match_browser_spelling() {
        assert_eq!(InputSignal::PropertyChange.name(), "propertychange");
        assert_eq!(InputSignal::KeyUp.name(), "keyup");
        assert_eq!(InputSignal::Input.name(), "input");
        assert_eq!(InputSignal::Paste.name(), "paste");
        assert_eq!(InputSignal::Cut.name(), "cut");
    }

    #[test]
    fn test_all_is_complete_and_distinct() {
        let unique: HashSet<_> = InputSignal::ALL.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(InputSignal::KeyUp.to_string(), "keyup");
    }
}
