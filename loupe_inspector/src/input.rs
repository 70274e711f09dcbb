// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keys the inspector reacts to.

/// A key, reduced to the ones with a meaning in the inspector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Held for extended measurement.
    Shift,
    /// Clears both selections.
    Escape,
    /// Toggles the ruler.
    Backquote,
    /// Shows the primary selection in the side panel.
    Digit1,
    /// Shows the secondary selection in the side panel.
    Digit2,
    /// Anything else.
    Other,
}

impl Key {
    /// Maps a key name as reported by a keyboard event (`"Shift"`, `"Escape"`,
    /// `` "`" ``, `"1"`, `"2"`).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Shift" => Self::Shift,
            "Escape" => Self::Escape,
            "`" => Self::Backquote,
            "1" => Self::Digit1,
            "2" => Self::Digit2,
            _ => Self::Other,
        }
    }
}
