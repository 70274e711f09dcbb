// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a screen description cannot be decoded at all.
///
/// Individual layers never produce this; it only covers text that is not JSON
/// or whose overall shape is wrong (for example `layers` being a string).
#[derive(Debug)]
pub struct ParseError {
    inner: serde_json::Error,
}

impl ParseError {
    /// Line of the offending input, starting at 1.
    #[must_use]
    pub fn line(&self) -> usize {
        self.inner.line()
    }

    /// Column of the offending input, starting at 1.
    #[must_use]
    pub fn column(&self) -> usize {
        self.inner.column()
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(inner: serde_json::Error) -> Self {
        Self { inner }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid screen description: {}", self.inner)
    }
}

impl core::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.inner)
    }
}
