//! Sidebar collapsed/expanded preference.
//!
//! DESIGN
//! ======
//! The preference lives in two places: a marker class on `<body>` and a
//! string in `localStorage`. This type is the only place the two storage
//! strings are spelled out, so the value domain stays closed.

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// Visual state of the dashboard sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SidebarState {
    /// Sidebar visible. The page renders in this state until restored.
    #[default]
    Expanded,
    /// Sidebar hidden; the marker class is present on the root container.
    Collapsed,
}

/// Error returned when a string is not one of the two stored values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sidebar state: {0:?}")]
pub struct ParseSidebarStateError(pub String);

impl SidebarState {
    /// Value written to storage.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }

    /// Interpret a value read back from storage.
    ///
    /// Only an exact `"collapsed"` restores the collapsed state. Anything
    /// else, including a missing entry, yields the default.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }

    /// State implied by the presence of the marker class.
    pub const fn from_marker(present: bool) -> Self {
        if present { Self::Collapsed } else { Self::Expanded }
    }

    pub const fn is_collapsed(self) -> bool {
        matches!(self, Self::Collapsed)
    }
}

impl fmt::Display for SidebarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SidebarState {
    type Err = ParseSidebarStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expanded" => Ok(Self::Expanded),
            "collapsed" => Ok(Self::Collapsed),
            other => Err(ParseSidebarStateError(other.to_owned())),
        }
    }
}
