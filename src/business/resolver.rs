//! Display value resolver
//!
//! Maps a tri-state flag (absent, true, false) to its display label.
//! The mapping is total and pure: every flag has exactly one label.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A flag with three states: no value, true, or false
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriState {
    /// No value present
    #[default]
    Absent,
    /// Present and true
    True,
    /// Present and false
    False,
}

impl TriState {
    /// All three states, in resolver table order
    pub const ALL: [Self; 3] = [Self::Absent, Self::True, Self::False];

    /// Resolve this flag to its display value
    #[must_use]
    pub const fn display_value(self) -> DisplayValue {
        match self {
            Self::Absent => DisplayValue::Maybe,
            Self::True => DisplayValue::Yes,
            Self::False => DisplayValue::No,
        }
    }

    /// Convert back to an optional boolean
    #[must_use]
    pub const fn as_option(self) -> Option<bool> {
        match self {
            Self::Absent => None,
            Self::True => Some(true),
            Self::False => Some(false),
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            None => Self::Absent,
            Some(true) => Self::True,
            Some(false) => Self::False,
        }
    }
}

impl From<bool> for TriState {
    fn from(flag: bool) -> Self {
        Self::from(Some(flag))
    }
}

impl From<TriState> for Option<bool> {
    fn from(flag: TriState) -> Self {
        flag.as_option()
    }
}

/// The label shown for a tri-state flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayValue {
    /// Shown for an absent flag
    Maybe,
    /// Shown for a true flag
    Yes,
    /// Shown for a false flag
    No,
}

impl DisplayValue {
    /// All labels, in resolver table order
    pub const ALL: [Self; 3] = [Self::Maybe, Self::Yes, Self::No];

    /// The literal string for this label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Maybe => "maybe",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Business facade exposing the display value lookup
///
/// Holds no state; any number of copies may be used from any thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MyBusiness;

impl MyBusiness {
    /// Create a new business facade
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Get the display value for an optional boolean
    ///
    /// # Example
    /// ```
    /// use mybusiness::MyBusiness;
    ///
    /// let business = MyBusiness::new();
    /// assert_eq!(business.get_display_value(None), "maybe");
    /// assert_eq!(business.get_display_value(Some(true)), "yes");
    /// assert_eq!(business.get_display_value(Some(false)), "no");
    /// ```
    #[must_use]
    pub const fn get_display_value(self, flag: Option<bool>) -> &'static str {
        display_value(flag)
    }
}

/// Free-function form of [`MyBusiness::get_display_value`]
#[must_use]
pub const fn display_value(flag: Option<bool>) -> &'static str {
    let state = match flag {
        None => TriState::Absent,
        Some(true) => TriState::True,
        Some(false) => TriState::False,
    };
    state.display_value().as_str()
}
