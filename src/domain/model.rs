use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SHOW_LABEL: &str = "Show advanced date range";
pub const HIDE_LABEL: &str = "Hide advanced date range";

/// Visibility of the advanced date range section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityState {
    #[default]
    Hidden,
    Shown,
}

impl VisibilityState {
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            VisibilityState::Hidden
        } else {
            VisibilityState::Shown
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            VisibilityState::Hidden => VisibilityState::Shown,
            VisibilityState::Shown => VisibilityState::Hidden,
        }
    }

    pub fn is_open(self) -> bool {
        self == VisibilityState::Shown
    }

    /// Label for the control that flips the section out of this state.
    pub fn label(self) -> &'static str {
        match self {
            VisibilityState::Shown => HIDE_LABEL,
            VisibilityState::Hidden => SHOW_LABEL,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeInput {
    pub start_text: Option<String>,
    pub end_text: Option<String>,
}

impl DateRangeInput {
    pub fn new(start_text: Option<&str>, end_text: Option<&str>) -> Self {
        Self {
            start_text: start_text.map(str::to_string),
            end_text: end_text.map(str::to_string),
        }
    }

    /// Start text, with the empty string treated as absent.
    pub fn start(&self) -> Option<&str> {
        self.start_text.as_deref().filter(|s| !s.is_empty())
    }

    pub fn end(&self) -> Option<&str> {
        self.end_text.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid date range. Please use valid dates.")]
    InvalidDate,

    #[error("Start date must be on or before the end date.")]
    OrderingViolation,
}

/// A validated range of local wall-clock instants with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl ResolvedRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::OrderingViolation);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Start in the host's system zone, not the injected clock's offset.
    pub fn start_local(&self) -> DateTime<Local> {
        to_local(self.start)
    }

    /// End in the host's system zone, not the injected clock's offset.
    pub fn end_local(&self) -> DateTime<Local> {
        to_local(self.end)
    }
}

// Wall times inside a DST gap have no local mapping; fall back to reading them as UTC.
fn to_local(naive: NaiveDateTime) -> DateTime<Local> {
    let result = Local.from_local_datetime(&naive);
    result
        .earliest()
        .or_else(|| result.latest())
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangePolicy {
    pub lookback_days: i64,
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self { lookback_days: 14 }
    }
}
