use crate::core::{Clock, DateRangeInput, RangeError, RangePolicy, ResolvedRange, StatusReporter};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const START_OF_DAY_SUFFIX: &str = "T00:00:00";
// Typed end dates stop at whole seconds; only the default end carries milliseconds.
const END_OF_DAY_SUFFIX: &str = "T23:59:59";

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| start_of_day(date))
}

/// First day of the default window, saturating at the earliest representable date.
pub fn default_start_date(today: NaiveDate, policy: &RangePolicy) -> NaiveDate {
    let days = Days::new(policy.lookback_days.max(0).unsigned_abs());
    today.checked_sub_days(days).unwrap_or(NaiveDate::MIN)
}

// chrono alone tolerates short fields, signs and leading blanks.
fn has_date_shape(text: &str) -> bool {
    static SHAPE: OnceLock<Option<Regex>> = OnceLock::new();
    SHAPE
        .get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(text))
}

fn parse_bound(text: &str, suffix: &str) -> Result<NaiveDateTime, RangeError> {
    if !has_date_shape(text) {
        tracing::debug!("Rejected date text '{}': not YYYY-MM-DD", text);
        return Err(RangeError::InvalidDate);
    }

    let stamped = format!("{}{}", text, suffix);
    NaiveDateTime::parse_from_str(&stamped, "%Y-%m-%dT%H:%M:%S").map_err(|e| {
        tracing::debug!("Rejected date text '{}': {}", text, e);
        RangeError::InvalidDate
    })
}

/// Resolve a range without reporting failures anywhere.
pub fn resolve_bounds(
    input: &DateRangeInput,
    today: NaiveDate,
    policy: &RangePolicy,
) -> Result<ResolvedRange, RangeError> {
    let start = match input.start() {
        Some(text) => parse_bound(text, START_OF_DAY_SUFFIX),
        None => Ok(start_of_day(default_start_date(today, policy))),
    };
    let end = match input.end() {
        Some(text) => parse_bound(text, END_OF_DAY_SUFFIX),
        None => Ok(end_of_day(today)),
    };

    ResolvedRange::new(start?, end?)
}

pub struct DateRangeResolver<C: Clock, R: StatusReporter> {
    clock: C,
    reporter: R,
    policy: RangePolicy,
}

impl<C: Clock, R: StatusReporter> DateRangeResolver<C, R> {
    pub fn new(clock: C, reporter: R) -> Self {
        Self::with_policy(clock, reporter, RangePolicy::default())
    }

    pub fn with_policy(clock: C, reporter: R, policy: RangePolicy) -> Self {
        Self {
            clock,
            reporter,
            policy,
        }
    }

    pub fn policy(&self) -> &RangePolicy {
        &self.policy
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Resolve the effective range, sending any failure to the status reporter.
    pub fn resolve(&self, input: &DateRangeInput) -> Result<ResolvedRange, RangeError> {
        let today = self.clock.today();
        match resolve_bounds(input, today, &self.policy) {
            Ok(range) => {
                tracing::debug!("Resolved range {} .. {}", range.start(), range.end());
                Ok(range)
            }
            Err(e) => {
                tracing::warn!("Date range rejected: {}", e);
                self.reporter.report(&e.to_string(), true);
                Err(e)
            }
        }
    }
}
