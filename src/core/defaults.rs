use crate::core::date_range::{default_start_date, DATE_FORMAT};
use crate::core::{Clock, DateControl, RangePolicy};

/// Default `(start, end)` texts for the date inputs, as `YYYY-MM-DD`.
pub fn default_date_texts(clock: &dyn Clock, policy: &RangePolicy) -> (String, String) {
    let today = clock.today();
    let start = default_start_date(today, policy);
    (
        start.format(DATE_FORMAT).to_string(),
        today.format(DATE_FORMAT).to_string(),
    )
}

/// Put the default window into whichever date controls are present and empty.
pub fn fill_defaults<D>(
    start: Option<&mut D>,
    end: Option<&mut D>,
    clock: &dyn Clock,
    policy: &RangePolicy,
) where
    D: DateControl + ?Sized,
{
    let (start_text, end_text) = default_date_texts(clock, policy);

    if let Some(control) = start.filter(|c| c.value().is_empty()) {
        tracing::debug!("Filling start date with {}", start_text);
        control.set_value(&start_text);
    }
    if let Some(control) = end.filter(|c| c.value().is_empty()) {
        tracing::debug!("Filling end date with {}", end_text);
        control.set_value(&end_text);
    }
}
