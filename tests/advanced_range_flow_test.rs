use chrono::NaiveDate;
use range_panel::adapters::memory::{MemoryDateInput, MemoryLabel, MemorySection};
use range_panel::adapters::status::{DebugLog, StatusLine};
use range_panel::core::defaults::fill_defaults;
use range_panel::core::toggle::{current_state, toggle, HIDDEN_CLASS};
use range_panel::core::{DateControl, LabelControl, SectionControl};
use range_panel::domain::model::{HIDE_LABEL, SHOW_LABEL};
use range_panel::{
    DateRangeInput, DateRangeResolver, FixedClock, RangeError, RangePolicy, VisibilityState,
};
use std::sync::Arc;

struct Panel {
    section: MemorySection,
    toggle_label: MemoryLabel,
    start: MemoryDateInput,
    end: MemoryDateInput,
}

impl Panel {
    fn new() -> Self {
        Self {
            section: MemorySection::with_classes(&["advanced", HIDDEN_CLASS]),
            toggle_label: MemoryLabel::new(SHOW_LABEL),
            start: MemoryDateInput::default(),
            end: MemoryDateInput::default(),
        }
    }

    fn toggle(&mut self) -> Option<VisibilityState> {
        toggle(Some(&mut self.section), Some(&mut self.toggle_label))
    }

    fn input(&self) -> DateRangeInput {
        DateRangeInput::new(Some(self.start.value()), Some(self.end.value()))
    }
}

fn clock() -> FixedClock {
    FixedClock::local(
        NaiveDate::from_ymd_opt(2024, 6, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
}

fn resolver() -> DateRangeResolver<FixedClock, StatusLine> {
    let log = DebugLog::new(Arc::new(clock()));
    DateRangeResolver::new(clock(), StatusLine::new(log))
}

#[test]
fn test_initial_state() {
    let panel = Panel::new();

    assert_eq!(current_state(&panel.section), VisibilityState::Hidden);
    assert_eq!(panel.toggle_label.text(), SHOW_LABEL);
    assert_eq!(panel.start.value(), "");
    assert_eq!(panel.end.value(), "");
}

#[test]
fn test_show_configure_and_resolve() {
    let mut panel = Panel::new();

    assert_eq!(panel.toggle(), Some(VisibilityState::Shown));
    assert!(panel.section.is_open());
    assert_eq!(panel.toggle_label.text(), HIDE_LABEL);

    fill_defaults(
        Some(&mut panel.start),
        Some(&mut panel.end),
        &clock(),
        &RangePolicy::default(),
    );
    assert_eq!(panel.start.value(), "2024-06-06");
    assert_eq!(panel.end.value(), "2024-06-20");

    let resolver = resolver();
    let range = resolver.resolve(&panel.input()).unwrap();
    assert_eq!(range.start().date(), NaiveDate::from_ymd_opt(2024, 6, 6).unwrap());
    assert_eq!(range.end().date(), NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
    assert_eq!(resolver.reporter().text(), "Status: Waiting…");
}

#[test]
fn test_custom_dates_survive_hide_and_show() {
    let mut panel = Panel::new();
    panel.toggle();
    panel.start.set_value("2024-03-01");
    panel.end.set_value("2024-03-31");

    panel.toggle();
    assert_eq!(current_state(&panel.section), VisibilityState::Hidden);
    assert!(!panel.section.is_open());
    panel.toggle();

    assert_eq!(panel.start.value(), "2024-03-01");
    assert_eq!(panel.end.value(), "2024-03-31");

    fill_defaults(
        Some(&mut panel.start),
        Some(&mut panel.end),
        &clock(),
        &RangePolicy::default(),
    );
    assert_eq!(panel.start.value(), "2024-03-01");
}

#[test]
fn test_inverted_range_lands_on_status_line() {
    let mut panel = Panel::new();
    panel.toggle();
    panel.start.set_value("2024-12-31");
    panel.end.set_value("2024-01-01");

    let resolver = resolver();
    let result = resolver.resolve(&panel.input());

    assert_eq!(result, Err(RangeError::OrderingViolation));
    let status = resolver.reporter();
    assert_eq!(
        status.text(),
        "Status: Start date must be on or before the end date."
    );
    assert_eq!(status.class_name(), "danger");
    assert!(status
        .debug_log()
        .last_line()
        .ends_with("STATUS: Start date must be on or before the end date. [ERROR]"));
}

#[test]
fn test_malformed_date_lands_on_status_line() {
    let mut panel = Panel::new();
    panel.start.set_value("not-a-date");

    let resolver = resolver();
    let result = resolver.resolve(&panel.input());

    assert_eq!(result, Err(RangeError::InvalidDate));
    assert_eq!(
        resolver.reporter().text(),
        "Status: Invalid date range. Please use valid dates."
    );
}

#[test]
fn test_same_day_range_is_valid() {
    let resolver = resolver();

    let range = resolver
        .resolve(&DateRangeInput::new(Some("2024-06-15"), Some("2024-06-15")))
        .unwrap();

    let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    assert_eq!(range.start().date(), day);
    assert_eq!(range.end().date(), day);
    assert!(range.start() <= range.end());
}

#[test]
fn test_every_ordered_pair_in_a_month_resolves() {
    let resolver = resolver();
    let days: Vec<String> = (1..=30).map(|d| format!("2024-04-{:02}", d)).collect();

    for (i, start) in days.iter().enumerate() {
        for end in &days[i..] {
            let range = resolver
                .resolve(&DateRangeInput::new(Some(start.as_str()), Some(end.as_str())))
                .unwrap();
            assert!(range.start() <= range.end());
        }
    }
    assert_eq!(resolver.reporter().text(), "Status: Waiting…");
}

#[test]
fn test_show_hide_cycle_keeps_unrelated_classes() {
    let mut section = MemorySection::with_classes(&["card", "advanced", HIDDEN_CLASS, "compact"]);
    // A stale open flag must not win over the hidden marker.
    section.set_open(true);
    let mut label = MemoryLabel::new(SHOW_LABEL);

    assert_eq!(
        toggle(Some(&mut section), Some(&mut label)),
        Some(VisibilityState::Shown)
    );
    assert_eq!(section.classes(), ["card", "advanced", "compact"]);
    assert!(section.is_open());

    assert_eq!(
        toggle(Some(&mut section), Some(&mut label)),
        Some(VisibilityState::Hidden)
    );
    for class in ["card", "advanced", "compact", HIDDEN_CLASS] {
        assert!(section.has_class(class), "missing class {}", class);
    }
    assert_eq!(section.classes().len(), 4);
    assert!(!section.is_open());
    assert_eq!(label.text(), SHOW_LABEL);
}
