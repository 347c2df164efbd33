use crate::core::{LabelControl, SectionControl, VisibilityState};

pub const HIDDEN_CLASS: &str = "hidden";

pub fn current_state<S: SectionControl + ?Sized>(section: &S) -> VisibilityState {
    VisibilityState::from_hidden(section.has_class(HIDDEN_CLASS))
}

/// Flip the advanced range section and keep its toggle label in sync.
///
/// Returns the new state, or `None` without touching anything when either
/// control is missing.
pub fn toggle<S, L>(section: Option<&mut S>, label: Option<&mut L>) -> Option<VisibilityState>
where
    S: SectionControl + ?Sized,
    L: LabelControl + ?Sized,
{
    let (section, label) = match (section, label) {
        (Some(section), Some(label)) => (section, label),
        _ => {
            tracing::debug!("Advanced range toggle skipped: control missing");
            return None;
        }
    };

    let next = current_state(section).toggled();
    section.set_class(HIDDEN_CLASS, !next.is_open());
    section.set_open(next.is_open());
    label.set_text(next.label());

    tracing::debug!("Advanced range section is now {:?}", next);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{MemoryLabel, MemorySection};
    use crate::domain::model::{HIDE_LABEL, SHOW_LABEL};

    fn hidden_panel() -> (MemorySection, MemoryLabel) {
        (
            MemorySection::with_classes(&["advanced", "hidden"]),
            MemoryLabel::new(SHOW_LABEL),
        )
    }

    #[test]
    fn test_shows_hidden_section() {
        let (mut section, mut label) = hidden_panel();

        let state = toggle(Some(&mut section), Some(&mut label));

        assert_eq!(state, Some(VisibilityState::Shown));
        assert!(!section.has_class("hidden"));
        assert!(section.is_open());
        assert_eq!(label.text(), HIDE_LABEL);
    }

    #[test]
    fn test_hides_visible_section() {
        let (mut section, mut label) = hidden_panel();
        section.set_class("hidden", false);
        section.set_open(true);
        label.set_text(HIDE_LABEL);

        let state = toggle(Some(&mut section), Some(&mut label));

        assert_eq!(state, Some(VisibilityState::Hidden));
        assert!(section.has_class("hidden"));
        assert!(!section.is_open());
        assert_eq!(label.text(), SHOW_LABEL);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let (mut section, mut label) = hidden_panel();
        let before = (section.clone(), label.clone());

        toggle(Some(&mut section), Some(&mut label));
        toggle(Some(&mut section), Some(&mut label));

        assert_eq!((section, label), before);
    }

    #[test]
    fn test_missing_controls_are_a_no_op() {
        let (mut section, mut label) = hidden_panel();

        assert_eq!(toggle(Some(&mut section), None::<&mut MemoryLabel>), None);
        assert_eq!(toggle(None::<&mut MemorySection>, Some(&mut label)), None);
        assert_eq!(
            toggle(None::<&mut MemorySection>, None::<&mut MemoryLabel>),
            None
        );

        assert!(section.has_class("hidden"));
        assert!(!section.is_open());
        assert_eq!(label.text(), SHOW_LABEL);
    }

    #[test]
    fn test_keeps_unrelated_classes() {
        let mut section = MemorySection::with_classes(&["advanced", "hidden", "some-other-class"]);
        let mut label = MemoryLabel::new(SHOW_LABEL);

        toggle(Some(&mut section), Some(&mut label));

        assert!(!section.has_class("hidden"));
        assert!(section.has_class("advanced"));
        assert!(section.has_class("some-other-class"));
    }

    #[test]
    fn test_section_without_hidden_marker_is_treated_as_shown() {
        let mut section = MemorySection::with_classes(&["advanced"]);
        let mut label = MemoryLabel::new(SHOW_LABEL);

        let state = toggle(Some(&mut section), Some(&mut label));

        assert_eq!(state, Some(VisibilityState::Hidden));
        assert!(section.has_class("hidden"));
        assert_eq!(label.text(), SHOW_LABEL);
    }
}
