//! In-memory controls backing the panel ports. Used by the CLI and by tests.

use crate::core::{DateControl, LabelControl, SectionControl};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySection {
    classes: Vec<String>,
    open: bool,
}

impl MemorySection {
    pub fn with_classes(classes: &[&str]) -> Self {
        Self {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            open: false,
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl SectionControl for MemorySection {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn set_class(&mut self, class: &str, present: bool) {
        if present {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        } else {
            self.classes.retain(|c| c != class);
        }
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLabel {
    text: String,
}

impl MemoryLabel {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl LabelControl for MemoryLabel {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDateInput {
    value: String,
}

impl MemoryDateInput {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

impl DateControl for MemoryDateInput {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_class_is_idempotent() {
        let mut section = MemorySection::with_classes(&["advanced"]);
        section.set_class("hidden", true);
        section.set_class("hidden", true);
        assert_eq!(section.classes(), ["advanced", "hidden"]);

        section.set_class("hidden", false);
        assert_eq!(section.classes(), ["advanced"]);
    }
}
