pub mod clipboard;
pub mod date_range;
pub mod defaults;
pub mod toggle;

pub use crate::domain::model::{
    DateRangeInput, RangeError, RangePolicy, ResolvedRange, VisibilityState,
};
pub use crate::domain::ports::{
    Clipboard, ClipboardCapabilities, Clock, DateControl, FallbackCopier, LabelControl, Notifier,
    PageSource, SectionControl, StatusReporter,
};
pub use crate::utils::error::Result;
