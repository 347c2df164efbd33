pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::clock::{FixedClock, SystemClock};
pub use config::PanelConfig;
pub use core::date_range::DateRangeResolver;
pub use domain::model::{DateRangeInput, RangeError, RangePolicy, ResolvedRange, VisibilityState};
pub use utils::error::{PanelError, Result};
