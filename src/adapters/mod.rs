// Adapters layer: concrete implementations of the domain ports.

pub mod clock;
pub mod memory;
pub mod page;
pub mod status;
