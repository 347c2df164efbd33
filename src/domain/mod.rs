// Domain layer: panel models and the ports adapters plug into.

pub mod model;
pub mod ports;
