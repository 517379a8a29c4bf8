// Domain layer: response model and configuration port.

pub mod model;
pub mod ports;
