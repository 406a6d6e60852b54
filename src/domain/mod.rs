// Domain layer: operation contract, built-in operations and plain models.

pub mod model;
pub mod operations;
pub mod ports;
