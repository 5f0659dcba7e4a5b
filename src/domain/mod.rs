// Domain layer: view-models, raw backend shapes and ports (interfaces).

pub mod model;
pub mod ports;
pub mod raw;
