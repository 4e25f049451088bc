// Domain layer: book models, source defaults and ports (interfaces).

pub mod defaults;
pub mod model;
pub mod ports;
