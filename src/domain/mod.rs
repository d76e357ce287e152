// Domain layer: run models and ports. Concrete process/filesystem code lives in adapters.

pub mod model;
pub mod ports;
