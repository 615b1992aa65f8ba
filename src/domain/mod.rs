// Domain layer: core models and ports. No filesystem or CLI code here.

pub mod model;
pub mod ports;
