// Domain layer: digit routines, models and ports. No I/O here.

pub mod digits;
pub mod model;
pub mod ports;
