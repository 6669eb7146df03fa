// Domain layer: training records, report rules and ports. No I/O here.

pub mod dates;
pub mod model;
pub mod ports;

pub mod services;
