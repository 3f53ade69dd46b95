// Domain layer: cell model, phone number matching and the ports the pipeline talks to.

pub mod aggregator;
pub mod extractor;
pub mod model;
pub mod ports;
