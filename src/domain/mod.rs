// Domain layer: the profile record, build outputs and the ports the pipeline is generic over.

pub mod model;
pub mod ports;
