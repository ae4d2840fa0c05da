// Domain layer: entities and ports. No I/O and no dependencies beyond std/serde.

pub mod account;
pub mod ports;
pub mod school;
