//! Application layer: the ports the resolver is built against and the
//! use cases driven by the interactive shell.
pub mod ports;
pub mod use_cases;
