//! Infrastructure layer: wire codec, record cache, UDP transport and the
//! iterative resolver.
pub mod dns;
