//! Host package: configuration, tracing, dependency wiring and the
//! terminal implementations of the host-side ports.

pub mod bootstrap;
pub mod host;
