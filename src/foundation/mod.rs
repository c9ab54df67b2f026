//! Shared primitives: errors, geometry/color, and the diagnostic channel.

pub mod core;
pub mod diag;
pub mod error;
