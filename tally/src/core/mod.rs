//! Pure, deterministic accumulator logic.
//!
//! Core modules are free of I/O side effects. They operate on in-memory
//! state and return deterministic outputs suitable for tests. Every
//! accumulating type here keeps its state private and applies the same
//! wrap-around overflow policy.

pub mod accumulator;
pub mod shared;
pub mod stats;
