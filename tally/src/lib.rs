//! Isolated running-total accumulators, with a small CLI host.
//!
//! This crate implements a factory for callable accumulator units: each
//! unit owns a private total that persists and accumulates across
//! invocations, and units created by separate factory calls never share
//! or interfere with each other's state. The architecture enforces a
//! strict separation:
//!
//! - **[`core`]**: Pure, deterministic accumulator logic (owned units,
//!   shared units, streaming statistics). No I/O, fully testable in
//!   isolation.
//! - **Host modules** ([`config`], [`input`], [`logging`],
//!   [`exit_codes`]): the side-effecting surface the `tally` binary is
//!   built from.
//!
//! Overflow wraps (two's complement) on every accumulating type, so a
//! total always equals its starting value plus all deltas so far,
//! modulo 2^64.

pub mod config;
pub mod core;
pub mod exit_codes;
pub mod input;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
