//! Internal utilities for the vecc library
//!
//! Not part of the public API contract: constant-time helpers and the
//! big-endian byte/word packing used by the fixed-width integer layer.

pub mod constant_time;
pub mod endian;
