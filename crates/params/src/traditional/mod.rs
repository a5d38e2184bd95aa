//! Constants for elliptic-curve algorithms

pub mod ecdsa;
