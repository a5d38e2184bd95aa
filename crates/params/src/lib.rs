//! Constant values for the vecc library

pub mod traditional;
