//! Known-answer data and helpers shared by the vecc integration tests

pub mod vectors;
