// src/utils/mod.rs

pub mod number;
pub mod sample;
pub mod validation;
