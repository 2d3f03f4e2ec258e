// src/handlers/mod.rs

pub mod health;
pub mod import;
pub mod objective;
pub mod subjective;
