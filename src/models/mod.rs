// src/models/mod.rs

pub mod import;
pub mod question;
