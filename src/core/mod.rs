// src/core/mod.rs
pub mod dates;
pub mod money;
pub mod sanitize;
