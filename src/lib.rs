// src/lib.rs

#[macro_use]
pub mod macros;

pub mod core;
pub mod scrape;

pub mod cli;
pub mod csv;
pub mod data;
pub mod file;
pub mod net;
pub mod params;
