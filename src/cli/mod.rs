// src/cli/mod.rs

pub mod client;
pub mod serve;
