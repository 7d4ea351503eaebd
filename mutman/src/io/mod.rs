//! Side-effecting adapters: process execution, engine resolution, cache
//! removal, and configuration.

pub mod cache;
pub mod config;
pub mod engine;
pub mod process;
