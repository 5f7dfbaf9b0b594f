//! Configuration, data model and per-process context.

pub mod config;
pub mod context;
pub mod models;
