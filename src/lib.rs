// src/lib.rs — Library root for chemviz

pub mod api;
pub mod auth;
pub mod cli;
pub mod core;
pub mod infra;
