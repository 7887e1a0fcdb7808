//! HTTP API: journal transaction endpoints backed by the accounting validator.

pub mod app;
pub mod config;
pub mod middleware;
