//! End-to-end tests for `anicursor-rs`

mod cache;
mod fixtures;
mod render;
