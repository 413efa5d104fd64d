//! Integration tests for the database engine and command layer.
//!
//! These need a real Database lifecycle (open → write → close → reopen) and
//! drive it through both the embedded catalog API and the `Executor`.

#[path = "../common/mod.rs"]
mod common;

mod config;
