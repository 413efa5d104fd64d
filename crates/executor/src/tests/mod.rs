//! Executor tests
