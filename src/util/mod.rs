//! Shared utilities

pub mod date;
