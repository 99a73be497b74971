//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, plus
//! configuration.

pub mod config;
pub mod content;
pub mod ports;
pub mod storage;
