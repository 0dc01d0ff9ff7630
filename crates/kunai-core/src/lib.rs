//! Shared error and configuration types for the kunai workspace.

pub mod config;
pub mod error;
