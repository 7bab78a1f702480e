//! Shared types for the `ipsift` workspace: run configuration and the
//! pipeline error taxonomy.

pub mod config;
pub mod error;
