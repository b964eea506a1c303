//! core
//!
//! Configuration shared by the CLI and the resolver.
//!
//! # Modules
//!
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Schemas are strict and self-describing
//! - Resolution itself lives in [`crate::forge`]; config only extends its registry

pub mod config;
