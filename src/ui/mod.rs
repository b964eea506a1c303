//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting, logging and display
//!
//! # Design
//!
//! All output goes through this module so quiet and debug modes are honored
//! consistently. Results go to stdout; diagnostics go to stderr.

pub mod output;
