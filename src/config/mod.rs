//! Configuration module for Raplan
//!
//! Provides CLI argument definitions and logging configuration.

mod settings;

pub use settings::*;
