//! Utility functions
//!
//! User-friendly error formatting for the CLI.
//!
//! ```rust
//! use portfolio_nav::utils::format_user_error;
//!
//! let error = anyhow::anyhow!("Failed to parse config file");
//! let message = format_user_error(&error);
//! assert!(message.contains("Configuration Error"));
//! ```
//!
//! Error categories with context-aware help:
//! - Config errors → file location, TOML syntax, value ranges
//! - Scenario errors → event format, section names, timestamp order
//! - Runtime errors → event loop stopped or overloaded

pub mod errors;

pub use errors::format_user_error;
