//! Utils module - Shared utilities and helpers

/// Error conversion helpers for the HTTP transport
pub mod error_helpers;

/// Verbose output helpers
pub mod logging;

/// Input validation and sanitization utilities
pub mod validation;
