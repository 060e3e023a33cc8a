//! Utility modules.

/// Log sanitization helpers (body truncation, secret masking).
pub mod log_sanitizer;
