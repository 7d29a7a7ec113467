//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch`] - HTTP requests with timeout racing and auth headers
//! - [`dom`] - window/storage access and blob downloads
//! - [`format`] - date parsing and display formatting

pub mod dom;
pub mod fetch;
pub mod format;
