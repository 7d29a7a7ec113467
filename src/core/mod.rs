//! Core application logic, independent of the DOM.
//!
//! Everything in this module is pure and natively testable:
//! - [`object`] - structural row comparison and dotted-path extraction
//! - [`sort`] - three-state sort-direction cycling over a sort spec
//! - [`selection`] - structural-equality selection set operations
//! - [`pagination`] - page option derivation and clamping
//! - [`export`] - label/value sheet building and CSV serialization
//! - [`error`] - error types shared by the API and export layers

pub mod error;
pub mod export;
pub mod object;
pub mod pagination;
pub mod selection;
pub mod sort;
