//! HTTP handlers for the bakery catalog.

pub mod catalog;
pub use catalog::*;
