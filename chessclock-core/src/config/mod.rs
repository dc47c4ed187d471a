//! Configuration types
//!
//! Board-agnostic clock settings, fixed at startup.

pub mod types;

pub use types::*;
