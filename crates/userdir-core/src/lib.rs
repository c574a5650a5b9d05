//! # Userdir Core
//!
//! Domain entities, error types, and result aliases shared across all
//! layers of the userdir service.

pub mod domain;
pub mod error;
pub mod result;

pub use domain::*;
pub use error::*;
pub use result::*;
