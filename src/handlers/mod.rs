//! HTTP handlers for the character resource.

pub mod character;
pub use character::*;
