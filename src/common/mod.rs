//! Common types, traits, and utilities shared across the document model.
//!
//! This module provides the error type, measurement units, colors and
//! enumerations used by every document object and by the introspection
//! engine.

// Submodule declarations
pub mod enums;
pub mod error;
pub mod style;
pub mod unit;

// Re-exports for convenience
pub use enums::EnumMember;
pub use error::{Error, Result};
pub use style::{Length, RGBColor};
