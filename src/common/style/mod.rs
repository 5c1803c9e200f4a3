//! Common style and measurement types.
//!
//! This module provides the value types shared by every document object.

// Submodule declarations
pub mod color;
pub mod len;

// Re-exports
pub use color::RGBColor;
pub use len::Length;
