//! Unified error types for pptx-introspect.
//!
//! Accessor failures on document objects and caller errors from the
//! introspection API are expressed with the same error type.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
