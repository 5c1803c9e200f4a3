//! pptx-introspect - Introspection of PowerPoint object graphs
//!
//! This library models the objects of a PowerPoint presentation (slides,
//! layouts, masters, shapes, text, fills and colors) and turns any of them
//! into a JSON-ready dictionary meant for AI tooling.
//!
//! # Features
//!
//! - **Depth-limited serialization**: Nested objects stop at a configurable depth
//! - **Cycle safety**: Objects met twice in one call become circular-reference stubs
//! - **Field selection**: Dotted paths narrow the output to what is needed
//! - **Error isolation**: A failing accessor yields an error stub, never a failed call
//! - **Discovery trees**: Lightweight trees whose access paths resolve back to objects
//!
//! # Example - Discover, then target
//!
//! ```rust
//! use std::rc::Rc;
//! use pptx_introspect::introspection::{IntrospectExt, IntrospectionOptions, to_dict};
//! use pptx_introspect::shapes::{AutoShape, BaseShape};
//! use pptx_introspect::common::enums::MsoAutoShapeType;
//! use pptx_introspect::{Presentation, Slide, SlideMaster};
//!
//! # fn main() -> pptx_introspect::Result<()> {
//! let master = Rc::new(SlideMaster::new("Office Theme"));
//! let layout = master.add_layout("Blank", Vec::new());
//! let prs = Presentation::new()
//!     .with_slide_master(master)
//!     .with_slide(
//!         Slide::new(256, layout)
//!             .with_shape(AutoShape::new(BaseShape::new(2, "Arrow"), MsoAutoShapeType::RightArrow)),
//!     );
//!
//! // Cheap overview first
//! let tree = prs.get_tree(None);
//! let path = &tree.children.as_ref().unwrap()[0].children.as_ref().unwrap()[0].access_path;
//! assert_eq!(path, "slides[0].shapes[0]");
//!
//! // Then the full dictionary of one object
//! let shape = prs.resolve_path(path)?.unwrap();
//! let options = IntrospectionOptions::new().with_max_depth(2);
//! let output = to_dict(shape, &options)?;
//! assert_eq!(output["_object_type"], "Shape");
//! # Ok(())
//! # }
//! ```

/// Common types: errors, units, colors and enumerations
pub mod common;

/// DrawingML value objects: colors, fills and lines
pub mod dml;

/// Serialization and discovery engine
pub mod introspection;

/// Root presentation object
pub mod presentation;

/// Shapes and the shape tree
pub mod shapes;

/// Slides, layouts, masters and notes
pub mod slide;

/// Text frames, paragraphs, runs and fonts
pub mod text;

// Re-export commonly used types for convenience
pub use common::{Error, Length, RGBColor, Result};
pub use introspection::{Introspect, IntrospectExt, IntrospectionOptions, TreeNode};
pub use presentation::{CoreProperties, Presentation};
pub use shapes::Shape;
pub use slide::{NotesSlide, Slide, SlideLayout, SlideMaster};
