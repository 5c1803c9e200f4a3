//! Office enumerations.
//!
//! Every enumeration in the document model carries a symbolic name, an integer
//! value and a human-readable description. XML-backed enumerations also know
//! the token they are written as in DrawingML/PresentationML. The
//! [`EnumMember`] trait exposes that metadata uniformly so the introspection
//! engine can format any member without knowing its concrete type.

use std::fmt;

// Submodule declarations
pub mod dml;
pub mod shapes;
pub mod text;

// Re-exports
pub use dml::{MsoColorType, MsoFillType, MsoLineDashStyle, MsoPatternType, MsoThemeColor};
pub use shapes::{MsoAutoShapeType, MsoShapeType, PpPlaceholderType};
pub use text::{MsoVerticalAnchor, PpParagraphAlignment};

/// Metadata shared by every enumeration member.
pub trait EnumMember: fmt::Debug {
    /// The enumeration's type name, e.g. `MSO_SHAPE_TYPE`.
    fn enum_type(&self) -> &'static str;

    /// Symbolic member name, e.g. `PICTURE`.
    fn name(&self) -> &'static str;

    /// Integer value of the member.
    fn value(&self) -> i32;

    /// Short description of the member.
    fn description(&self) -> &'static str;

    /// XML token, for enumerations serialized as XML attribute values.
    fn xml_value(&self) -> Option<&'static str> {
        None
    }
}

/// Declare an Office enumeration together with its [`EnumMember`] metadata.
///
/// Members are written `Variant = value, "NAME", "Description"` with an
/// optional trailing `, xml = "token"`.
macro_rules! office_enum {
    (@xml $xml:literal) => {
        Some($xml)
    };
    (@xml) => {
        None
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident as $label:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal, $name:literal, $desc:literal $(, xml = $xml:literal)?
            );+ $(;)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $ty {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $ty {
            /// All members in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Look up a member by its XML token.
            pub fn from_xml(token: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| $crate::common::enums::EnumMember::xml_value(member) == Some(token))
            }
        }

        impl $crate::common::enums::EnumMember for $ty {
            fn enum_type(&self) -> &'static str {
                $label
            }

            fn name(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }

            fn value(&self) -> i32 {
                match self {
                    $($ty::$variant => $value,)+
                }
            }

            fn description(&self) -> &'static str {
                match self {
                    $($ty::$variant => $desc,)+
                }
            }

            fn xml_value(&self) -> Option<&'static str> {
                match self {
                    $($ty::$variant => office_enum!(@xml $($xml)?),)+
                }
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(
                    f,
                    "{} ({})",
                    $crate::common::enums::EnumMember::name(self),
                    $crate::common::enums::EnumMember::value(self)
                )
            }
        }
    };
}

pub(crate) use office_enum;
