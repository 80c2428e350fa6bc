//! Per-field serialization metadata for the value types.
//!
//! The serialization collaborator decides the wire format; this module only
//! describes, explicitly and in declaration order, which fields each type
//! exposes and whether they participate in serialization. Keeping this as
//! plain data (rather than runtime-discovered attributes) means the field
//! layout is part of the public contract: fields stay `pub` and their order
//! never changes silently.

use crate::util::colour::{Colour, ColourHsva};
use crate::util::linalg::{Mat3x3, Mat4x4, Quat, Vec2, Vec2i, Vec3, Vec4};

/// Metadata for one field of a value type.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FieldMeta {
    pub name: &'static str,
    pub serialized: bool,
}

impl FieldMeta {
    /// A field included in serialization.
    #[must_use]
    pub const fn serialized(name: &'static str) -> FieldMeta {
        FieldMeta {
            name,
            serialized: true,
        }
    }

    /// A field excluded from serialization.
    #[must_use]
    pub const fn skipped(name: &'static str) -> FieldMeta {
        FieldMeta {
            name,
            serialized: false,
        }
    }
}

/// Describes a type's fields to the serialization collaborator.
///
/// `FIELDS` lists every field in declaration order; the order is
/// contractual.
pub trait FieldSchema {
    const FIELDS: &'static [FieldMeta];
}

impl FieldSchema for Vec2 {
    const FIELDS: &'static [FieldMeta] =
        &[FieldMeta::serialized("x"), FieldMeta::serialized("y")];
}

impl FieldSchema for Vec2i {
    const FIELDS: &'static [FieldMeta] =
        &[FieldMeta::serialized("x"), FieldMeta::serialized("y")];
}

impl FieldSchema for Vec3 {
    const FIELDS: &'static [FieldMeta] = &[
        FieldMeta::serialized("x"),
        FieldMeta::serialized("y"),
        FieldMeta::serialized("z"),
    ];
}

impl FieldSchema for Vec4 {
    const FIELDS: &'static [FieldMeta] = &[
        FieldMeta::serialized("x"),
        FieldMeta::serialized("y"),
        FieldMeta::serialized("z"),
        FieldMeta::serialized("w"),
    ];
}

impl FieldSchema for Mat3x3 {
    const FIELDS: &'static [FieldMeta] = &[
        FieldMeta::serialized("m00"),
        FieldMeta::serialized("m01"),
        FieldMeta::serialized("m02"),
        FieldMeta::serialized("m10"),
        FieldMeta::serialized("m11"),
        FieldMeta::serialized("m12"),
        FieldMeta::serialized("m20"),
        FieldMeta::serialized("m21"),
        FieldMeta::serialized("m22"),
    ];
}

impl FieldSchema for Mat4x4 {
    const FIELDS: &'static [FieldMeta] = &[
        FieldMeta::serialized("m00"),
        FieldMeta::serialized("m01"),
        FieldMeta::serialized("m02"),
        FieldMeta::serialized("m03"),
        FieldMeta::serialized("m10"),
        FieldMeta::serialized("m11"),
        FieldMeta::serialized("m12"),
        FieldMeta::serialized("m13"),
        FieldMeta::serialized("m20"),
        FieldMeta::serialized("m21"),
        FieldMeta::serialized("m22"),
        FieldMeta::serialized("m23"),
        FieldMeta::serialized("m30"),
        FieldMeta::serialized("m31"),
        FieldMeta::serialized("m32"),
        FieldMeta::serialized("m33"),
    ];
}

impl FieldSchema for Quat {
    const FIELDS: &'static [FieldMeta] = &[
        FieldMeta::serialized("imaginary"),
        FieldMeta::serialized("real"),
    ];
}

impl FieldSchema for Colour {
    const FIELDS: &'static [FieldMeta] = &[
        FieldMeta::serialized("r"),
        FieldMeta::serialized("g"),
        FieldMeta::serialized("b"),
        FieldMeta::serialized("a"),
    ];
}

impl FieldSchema for ColourHsva {
    const FIELDS: &'static [FieldMeta] = &[
        FieldMeta::serialized("h"),
        FieldMeta::serialized("s"),
        FieldMeta::serialized("v"),
        FieldMeta::serialized("a"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<T: FieldSchema>() -> Vec<&'static str> {
        T::FIELDS.iter().map(|f| f.name).collect()
    }

    #[test]
    fn vector_schemas_match_declaration_order() {
        assert_eq!(names::<Vec2>(), vec!["x", "y"]);
        assert_eq!(names::<Vec2i>(), vec!["x", "y"]);
        assert_eq!(names::<Vec3>(), vec!["x", "y", "z"]);
        assert_eq!(names::<Vec4>(), vec!["x", "y", "z", "w"]);
    }

    #[test]
    fn matrix_schemas_are_row_major() {
        assert_eq!(<Mat3x3 as FieldSchema>::FIELDS.len(), 9);
        assert_eq!(<Mat4x4 as FieldSchema>::FIELDS.len(), 16);
        assert_eq!(<Mat3x3 as FieldSchema>::FIELDS[1].name, "m01");
        assert_eq!(<Mat4x4 as FieldSchema>::FIELDS[4].name, "m10");
    }

    #[test]
    fn quaternion_and_colour_schemas() {
        assert_eq!(names::<Quat>(), vec!["imaginary", "real"]);
        assert_eq!(names::<Colour>(), vec!["r", "g", "b", "a"]);
        assert_eq!(names::<ColourHsva>(), vec!["h", "s", "v", "a"]);
    }

    #[test]
    fn all_core_fields_are_serialized() {
        assert!(<Vec4 as FieldSchema>::FIELDS.iter().all(|f| f.serialized));
        assert!(<Quat as FieldSchema>::FIELDS.iter().all(|f| f.serialized));
        assert!(<Colour as FieldSchema>::FIELDS.iter().all(|f| f.serialized));
    }

    #[test]
    fn skipped_fields_are_representable() {
        let meta = FieldMeta::skipped("debug_name");
        assert!(!meta.serialized);
        assert_eq!(meta.name, "debug_name");
    }
}
