//! Food list screen. The shape matches the books screen field for field
//! (author/year carried over unchanged); the tables stay separate.

use super::ScreenSpec;
use crate::core::record::{FieldKind, FieldSpec, RecordSchema};

pub const SCHEMA: RecordSchema = RecordSchema {
    collection: "food_items",
    fields: &[
        FieldSpec {
            name: "title",
            kind: FieldKind::Text,
        },
        FieldSpec {
            name: "author",
            kind: FieldKind::Text,
        },
        FieldSpec {
            name: "category",
            kind: FieldKind::Text,
        },
        FieldSpec {
            name: "year",
            kind: FieldKind::Integer,
        },
        FieldSpec {
            name: "description",
            kind: FieldKind::Text,
        },
    ],
};

pub const SCREEN: ScreenSpec = ScreenSpec {
    name: "food",
    db_name: "food.db",
    schema: &SCHEMA,
};
