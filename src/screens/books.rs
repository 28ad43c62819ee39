//! Book list screen: `(id, title, author, category, year, description)`.

use super::ScreenSpec;
use crate::core::record::{FieldKind, FieldSpec, RecordSchema};

pub const SCHEMA: RecordSchema = RecordSchema {
    collection: "books",
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
    name: "books",
    db_name: "books.db",
    schema: &SCHEMA,
};
