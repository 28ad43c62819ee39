//! Shopping list screen: `(id, title, category, price)` with integer prices.

use super::ScreenSpec;
use crate::core::record::{FieldKind, FieldSpec, RecordSchema};

pub const SCHEMA: RecordSchema = RecordSchema {
    collection: "shopping_items",
    fields: &[
        FieldSpec {
            name: "title",
            kind: FieldKind::Text,
        },
        FieldSpec {
            name: "category",
            kind: FieldKind::Text,
        },
        FieldSpec {
            name: "price",
            kind: FieldKind::Integer,
        },
    ],
};

pub const SCREEN: ScreenSpec = ScreenSpec {
    name: "market",
    db_name: "market.db",
    schema: &SCHEMA,
};
