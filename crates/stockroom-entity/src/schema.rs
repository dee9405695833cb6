//! Storage-schema declarations.
//!
//! A [`CollectionSchema`] describes what a store must provide for a
//! collection: its columns, which fields are unique, and which lookups
//! should be indexed. The PostgreSQL store renders it to DDL at startup.
//! The in-memory store keeps its own unique `name` map and scans for
//! everything else.

/// A single stored field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column name.
    pub name: &'static str,
    /// SQL type.
    pub sql_type: &'static str,
    /// Extra column constraints (`NOT NULL`, defaults, checks).
    pub constraints: &'static str,
}

/// A secondary index over one or more columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSpec {
    /// Index name.
    pub name: &'static str,
    /// Indexed columns, in order.
    pub columns: &'static [&'static str],
    /// Whether the index rejects duplicate keys.
    pub unique: bool,
}

/// Declaration of one collection (table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSchema {
    /// Collection (table) name.
    pub name: &'static str,
    /// Columns, primary key first.
    pub columns: &'static [ColumnSpec],
    /// Secondary indexes.
    pub indexes: &'static [IndexSpec],
}

/// The `products` collection.
pub const PRODUCT_SCHEMA: CollectionSchema = CollectionSchema {
    name: "products",
    columns: &[
        ColumnSpec {
            name: "id",
            sql_type: "UUID",
            constraints: "PRIMARY KEY DEFAULT gen_random_uuid()",
        },
        ColumnSpec {
            name: "name",
            sql_type: "VARCHAR(20)",
            constraints: "NOT NULL",
        },
        ColumnSpec {
            name: "shopname",
            sql_type: "VARCHAR(20)",
            constraints: "",
        },
        ColumnSpec {
            name: "quantity",
            sql_type: "DOUBLE PRECISION",
            constraints: "NOT NULL DEFAULT 0 CHECK (quantity >= 0)",
        },
        ColumnSpec {
            name: "costprice",
            sql_type: "DOUBLE PRECISION",
            constraints: "NOT NULL CHECK (costprice >= 0)",
        },
        ColumnSpec {
            name: "unit",
            sql_type: "TEXT",
            constraints: "NOT NULL DEFAULT 'kg' CHECK (unit IN ('kg', 'Bag', 'Pac', 'Lit'))",
        },
        ColumnSpec {
            name: "created_at",
            sql_type: "TIMESTAMPTZ",
            constraints: "NOT NULL DEFAULT NOW()",
        },
        ColumnSpec {
            name: "updated_at",
            sql_type: "TIMESTAMPTZ",
            constraints: "NOT NULL DEFAULT NOW()",
        },
    ],
    indexes: &[
        IndexSpec {
            name: "products_name_key",
            columns: &["name"],
            unique: true,
        },
        IndexSpec {
            name: "products_name_shopname_idx",
            columns: &["name", "shopname"],
            unique: false,
        },
        IndexSpec {
            name: "products_created_at_idx",
            columns: &["created_at"],
            unique: false,
        },
    ],
};
