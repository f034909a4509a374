//! Static definition of the `domain_path` table.
//!
//! [`DOMAIN_PATH`] is the single description of the table layout. The storage
//! renders its DDL from it when ensuring the table exists, and installation
//! tooling can render the same statements.

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Auto-incrementing integer.
    Serial,
    Int,
    Varchar(u16),
}

impl ColumnType {
    fn sql(self) -> String {
        match self {
            Self::Serial => "SERIAL".to_string(),
            Self::Int => "INTEGER".to_string(),
            Self::Varchar(length) => format!("VARCHAR({length})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnDefault {
    Int(i64),
    Text(&'static str),
}

impl ColumnDefault {
    fn sql(self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Text(value) => format!("'{}'", value.replace('\'', "''")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub description: &'static str,
    pub column_type: ColumnType,
    pub not_null: bool,
    pub default: Option<ColumnDefault>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexDef {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

/// Versioned description of a table: columns, primary key and indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub version: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub columns: &'static [ColumnDef],
    pub primary_key: &'static [&'static str],
    pub indexes: &'static [IndexDef],
}

/// Per-domain path aliases.
pub const DOMAIN_PATH: TableSchema = TableSchema {
    version: 1,
    name: "domain_path",
    description: "Stores per-domain path data.",
    columns: &[
        ColumnDef {
            name: "pid",
            description: "Primary key.",
            column_type: ColumnType::Serial,
            not_null: true,
            default: None,
        },
        ColumnDef {
            name: "domain_id",
            description: "Domain id for this alias",
            column_type: ColumnType::Int,
            not_null: true,
            default: Some(ColumnDefault::Int(0)),
        },
        ColumnDef {
            name: "source",
            description: "System path for the alias",
            column_type: ColumnType::Varchar(255),
            not_null: true,
            default: None,
        },
        ColumnDef {
            name: "alias",
            description: "Path alias for the domain",
            column_type: ColumnType::Varchar(255),
            not_null: true,
            default: None,
        },
        ColumnDef {
            name: "langcode",
            description: "Language for the alias.",
            column_type: ColumnType::Varchar(12),
            not_null: true,
            default: Some(ColumnDefault::Text("und")),
        },
        ColumnDef {
            name: "entity_type",
            description: "Entity type",
            column_type: ColumnType::Varchar(80),
            not_null: false,
            default: None,
        },
        ColumnDef {
            name: "entity_id",
            description: "Entity id",
            column_type: ColumnType::Int,
            not_null: false,
            default: None,
        },
    ],
    primary_key: &["pid"],
    indexes: &[
        IndexDef {
            name: "alias_langcode_pid",
            columns: &["alias", "langcode", "pid"],
        },
        IndexDef {
            name: "source_langcode_pid",
            columns: &["source", "langcode", "pid"],
        },
    ],
};

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Renders an idempotent PostgreSQL `CREATE TABLE` statement.
    pub fn create_table_sql(&self) -> String {
        let mut lines: Vec<String> = self
            .columns
            .iter()
            .map(|column| {
                let mut line = format!("{} {}", column.name, column.column_type.sql());
                if column.not_null {
                    line.push_str(" NOT NULL");
                }
                if let Some(default) = column.default {
                    line.push_str(" DEFAULT ");
                    line.push_str(&default.sql());
                }
                line
            })
            .collect();

        if !self.primary_key.is_empty() {
            lines.push(format!("PRIMARY KEY ({})", self.primary_key.join(", ")));
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            self.name,
            lines.join(",\n    ")
        )
    }

    /// Renders one idempotent `CREATE INDEX` statement per index.
    ///
    /// Index names are prefixed with the table name since PostgreSQL index
    /// names share the schema namespace.
    pub fn create_index_sql(&self) -> Vec<String> {
        self.indexes
            .iter()
            .map(|index| {
                format!(
                    "CREATE INDEX IF NOT EXISTS {table}__{name} ON {table} ({columns})",
                    table = self.name,
                    name = index.name,
                    columns = index.columns.join(", ")
                )
            })
            .collect()
    }
}
