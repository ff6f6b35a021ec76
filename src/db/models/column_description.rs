use diesel::sql_types::{Nullable, Text};
use diesel::QueryableByName;
use serde::Serialize;
use std::fmt;

/// One row of a `DESCRIBE <table>` style listing, read from
/// `information_schema.COLUMNS`.
#[derive(QueryableByName, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescription {
    #[diesel(sql_type = Text)]
    pub field: String,
    #[diesel(sql_type = Text)]
    pub column_type: String,
    #[diesel(sql_type = Text)]
    pub nullable: String,
    #[diesel(sql_type = Text)]
    pub key: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub default: Option<String>,
    #[diesel(sql_type = Text)]
    pub extra: String,
}

impl fmt::Display for ColumnDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<28} {:<24} {:<4} {:<4} {:<16} {}",
            self.field,
            self.column_type,
            self.nullable,
            self.key,
            self.default.as_deref().unwrap_or("NULL"),
            self.extra
        )
    }
}

#[derive(QueryableByName, Debug, Clone, PartialEq, Eq)]
pub struct TableName {
    #[diesel(sql_type = Text)]
    pub name: String,
}

#[derive(QueryableByName, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCount {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_null_default() {
        let column = ColumnDescription {
            field: "id".into(),
            column_type: "int".into(),
            nullable: "NO".into(),
            key: "PRI".into(),
            default: None,
            extra: "auto_increment".into(),
        };
        let line = column.to_string();
        assert!(line.starts_with("id"));
        assert!(line.contains("NULL"));
        assert!(line.ends_with("auto_increment"));
    }
}
