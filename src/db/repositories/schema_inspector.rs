use anyhow::{bail, Context, Result};
use diesel::prelude::*;
use diesel::sql_types::Text;
use std::sync::Arc;
use tracing::{debug, error};

use super::repositories_utils::get_conn;
use super::DBPool;
use crate::db::models::column_description::{ColumnDescription, RowCount, TableName};
use crate::db::tables::KnownTable;

// CAST AS CHAR keeps MySQL 8 from handing information_schema values back as
// binary strings, which Diesel will not read as Text.
const DESCRIBE_QUERY: &str = r#"
    SELECT
        CAST(COLUMN_NAME AS CHAR) AS field,
        CAST(COLUMN_TYPE AS CHAR) AS column_type,
        CAST(IS_NULLABLE AS CHAR) AS nullable,
        CAST(COLUMN_KEY AS CHAR) AS `key`,
        CAST(COLUMN_DEFAULT AS CHAR) AS `default`,
        CAST(EXTRA AS CHAR) AS extra
    FROM information_schema.COLUMNS
    WHERE TABLE_SCHEMA = DATABASE()
      AND TABLE_NAME = ?
    ORDER BY ORDINAL_POSITION
"#;

const LIST_TABLES_QUERY: &str = r#"
    SELECT CAST(TABLE_NAME AS CHAR) AS name
    FROM information_schema.TABLES
    WHERE TABLE_SCHEMA = DATABASE()
    ORDER BY TABLE_NAME
"#;

/// Read-only view of the live schema: what `SHOW TABLES` and `DESCRIBE` give.
#[derive(Clone)]
pub struct SchemaInspector {
    pool: Arc<DBPool>,
}

impl SchemaInspector {
    pub fn new(pool: Arc<DBPool>) -> Self {
        SchemaInspector { pool }
    }

    pub fn list_tables(&self) -> Result<Vec<String>> {
        let mut conn = get_conn(&self.pool)?;
        let rows = diesel::sql_query(LIST_TABLES_QUERY)
            .load::<TableName>(&mut conn)
            .map_err(|e| {
                error!(error = ?e, "Failed to list tables");
                anyhow::anyhow!("Failed to list tables: {}", e)
            })?;
        Ok(rows.into_iter().map(|r| r.name).collect())
    }

    /// Columns of `table` in declaration order. A table with no columns does
    /// not exist in the connected database and is reported as an error.
    pub fn describe(&self, table: KnownTable) -> Result<Vec<ColumnDescription>> {
        let mut conn = get_conn(&self.pool)?;
        debug!("Describing table {}", table);
        let columns = diesel::sql_query(DESCRIBE_QUERY)
            .bind::<Text, _>(table.as_str())
            .load::<ColumnDescription>(&mut conn)
            .with_context(|| format!("Failed to describe table {}", table))?;

        if columns.is_empty() {
            bail!("Table {} does not exist in the connected database", table);
        }
        Ok(columns)
    }

    pub fn count_rows(&self, table: KnownTable) -> Result<i64> {
        let mut conn = get_conn(&self.pool)?;
        // Identifier comes from the closed KnownTable set, never from user input.
        let query = format!("SELECT COUNT(*) AS count FROM `{}`", table.as_str());
        let row = diesel::sql_query(query)
            .get_result::<RowCount>(&mut conn)
            .with_context(|| format!("Failed to count rows in {}", table))?;
        Ok(row.count)
    }
}
