//! SQL schema for the native key-value store.

/// Returns the full SQL schema as a single batch string.
///
/// One table, `kv`, mirroring browser `localStorage`: string keys mapped to
/// JSON-encoded string values.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS kv (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_names_kv_table() {
        assert!(create_schema().contains("CREATE TABLE IF NOT EXISTS kv"));
    }
}
