use rusqlite::Connection;
use salary_split_core::db::migrations::latest_version;
use salary_split_core::db::{open_db, open_db_in_memory, DbError};
use salary_split_core::{FieldStore, FieldUpdate, PersistenceAdapter, SqliteKvAdapter};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries');",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn write_then_read_returns_last_payload() {
    let conn = open_db_in_memory().unwrap();
    let adapter = SqliteKvAdapter::new(&conn);
    assert_eq!(adapter.key(), "fields");
    assert_eq!(adapter.read().unwrap(), None);

    adapter.write("[]").unwrap();
    adapter.write(r#"[{"id":"a"}]"#).unwrap();
    assert_eq!(adapter.read().unwrap().as_deref(), Some(r#"[{"id":"a"}]"#));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn keys_are_isolated() {
    let conn = open_db_in_memory().unwrap();
    let fields = SqliteKvAdapter::new(&conn);
    let other = SqliteKvAdapter::with_key(&conn, "fields_backup");

    fields.write("[1]").unwrap();
    assert_eq!(other.read().unwrap(), None);
}

#[test]
fn store_survives_reopening_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("salary_split.sqlite3");

    let (rent, savings) = {
        let conn = open_db(&path).unwrap();
        let mut store = FieldStore::load(SqliteKvAdapter::new(&conn));
        let rent = store.create().unwrap();
        let savings = store.create().unwrap();
        store.update(&rent, FieldUpdate::Title("Rent".to_string()));
        store.update(&savings, FieldUpdate::Amount(250.0));
        (rent, savings)
    };

    let conn = open_db(&path).unwrap();
    let store = FieldStore::load(SqliteKvAdapter::new(&conn));
    assert_eq!(store.len(), 2);
    assert_eq!(store.buckets()[0].id, rent);
    assert_eq!(store.buckets()[0].title, "Rent");
    assert_eq!(store.buckets()[1].id, savings);
    assert_eq!(store.buckets()[1].amount, 250.0);
    assert_eq!(schema_version(&conn), latest_version());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}
