//! Every call closes its connection, whether it succeeded or failed.
//!
//! Kept in its own test binary so no other test opens files while the
//! descriptor table is being counted.

#![cfg(target_os = "linux")]

use sqlfactory::prelude::*;
use tempfile::TempDir;

fn open_fds() -> usize {
    std::fs::read_dir("/proc/self/fd").unwrap().count()
}

#[tokio::test]
async fn test_calls_do_not_leak_connections() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("release.db").display());
    let factory = SqlConnectionFactory::with_resolver(url, CodeTable::new().with(2067, "DUPLICATE_KEY"));

    factory
        .execute("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT UNIQUE)", Args::new())
        .await
        .unwrap();
    factory
        .execute("INSERT INTO t (id, name) VALUES (?, ?)", Args::new().with("Id", 1).with("Name", "a"))
        .await
        .unwrap();

    let before = open_fds();

    for i in 0..20i64 {
        let err = factory
            .execute("INSERT INTO t (id, name) VALUES (?, ?)", Args::new().with("Id", 100 + i).with("Name", "a"))
            .await
            .unwrap_err();
        assert!(err.as_logic().is_some());

        assert!(factory.execute_scalar::<i64>("SELEC 1", Args::new()).await.is_err());
        assert!(factory.query::<JsonRow>("SELECT * FROM missing", Args::new()).await.is_err());

        let count: i64 = factory.execute_scalar("SELECT COUNT(*) FROM t", Args::new()).await.unwrap();
        assert_eq!(count, 1);
        let row: Option<JsonRow> = factory.single("SELECT * FROM t", Args::new()).await.unwrap();
        assert!(row.is_some());
    }

    let after = open_fds();
    assert!(after <= before + 2, "descriptors grew from {before} to {after} over 100 calls");
}
