#![cfg(feature = "sqlite")]

//! Runs alone in its own binary: it sets `DATABASE_URL`, which is read once
//! per process.

use tests::prelude::*;

#[tokio::test]
async fn connects_with_database_url() {
    std::env::set_var(rowmap::db::DATABASE_URL, "sqlite::memory:");

    assert_eq!(rowmap::db::connection_url().unwrap(), "sqlite::memory:");

    // Later changes are not observed.
    std::env::set_var(rowmap::db::DATABASE_URL, "postgresql://elsewhere/db");
    assert_eq!(rowmap::db::connection_url().unwrap(), "sqlite::memory:");

    let db = Db::from_env().await.unwrap();
    let count = db.execute("CREATE TABLE t (x INTEGER)", Params::new()).await.unwrap();
    assert_eq!(count, 0);
}
