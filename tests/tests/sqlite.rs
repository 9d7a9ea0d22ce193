#![cfg(feature = "sqlite")]

use tests::prelude::*;

use rowmap::WriteOp;

#[derive(Debug, Clone, PartialEq, Record)]
struct Event {
    id: i64,
    kind: String,
}

async fn setup() -> Db {
    let db = Db::connect("sqlite::memory:").await.unwrap();

    db.execute(
        "CREATE TABLE events (id INTEGER PRIMARY KEY, kind TEXT NOT NULL)",
        Params::new(),
    )
    .await
    .unwrap();

    db
}

#[tokio::test]
async fn in_memory_rows_outlive_each_operation() {
    let db = setup().await;

    let event = Event {
        id: 1,
        kind: "signup".to_string(),
    };
    db.create("events", &event).await.unwrap();

    let other = db.clone();
    let loaded = tokio::spawn(async move { other.load::<Event>("events", "Id", 1i64).await })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(loaded, Some(event));
}

#[tokio::test]
async fn create_affecting_no_rows() {
    let db = setup().await;

    // Silently discards every insert.
    db.execute(
        "CREATE TRIGGER drop_inserts BEFORE INSERT ON events BEGIN SELECT RAISE(IGNORE); END",
        Params::new(),
    )
    .await
    .unwrap();

    let event = Event {
        id: 1,
        kind: "signup".to_string(),
    };

    let err = assert_err!(db.create("events", &event).await);
    assert!(err.is_record_not_affected());
    assert_eq!(err.write_op(), Some(WriteOp::Create));
    assert_eq!(err.to_string(), "creation error: no rows affected; table=events");
}

#[tokio::test]
async fn stored_text_that_is_not_a_point() {
    #[derive(Debug, Record)]
    struct Place {
        id: i64,
        location: Point,
    }

    let db = Db::connect("sqlite::memory:").await.unwrap();
    db.execute(
        "CREATE TABLE places (id INTEGER PRIMARY KEY, location TEXT)",
        Params::new(),
    )
    .await
    .unwrap();
    db.execute(
        "INSERT INTO places (id, location) VALUES (1, 'north pole')",
        Params::new(),
    )
    .await
    .unwrap();

    let err = assert_err!(db.load::<Place>("places", "Id", 1i64).await);
    assert!(err.is_type_conversion(), "{err}");
}

#[tokio::test]
async fn file_database_persists_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("events.db").display());

    let db = Db::connect(&url).await.unwrap();
    db.execute(
        "CREATE TABLE events (id INTEGER PRIMARY KEY, kind TEXT NOT NULL)",
        Params::new(),
    )
    .await
    .unwrap();
    db.create(
        "events",
        &Event {
            id: 7,
            kind: "login".to_string(),
        },
    )
    .await
    .unwrap();
    drop(db);

    let reopened = Db::connect(&url).await.unwrap();
    let loaded: Option<Event> = reopened.load("events", "Id", 7i64).await.unwrap();
    assert_eq!(loaded.map(|event| event.kind), Some("login".to_string()));
}

#[tokio::test]
async fn relative_file_url_names_a_real_file() {
    // Integration tests run from the package directory.
    let dir = tempfile::tempdir_in(".").unwrap();
    let name = dir.path().file_name().unwrap().to_str().unwrap();
    let url = format!("sqlite://{name}/events.db");

    let db = Db::connect(&url).await.unwrap();
    db.execute(
        "CREATE TABLE events (id INTEGER PRIMARY KEY, kind TEXT NOT NULL)",
        Params::new(),
    )
    .await
    .unwrap();
    db.create(
        "events",
        &Event {
            id: 3,
            kind: "logout".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(dir.path().join("events.db").exists());
    assert_eq!(db.driver().url(), format!("sqlite:{name}/events.db"));
}

#[tokio::test]
async fn nan_is_rejected_before_it_becomes_null() {
    #[derive(Debug, Record)]
    struct Measurement {
        id: i64,
        ratio: f64,
    }

    let db = Db::connect("sqlite::memory:").await.unwrap();
    db.execute(
        "CREATE TABLE measurements (id INTEGER PRIMARY KEY, ratio REAL NOT NULL)",
        Params::new(),
    )
    .await
    .unwrap();

    let err = assert_err!(
        db.create(
            "measurements",
            &Measurement {
                id: 1,
                ratio: f64::NAN,
            },
        )
        .await
    );
    assert!(err.is_type_conversion(), "{err}");
}
