use tests::prelude::*;

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Record)]
struct Sample {
    id: Uuid,
    active: bool,
    small: i16,
    medium: i32,
    large: i64,
    ratio: f64,
    label: String,
    payload: Vec<u8>,
    created_at: DateTime<Utc>,
    location: Point,
}

fn sample() -> Sample {
    Sample {
        id: Uuid::new_v4(),
        active: true,
        small: -12,
        medium: 70_000,
        large: 9_000_000_000,
        ratio: 0.25,
        label: "it's @not a param".to_string(),
        payload: vec![0, 1, 2, 255],
        created_at: Utc.with_ymd_and_hms(2024, 2, 29, 13, 45, 30).unwrap(),
        location: Point::new(12.5, -3.25),
    }
}

async fn every_kind_round_trips(test: &mut DbTest) {
    let db = test.db().await;
    let samples = test.create_table::<Sample>("samples", "Id").await;

    let expected = sample();
    db.create(&samples, &expected).await.unwrap();

    let loaded: Option<Sample> = db.load(&samples, "Id", expected.id).await.unwrap();
    assert_eq!(loaded, Some(expected));
}

async fn update_changes_every_kind(test: &mut DbTest) {
    let db = test.db().await;
    let samples = test.create_table::<Sample>("samples", "Id").await;

    let original = sample();
    db.create(&samples, &original).await.unwrap();

    let changed = Sample {
        active: false,
        small: 3,
        medium: -1,
        large: 0,
        ratio: 1.5,
        label: String::new(),
        payload: vec![],
        created_at: Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap(),
        location: Point::new(0.0, 0.0),
        ..original
    };
    db.update(&samples, "Id", &changed).await.unwrap();

    let loaded: Option<Sample> = db.load(&samples, "Id", changed.id).await.unwrap();
    assert_eq!(loaded, Some(changed));
}

async fn subsecond_timestamps(test: &mut DbTest) {
    let db = test.db().await;
    let samples = test.create_table::<Sample>("samples", "Id").await;

    let precise = Sample {
        created_at: Utc.timestamp_opt(1_700_000_000, 123_456_000).unwrap(),
        ..sample()
    };
    db.create(&samples, &precise).await.unwrap();

    let loaded: Sample = db
        .load(&samples, "Id", precise.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.created_at, precise.created_at);
}

tests!(
    every_kind_round_trips,
    update_changes_every_kind,
    subsecond_timestamps,
);
