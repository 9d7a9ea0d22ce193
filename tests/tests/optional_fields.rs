use tests::prelude::*;

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Record)]
struct Profile {
    id: i64,
    nickname: Option<String>,
    avatar: Option<Vec<u8>>,
    age: Option<i32>,
    external_id: Option<Uuid>,
    last_seen: Option<DateTime<Utc>>,
    home: Option<Point>,
}

fn empty(id: i64) -> Profile {
    Profile {
        id,
        nickname: None,
        avatar: None,
        age: None,
        external_id: None,
        last_seen: None,
        home: None,
    }
}

fn filled(id: i64) -> Profile {
    Profile {
        id,
        nickname: Some("ace".to_string()),
        avatar: Some(vec![7, 7, 7]),
        age: Some(33),
        external_id: Some(Uuid::new_v4()),
        last_seen: Some(Utc.with_ymd_and_hms(2023, 6, 1, 8, 0, 0).unwrap()),
        home: Some(Point::new(-1.0, 2.0)),
    }
}

async fn none_round_trips(test: &mut DbTest) {
    let db = test.db().await;
    let profiles = test.create_table::<Profile>("profiles", "Id").await;

    db.create(&profiles, &empty(1)).await.unwrap();

    let loaded: Option<Profile> = db.load(&profiles, "Id", 1i64).await.unwrap();
    assert_eq!(loaded, Some(empty(1)));
}

async fn some_round_trips(test: &mut DbTest) {
    let db = test.db().await;
    let profiles = test.create_table::<Profile>("profiles", "Id").await;

    let expected = filled(1);
    db.create(&profiles, &expected).await.unwrap();

    let loaded: Option<Profile> = db.load(&profiles, "Id", 1i64).await.unwrap();
    assert_eq!(loaded, Some(expected));
}

async fn clear_and_refill(test: &mut DbTest) {
    let db = test.db().await;
    let profiles = test.create_table::<Profile>("profiles", "Id").await;

    let full = filled(5);
    db.create(&profiles, &full).await.unwrap();

    db.update(&profiles, "Id", &empty(5)).await.unwrap();
    assert_eq!(
        db.load::<Profile>(&profiles, "Id", 5i64).await.unwrap(),
        Some(empty(5))
    );

    db.update(&profiles, "Id", &full).await.unwrap();
    assert_eq!(
        db.load::<Profile>(&profiles, "Id", 5i64).await.unwrap(),
        Some(full)
    );
}

tests!(none_round_trips, some_round_trips, clear_and_refill);
