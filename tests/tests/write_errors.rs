use tests::prelude::*;

use rowmap::WriteOp;

#[derive(Debug, Clone, PartialEq, Record)]
struct Account {
    id: i64,
    owner: String,
}

async fn update_missing_key(test: &mut DbTest) {
    let db = test.db().await;
    let accounts = test.create_table::<Account>("accounts", "Id").await;

    let account = Account {
        id: 9,
        owner: "nobody".to_string(),
    };

    let err = assert_err!(db.update(&accounts, "Id", &account).await);
    assert!(err.is_record_not_affected());
    assert_eq!(err.write_op(), Some(WriteOp::Update));
    assert!(err.to_string().starts_with("update error"), "{err}");
}

async fn delete_missing_key(test: &mut DbTest) {
    let db = test.db().await;
    let accounts = test.create_table::<Account>("accounts", "Id").await;

    let err = assert_err!(db.delete(&accounts, "Id", 9i64).await);
    assert!(err.is_record_not_affected());
    assert_eq!(err.write_op(), Some(WriteOp::Delete));
    assert!(err.to_string().starts_with("deletion error"), "{err}");
}

async fn duplicate_key_is_driver_error(test: &mut DbTest) {
    let db = test.db().await;
    let accounts = test.create_table::<Account>("accounts", "Id").await;

    let account = Account {
        id: 1,
        owner: "ada".to_string(),
    };

    db.create(&accounts, &account).await.unwrap();

    let err = assert_err!(db.create(&accounts, &account).await);
    assert!(err.is_driver_operation_failed());
    assert!(!err.is_record_not_affected());
}

async fn missing_table_is_driver_error(test: &mut DbTest) {
    let db = test.db().await;

    let err = assert_err!(db.load::<Account>("no_such_table", "Id", 1i64).await);
    assert!(err.is_driver_operation_failed());
}

async fn key_field_must_be_a_record_field(test: &mut DbTest) {
    let db = test.db().await;
    let accounts = test.create_table::<Account>("accounts", "Id").await;

    let account = Account {
        id: 1,
        owner: "ada".to_string(),
    };

    let err = assert_err!(db.update(&accounts, "Number", &account).await);
    assert!(err.is_missing_parameter());
}

tests!(
    update_missing_key,
    delete_missing_key,
    duplicate_key_is_driver_error,
    missing_table_is_driver_error,
    key_field_must_be_a_record_field,
);
