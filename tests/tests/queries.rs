use tests::prelude::*;

use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq, Record)]
struct Book {
    id: i64,
    title: String,
    author: String,
    pages: i32,
}

fn book(id: i64, title: &str, author: &str, pages: i32) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        pages,
    }
}

async fn seed(test: &mut DbTest) -> (Db, String) {
    let db = test.db().await;
    let books = test.create_table::<Book>("books", "Id").await;

    for book in [
        book(1, "Dune", "Herbert", 412),
        book(2, "Emma", "Austen", 474),
        book(3, "Persuasion", "Austen", 249),
    ] {
        db.create(&books, &book).await.unwrap();
    }

    (db, books)
}

async fn query_single_one_row(test: &mut DbTest) {
    let (db, books) = seed(test).await;

    let found: Option<Book> = db
        .query_single(
            &format!("SELECT * FROM {books} WHERE title = @Title"),
            params!("Title" => "Emma"),
        )
        .await
        .unwrap();

    assert_eq!(found, Some(book(2, "Emma", "Austen", 474)));
}

async fn query_single_no_row(test: &mut DbTest) {
    let (db, books) = seed(test).await;

    let found: Option<Book> = db
        .query_single(
            &format!("SELECT * FROM {books} WHERE author = @Author"),
            params!("Author" => "Tolstoy"),
        )
        .await
        .unwrap();

    assert_none!(found);
}

async fn query_single_many_rows(test: &mut DbTest) {
    let (db, books) = seed(test).await;

    let err = assert_err!(
        db.query_single::<Book>(
            &format!("SELECT * FROM {books} WHERE author = @Author"),
            params!("Author" => "Austen"),
        )
        .await
    );
    assert!(err.is_too_many_records());
}

async fn query_many_rows(test: &mut DbTest) {
    let (db, books) = seed(test).await;

    let found: Vec<Book> = db
        .query_many(
            &format!("SELECT * FROM {books} WHERE author = @Author ORDER BY id"),
            params!("Author" => "Austen"),
        )
        .await
        .unwrap();

    assert_eq!(
        found,
        [
            book(2, "Emma", "Austen", 474),
            book(3, "Persuasion", "Austen", 249),
        ]
    );
}

async fn query_many_empty(test: &mut DbTest) {
    let (db, books) = seed(test).await;

    let found: Vec<Book> = db
        .query_many(
            &format!("SELECT * FROM {books} WHERE pages > @Pages"),
            params!("Pages" => 10_000i32),
        )
        .await
        .unwrap();

    assert!(found.is_empty());
}

async fn repeated_placeholder(test: &mut DbTest) {
    let (db, books) = seed(test).await;

    let found: Vec<Book> = db
        .query_many(
            &format!("SELECT * FROM {books} WHERE title = @Name OR author = @Name ORDER BY id"),
            params!("Name" => "Dune"),
        )
        .await
        .unwrap();

    assert_eq!(found, [book(1, "Dune", "Herbert", 412)]);
}

async fn literal_at_sign_is_not_a_placeholder(test: &mut DbTest) {
    let (db, books) = seed(test).await;

    let count = db
        .execute(
            &format!("UPDATE {books} SET title = '@Draft' WHERE id = @Id"),
            params!("Id" => 3i64),
        )
        .await
        .unwrap();
    assert_eq!(count, 1);

    let found: Option<Book> = db.load(&books, "Id", 3i64).await.unwrap();
    assert_eq!(found.unwrap().title, "@Draft");
}

async fn execute_reports_affected_rows(test: &mut DbTest) {
    let (db, books) = seed(test).await;

    let count = db
        .execute(
            &format!("DELETE FROM {books} WHERE author = @Author"),
            params!("Author" => "Austen"),
        )
        .await
        .unwrap();
    assert_eq!(count, 2);

    let none = db
        .execute(
            &format!("DELETE FROM {books} WHERE author = @Author"),
            params!("Author" => "Austen"),
        )
        .await
        .unwrap();
    assert_eq!(none, 0);
}

async fn extra_columns_are_ignored(test: &mut DbTest) {
    let (db, books) = seed(test).await;

    let found: Option<Book> = db
        .query_single(
            &format!("SELECT b.*, 'x' AS note FROM {books} b WHERE id = @Id"),
            params!("Id" => 1i64),
        )
        .await
        .unwrap();

    assert_eq!(found, Some(book(1, "Dune", "Herbert", 412)));
}

async fn missing_column_is_reported(test: &mut DbTest) {
    let (db, books) = seed(test).await;

    let err = assert_err!(
        db.query_single::<Book>(
            &format!("SELECT id, title FROM {books} WHERE id = @Id"),
            params!("Id" => 1i64),
        )
        .await
    );
    assert!(err.is_missing_column(), "{err}");
}

tests!(
    query_single_one_row,
    query_single_no_row,
    query_single_many_rows,
    query_many_rows,
    query_many_empty,
    repeated_placeholder,
    literal_at_sign_is_not_a_placeholder,
    execute_reports_affected_rows,
    extra_columns_are_ignored,
    missing_column_is_reported,
);
