//! Integration tests for author persistence against a real SQLite database.

use authorbook::db::Store;
use authorbook::models::{Author, AuthorError, AuthorId, Field};
use sea_orm::TransactionTrait;

const HASH: &str = "0a8941b76b054c6b776b26d6cdffa3763ef39100d2b1b25230ba0a9ae7ba44540451874df11da408603831e301d8d3a6a";
const AVATAR: &str =
    "https://gravatar.com/avatar/5e4a5517ddd34103f466520ec5599317?s=400&d=robohash&r=x";

async fn spawn_store() -> Store {
    let db_path =
        std::env::temp_dir().join(format!("authorbook-test-{}.db", uuid::Uuid::new_v4()));

    Store::new(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("failed to open store")
}

fn author(email: &str, username: &str) -> Author {
    Author::new(
        AuthorId::generate(),
        Some("12345678912345678912345678912345"),
        AVATAR,
        email,
        HASH,
        username,
    )
    .expect("valid author")
}

#[tokio::test]
async fn test_insert_and_find_by_id() {
    let store = spawn_store().await;
    let author = Author::new(
        "a5c7c2f9-e8c6-4ce1-adc0-a60a0f04bff0",
        Some("12345678912345678912345678912345"),
        AVATAR,
        "fponce2@cnm.edu",
        HASH,
        "fponce2",
    )
    .unwrap();

    author.insert(&store.conn).await.unwrap();

    let found = Author::find_by_id(&store.conn, "a5c7c2f9-e8c6-4ce1-adc0-a60a0f04bff0")
        .await
        .unwrap()
        .expect("author should exist");
    assert_eq!(found, author);
    assert_eq!(found.password_hash(), HASH);

    let by_bytes = Author::find_by_id(&store.conn, *author.id().as_bytes())
        .await
        .unwrap();
    assert_eq!(by_bytes, Some(author));
}

#[tokio::test]
async fn test_find_missing_is_not_an_error() {
    let store = spawn_store().await;
    let found = Author::find_by_id(&store.conn, AuthorId::generate())
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_by_malformed_id() {
    let store = spawn_store().await;
    let err = Author::find_by_id(&store.conn, "not-an-id").await.unwrap_err();
    assert!(matches!(
        err,
        AuthorError::InvalidFormat {
            field: Field::Id,
            ..
        }
    ));
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let store = spawn_store().await;
    author("dup@cnm.edu", "first").insert(&store.conn).await.unwrap();

    let err = author("dup@cnm.edu", "second")
        .insert(&store.conn)
        .await
        .unwrap_err();
    assert!(err.is_persistence(), "{err:?}");
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let store = spawn_store().await;
    author("one@cnm.edu", "same").insert(&store.conn).await.unwrap();

    let err = author("two@cnm.edu", "same")
        .insert(&store.conn)
        .await
        .unwrap_err();
    assert!(matches!(err, AuthorError::Persistence(_)));
}

#[tokio::test]
async fn test_duplicate_id_is_rejected() {
    let store = spawn_store().await;
    let first = author("one@cnm.edu", "one");
    first.insert(&store.conn).await.unwrap();

    let mut second = author("two@cnm.edu", "two");
    second.set_id(first.id()).unwrap();
    assert!(second.insert(&store.conn).await.unwrap_err().is_persistence());
}

#[tokio::test]
async fn test_update_persists_every_field() {
    let store = spawn_store().await;
    let mut author = author("before@cnm.edu", "before");
    author.insert(&store.conn).await.unwrap();

    author.set_email("after@cnm.edu").unwrap();
    author.set_username("after").unwrap();
    author.set_avatar_url("https://example.com/a.png").unwrap();
    author.set_password_hash(&"f".repeat(97)).unwrap();
    author.set_activation_token(None).unwrap();
    assert!(author.update(&store.conn).await.unwrap());

    let found = Author::find_by_id(&store.conn, author.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, author);
    assert_eq!(found.activation_token(), None);
}

#[tokio::test]
async fn test_update_into_taken_username_fails() {
    let store = spawn_store().await;
    author("a@cnm.edu", "taken").insert(&store.conn).await.unwrap();
    let mut other = author("b@cnm.edu", "other");
    other.insert(&store.conn).await.unwrap();

    other.set_username("taken").unwrap();
    assert!(other.update(&store.conn).await.unwrap_err().is_persistence());
}

#[tokio::test]
async fn test_update_and_delete_missing_row() {
    let store = spawn_store().await;
    let ghost = author("ghost@cnm.edu", "ghost");

    assert!(!ghost.update(&store.conn).await.unwrap());
    assert!(!ghost.delete(&store.conn).await.unwrap());
}

#[tokio::test]
async fn test_delete() {
    let store = spawn_store().await;
    let author = author("gone@cnm.edu", "gone");
    author.insert(&store.conn).await.unwrap();

    assert!(author.delete(&store.conn).await.unwrap());
    assert!(
        Author::find_by_id(&store.conn, author.id())
            .await
            .unwrap()
            .is_none()
    );
    assert!(!author.delete(&store.conn).await.unwrap());
}

#[tokio::test]
async fn test_find_by_email_substring_in_order() {
    let store = spawn_store().await;
    for (email, username) in [
        ("zed@cnm.edu", "zed"),
        ("amy@cnm.edu", "amy"),
        ("bob@unm.edu", "bob"),
        ("kim@cnm.edu", "kim"),
    ] {
        author(email, username).insert(&store.conn).await.unwrap();
    }

    let emails: Vec<String> = Author::find_by_email(&store.conn, "cnm.edu")
        .await
        .unwrap()
        .map(|a| a.email().to_string())
        .collect();
    assert_eq!(emails, ["amy@cnm.edu", "kim@cnm.edu", "zed@cnm.edu"]);

    let mut none = Author::find_by_email(&store.conn, "nobody").await.unwrap();
    assert!(none.next().is_none());
}

#[tokio::test]
async fn test_find_by_email_is_case_sensitive() {
    let store = spawn_store().await;
    author("Alice@Example.com", "upper").insert(&store.conn).await.unwrap();
    author("alice@example.org", "lower").insert(&store.conn).await.unwrap();

    let lower: Vec<Author> = Author::find_by_email(&store.conn, "alice")
        .await
        .unwrap()
        .collect();
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].username(), "lower");

    let upper: Vec<Author> = Author::find_by_email(&store.conn, "Alice")
        .await
        .unwrap()
        .collect();
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].username(), "upper");
}

#[tokio::test]
async fn test_find_by_email_escapes_wildcards() {
    let store = spawn_store().await;
    author("a_b@cnm.edu", "underscore").insert(&store.conn).await.unwrap();
    author("axb@cnm.edu", "plain").insert(&store.conn).await.unwrap();
    author("100%real@cnm.edu", "percent").insert(&store.conn).await.unwrap();

    let underscore: Vec<Author> = Author::find_by_email(&store.conn, "a_b")
        .await
        .unwrap()
        .collect();
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].username(), "underscore");

    let percent: Vec<Author> = Author::find_by_email(&store.conn, "%")
        .await
        .unwrap()
        .collect();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].username(), "percent");
}

#[tokio::test]
async fn test_find_by_email_rejects_empty_search() {
    let store = spawn_store().await;
    let err = Author::find_by_email(&store.conn, "  ").await.unwrap_err();
    assert_eq!(err.field(), Some(Field::Email));
}

#[tokio::test]
async fn test_find_by_username() {
    let store = spawn_store().await;
    let author = author("named@cnm.edu", "named");
    author.insert(&store.conn).await.unwrap();

    let found = Author::find_by_username(&store.conn, " named ").await.unwrap();
    assert_eq!(found, Some(author));
    assert!(
        Author::find_by_username(&store.conn, "unnamed")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_activation_flow() {
    let store = spawn_store().await;
    let author = author("new@cnm.edu", "newbie");
    author.insert(&store.conn).await.unwrap();

    let mut pending =
        Author::find_by_activation_token(&store.conn, "12345678912345678912345678912345")
            .await
            .unwrap()
            .expect("pending author");
    assert_eq!(pending.id(), author.id());

    pending.activate();
    assert!(pending.update(&store.conn).await.unwrap());

    assert!(
        Author::find_by_activation_token(&store.conn, "12345678912345678912345678912345")
            .await
            .unwrap()
            .is_none()
    );

    let err = Author::find_by_activation_token(&store.conn, "abc")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthorError::OutOfRange { .. }));

    let err = Author::find_by_activation_token(&store.conn, "short")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthorError::InvalidFormat { .. }));
}

#[tokio::test]
async fn test_operations_run_inside_a_transaction() {
    let store = spawn_store().await;
    let author = author("txn@cnm.edu", "txn");

    let txn = store.conn.begin().await.unwrap();
    author.insert(&txn).await.unwrap();
    assert!(
        Author::find_by_id(&txn, author.id())
            .await
            .unwrap()
            .is_some()
    );
    txn.rollback().await.unwrap();

    assert!(
        Author::find_by_id(&store.conn, author.id())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_serialized_row_omits_hash() {
    let store = spawn_store().await;
    let author = author("json@cnm.edu", "json");
    author.insert(&store.conn).await.unwrap();

    let found = Author::find_by_id(&store.conn, author.id())
        .await
        .unwrap()
        .unwrap();
    let json = serde_json::to_value(&found).unwrap();

    assert_eq!(json["authorId"], author.id().to_string());
    assert!(json.get("authorHash").is_none());
}
