use storage::repository::CredentialRepository;
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_persists_token() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.load_token().await.unwrap(), None);

    repo.save_token("bearer-token-1").await.unwrap();
    assert_eq!(
        repo.load_token().await.unwrap(),
        Some("bearer-token-1".to_string())
    );
}

#[tokio::test]
async fn sqlite_replaces_existing_token() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_replace?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.save_token("old").await.unwrap();
    repo.save_token("new").await.unwrap();

    assert_eq!(repo.load_token().await.unwrap(), Some("new".to_string()));
}

#[tokio::test]
async fn sqlite_clear_discards_token() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_clear?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.save_token("doomed").await.unwrap();
    repo.clear_token().await.unwrap();
    assert_eq!(repo.load_token().await.unwrap(), None);

    // Clearing again is a no-op, not an error.
    repo.clear_token().await.unwrap();
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");
}
