//! Integration tests for User repository.

mod common;

use kodestudio_db::{UpdateUserInput, UserRepository};
use kodestudio_shared::types::UserId;

#[tokio::test]
async fn test_user_create_and_find() {
    let Some(db) = common::connect().await else {
        return;
    };
    let repo = UserRepository::new(db);
    let username = common::unique_username("user");

    let user = repo
        .create(&username, "$argon2id$test_hash")
        .await
        .expect("Failed to create user");
    assert_eq!(user.username, username);

    let by_id = repo
        .find_by_id(UserId::from_uuid(user.id))
        .await
        .expect("Failed to find user")
        .expect("User should exist");
    assert_eq!(by_id.id, user.id);

    let by_name = repo
        .find_by_username(&username)
        .await
        .expect("Failed to find user")
        .expect("User should exist");
    assert_eq!(by_name.id, user.id);
}

#[tokio::test]
async fn test_username_exists_and_is_unique() {
    let Some(db) = common::connect().await else {
        return;
    };
    let repo = UserRepository::new(db);
    let username = common::unique_username("dup");

    assert!(!repo.username_exists(&username).await.unwrap());
    repo.create(&username, "$argon2id$a").await.unwrap();
    assert!(repo.username_exists(&username).await.unwrap());

    let second = repo.create(&username, "$argon2id$b").await;
    assert!(second.is_err(), "duplicate username must be rejected");
}

#[tokio::test]
async fn test_user_update_profile() {
    let Some(db) = common::connect().await else {
        return;
    };
    let repo = UserRepository::new(db);
    let user = repo
        .create(&common::unique_username("upd"), "$argon2id$old")
        .await
        .unwrap();
    let renamed = common::unique_username("renamed");

    let updated = repo
        .update(
            UserId::from_uuid(user.id),
            UpdateUserInput {
                username: Some(renamed.clone()),
                password_hash: None,
            },
        )
        .await
        .unwrap()
        .expect("User should exist");

    assert_eq!(updated.username, renamed);
    assert_eq!(updated.password_hash, "$argon2id$old");

    let missing = repo
        .update(UserId::new(), UpdateUserInput::default())
        .await
        .unwrap();
    assert!(missing.is_none());
}
