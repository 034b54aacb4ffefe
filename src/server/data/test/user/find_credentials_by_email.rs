use super::*;

/// Tests credentials are found by exact email.
///
/// Expected: Ok(Some(UserCredentials)) carrying the stored hash
#[tokio::test]
async fn finds_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("alice@example.com")
        .password_hash("stored-hash")
        .build()
        .await?;

    let credentials = UserRepository::new(db)
        .find_credentials_by_email("alice@example.com")
        .await?
        .unwrap();

    assert_eq!(credentials.id, user.id);
    assert_eq!(credentials.password_hash, "stored-hash");

    Ok(())
}

/// Tests an unknown email yields nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let credentials = UserRepository::new(db)
        .find_credentials_by_email("nobody@example.com")
        .await?;

    assert!(credentials.is_none());

    Ok(())
}
