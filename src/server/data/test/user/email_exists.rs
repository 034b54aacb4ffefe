use super::*;

/// Tests email existence checks.
///
/// Expected: true for a registered email, false otherwise
#[tokio::test]
async fn reports_registered_emails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("alice@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_exists("alice@example.com").await?);
    assert!(!repo.email_exists("bob@example.com").await?);

    Ok(())
}
