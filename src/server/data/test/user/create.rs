use super::*;

/// Tests creating a user persists the user and every skill.
///
/// Expected: Ok with the user and both skills in insertion order
#[tokio::test]
async fn creates_user_with_skills() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(params("alice@example.com", &["rust", "sql"]))
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "alice@example.com");
    let skills: Vec<_> = user.skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(skills, vec!["rust", "sql"]);

    let skill_rows = entity::prelude::Skill::find().all(db).await?;
    assert_eq!(skill_rows.len(), 2);

    Ok(())
}

/// Tests creating a user with an email already in use fails and rolls back.
///
/// Expected: Err from the unique index, no extra skill rows
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("alice@example.com", &[])).await?;

    let result = repo.create(params("alice@example.com", &["rust"])).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Skill::find().all(db).await?.len(), 0);

    Ok(())
}
