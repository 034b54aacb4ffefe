use super::*;

/// Tests only the leader can delete a team.
///
/// Team "Alpha" (capacity 4) is created by user 1, who is its sole leader member. User 2
/// attempts the delete and is refused with nothing removed; user 1 then deletes it.
///
/// Expected: Unauthorized for user 2, then team and members removed for user 1
#[tokio::test]
async fn only_leader_deletes_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::create_user(db).await?;
    let user2 = factory::create_user(db).await?;

    let service = TeamService::new(db);
    let team = service
        .create(CreateTeamParams {
            owner_id: user1.id,
            name: "Alpha".to_string(),
            description: String::new(),
            capacity: 4,
        })
        .await?;

    let result = service.delete(team.id, user2.id).await;
    assert!(matches!(result, Err(AppError::Unauthorized(_))));
    assert_eq!(entity::prelude::Team::find().count(db).await?, 1);
    assert_eq!(entity::prelude::TeamMember::find().count(db).await?, 1);

    service.delete(team.id, user1.id).await?;

    assert_eq!(entity::prelude::Team::find().count(db).await?, 0);
    assert_eq!(entity::prelude::TeamMember::find().count(db).await?, 0);

    Ok(())
}

/// Tests a plain member cannot delete the team either.
///
/// Expected: Err(AppError::Unauthorized)
#[tokio::test]
async fn member_cannot_delete_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = factory::helpers::create_team_with_leader(db).await?;
    let member = factory::create_user(db).await?;
    factory::add_member(db, team.id, member.id).await?;

    let result = TeamService::new(db).delete(team.id, member.id).await;

    assert!(matches!(result, Err(AppError::Unauthorized(_))));

    Ok(())
}

/// Tests deleting a nonexistent team.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_team_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = TeamService::new(db).delete(999, user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
