use super::*;

/// Tests creating a team with capacity below 1.
///
/// Expected: Err(AppError::BadRequest), no team persisted
#[tokio::test]
async fn rejects_zero_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let result = TeamService::new(db)
        .create(CreateTeamParams {
            owner_id: owner.id,
            name: "Alpha".to_string(),
            description: String::new(),
            capacity: 0,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Team::find().count(db).await?, 0);

    Ok(())
}

/// Tests the creator is the sole leader in the team details.
///
/// Expected: Ok with one member, the creator, flagged as leader
#[tokio::test]
async fn creator_is_sole_leader() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let service = TeamService::new(db);
    let team = service
        .create(CreateTeamParams {
            owner_id: owner.id,
            name: " Alpha ".to_string(),
            description: String::new(),
            capacity: 4,
        })
        .await?;

    assert_eq!(team.name, "Alpha");

    let details = service.get_details(team.id).await?;
    assert_eq!(details.members.len(), 1);
    assert_eq!(details.leader_id(), Some(owner.id));

    assert!(matches!(
        service.get_details(team.id + 100).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
