use super::*;

/// Tests creating a team makes the owner its sole leader.
///
/// Expected: Ok(Team) with exactly one member row flagged as leader
#[tokio::test]
async fn creates_team_with_owner_as_leader() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let team = TeamRepository::new(db)
        .create(CreateTeamParams {
            owner_id: owner.id,
            name: "Alpha".to_string(),
            description: "First team".to_string(),
            capacity: 4,
        })
        .await?;

    assert_eq!(team.name, "Alpha");
    assert_eq!(team.capacity, 4);

    let members = entity::prelude::TeamMember::find()
        .filter(entity::team_member::Column::TeamId.eq(team.id))
        .all(db)
        .await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id, owner.id);
    assert!(members[0].is_leader);

    Ok(())
}

/// Tests a failing leader insert rolls back the team row.
///
/// The owner id references no user, so the member insert violates its foreign key.
///
/// Expected: Err, and no team row persisted
#[tokio::test]
async fn rolls_back_when_leader_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamRepository::new(db)
        .create(CreateTeamParams {
            owner_id: 999,
            name: "Ghost".to_string(),
            description: String::new(),
            capacity: 2,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Team::find().count(db).await?, 0);

    Ok(())
}
