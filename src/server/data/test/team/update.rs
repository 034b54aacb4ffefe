use super::*;

/// Tests updating a team's fields.
///
/// Expected: Ok(1) and the new values persisted
#[tokio::test]
async fn updates_team_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, team) = factory::helpers::create_team_with_leader(db).await?;

    let repo = TeamRepository::new(db);
    let updated = repo
        .update(UpdateTeamParams {
            id: team.id,
            requester_id: leader.id,
            name: "Renamed".to_string(),
            description: "New description".to_string(),
            capacity: 6,
        })
        .await?;

    assert_eq!(updated, 1);
    let team = repo.find_by_id(team.id).await?.unwrap();
    assert_eq!(team.name, "Renamed");
    assert_eq!(team.description, "New description");
    assert_eq!(team.capacity, 6);

    Ok(())
}

/// Tests updating a nonexistent team.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = TeamRepository::new(db)
        .update(UpdateTeamParams {
            id: 999,
            requester_id: 1,
            name: "Nobody".to_string(),
            description: String::new(),
            capacity: 1,
        })
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}
