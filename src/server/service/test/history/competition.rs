use super::*;

/// Tests competition history covers individual and team registrations.
///
/// Expected: both entries in registration order, with the team id on the team entry
#[tokio::test]
async fn includes_team_registrations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let solo = factory::competition::CompetitionFactory::new(db, owner.id)
        .name("Solo Cup")
        .build()
        .await?;
    let relay = factory::competition::CompetitionFactory::new(db, owner.id)
        .name("Relay")
        .is_team(true)
        .build()
        .await?;

    let (_, team) = factory::helpers::create_team_with_leader(db).await?;
    let member = factory::create_user(db).await?;
    factory::add_member(db, team.id, member.id).await?;

    factory::competition::create_registration(db, solo.id, Some(member.id), None, "accepted")
        .await?;
    factory::competition::create_team_registration(db, relay.id, team.id).await?;

    let history = HistoryService::new(db).competition_history(member.id).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].competition_name, "Solo Cup");
    assert_eq!(history[0].team_id, None);
    assert_eq!(history[0].status, AcceptanceStatus::Accepted);
    assert_eq!(history[1].competition_name, "Relay");
    assert_eq!(history[1].team_id, Some(team.id));
    assert_eq!(history[1].status, AcceptanceStatus::Pending);

    Ok(())
}

/// Tests a user without registrations.
///
/// Expected: empty history
#[tokio::test]
async fn empty_without_registrations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let competition = factory::create_competition(db, other.id).await?;
    factory::competition::create_user_registration(db, competition.id, other.id).await?;

    let history = HistoryService::new(db).competition_history(user.id).await?;

    assert!(history.is_empty());

    Ok(())
}
