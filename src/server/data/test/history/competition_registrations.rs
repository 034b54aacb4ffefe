use super::*;

/// Tests history covers individual registrations and registrations of the user's teams.
///
/// Expected: both registrations, each joined with its competition, not a stranger's
#[tokio::test]
async fn includes_team_registrations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, team) = factory::helpers::create_team_with_leader(db).await?;
    factory::add_member(db, team.id, user.id).await?;

    let (_, solo) = factory::helpers::create_competition_with_owner(db, false).await?;
    let (_, teamed) = factory::helpers::create_competition_with_owner(db, true).await?;
    let stranger = factory::create_user(db).await?;

    let individual = factory::competition::create_user_registration(db, solo.id, user.id).await?;
    let via_team =
        factory::competition::create_team_registration(db, teamed.id, team.id).await?;
    factory::competition::create_user_registration(db, solo.id, stranger.id).await?;

    let team_ids = TeamRepository::new(db).team_ids_for_user(user.id).await?;
    let rows = HistoryRepository::new(db)
        .competition_registrations(user.id, team_ids)
        .await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0.id, individual.id);
    assert_eq!(rows[0].1.as_ref().unwrap().id, solo.id);
    assert_eq!(rows[1].0.id, via_team.id);
    assert_eq!(rows[1].1.as_ref().unwrap().id, teamed.id);

    Ok(())
}

/// Tests a user without teams only sees individual registrations.
///
/// Expected: the single individual registration
#[tokio::test]
async fn works_without_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, competition) = factory::helpers::create_competition_with_owner(db, false).await?;
    factory::competition::create_user_registration(db, competition.id, user.id).await?;

    let rows = HistoryRepository::new(db)
        .competition_registrations(user.id, Vec::new())
        .await?;

    assert_eq!(rows.len(), 1);

    Ok(())
}
