use super::*;

fn for_team(competition_id: i32, requester_id: i32, team_id: i32) -> RegisterParams {
    RegisterParams {
        competition_id,
        requester_id,
        team_id: Some(team_id),
    }
}

/// Tests the team leader registers a team that fits the capacity.
///
/// Expected: pending registration for the team
#[tokio::test]
async fn leader_registers_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, competition) = factory::helpers::create_competition_with_owner(db, true).await?;
    let (leader, team) = factory::helpers::create_team_with_leader(db).await?;

    let registration = CompetitionService::new(db)
        .register(for_team(competition.id, leader.id, team.id))
        .await?;

    assert_eq!(registration.registrant, Registrant::Team(team.id));
    assert_eq!(registration.status, AcceptanceStatus::Pending);

    Ok(())
}

/// Tests a team competition requires a team id.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn team_competition_requires_team_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, competition) = factory::helpers::create_competition_with_owner(db, true).await?;
    let user = factory::create_user(db).await?;

    let result = CompetitionService::new(db)
        .register(individual(competition.id, user.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a plain member cannot register their team.
///
/// Expected: Err(AppError::Unauthorized)
#[tokio::test]
async fn member_cannot_register_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, competition) = factory::helpers::create_competition_with_owner(db, true).await?;
    let (_, team) = factory::helpers::create_team_with_leader(db).await?;
    let member = factory::create_user(db).await?;
    factory::add_member(db, team.id, member.id).await?;

    let result = CompetitionService::new(db)
        .register(for_team(competition.id, member.id, team.id))
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized(_))));

    Ok(())
}

/// Tests a team larger than the competition's team capacity.
///
/// Expected: Err(AppError::BadRequest), no registration rows
#[tokio::test]
async fn rejects_team_over_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let competition = factory::competition::CompetitionFactory::new(db, owner.id)
        .is_team(true)
        .open(true)
        .team_capacity(2)
        .build()
        .await?;

    let (leader, team) = factory::helpers::create_team_with_leader(db).await?;
    for _ in 0..2 {
        let member = factory::create_user(db).await?;
        factory::add_member(db, team.id, member.id).await?;
    }

    let result = CompetitionService::new(db)
        .register(for_team(competition.id, leader.id, team.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(
        entity::prelude::CompetitionRegistration::find()
            .count(db)
            .await?,
        0
    );

    Ok(())
}

/// Tests registering a missing team.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_team_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, competition) = factory::helpers::create_competition_with_owner(db, true).await?;
    let user = factory::create_user(db).await?;

    let result = CompetitionService::new(db)
        .register(for_team(competition.id, user.id, 999))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
