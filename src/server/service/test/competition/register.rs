use super::*;

/// Tests an individual registration moves from pending to accepted exactly once.
///
/// Expected: pending, accepted, then Err(AppError::NoEffect)
#[tokio::test]
async fn accepts_registration_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, competition) = factory::helpers::create_competition_with_owner(db, false).await?;
    let user = factory::create_user(db).await?;

    let service = CompetitionService::new(db);
    let registration = service.register(individual(competition.id, user.id)).await?;

    assert_eq!(registration.status, AcceptanceStatus::Pending);
    assert_eq!(registration.registrant, Registrant::User(user.id));

    let accepted = service
        .decide(registration.id, owner.id, Decision::Accept)
        .await?;
    assert_eq!(accepted.status, AcceptanceStatus::Accepted);

    assert!(matches!(
        service
            .decide(registration.id, owner.id, Decision::Accept)
            .await,
        Err(AppError::NoEffect(_))
    ));

    let registrations = service.get_registrations(competition.id, owner.id).await?;
    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].status, AcceptanceStatus::Accepted);

    Ok(())
}

/// Tests a second registration by the same user.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_registration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, competition) = factory::helpers::create_competition_with_owner(db, false).await?;
    let user = factory::create_user(db).await?;

    let service = CompetitionService::new(db);
    service.register(individual(competition.id, user.id)).await?;

    assert!(matches!(
        service.register(individual(competition.id, user.id)).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests registering to a closed competition creates nothing.
///
/// Expected: Err(AppError::PeriodClosed), no registration rows
#[tokio::test]
async fn closed_competition_rejects_registration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let competition = factory::create_competition(db, owner.id).await?;
    let user = factory::create_user(db).await?;

    let result = CompetitionService::new(db)
        .register(individual(competition.id, user.id))
        .await;

    assert!(matches!(result, Err(AppError::PeriodClosed(_))));
    assert_eq!(
        entity::prelude::CompetitionRegistration::find()
            .count(db)
            .await?,
        0
    );

    Ok(())
}

/// Tests an individual competition refuses a team id.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn individual_competition_rejects_team_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, competition) = factory::helpers::create_competition_with_owner(db, false).await?;
    let (leader, team) = factory::helpers::create_team_with_leader(db).await?;

    let result = CompetitionService::new(db)
        .register(RegisterParams {
            competition_id: competition.id,
            requester_id: leader.id,
            team_id: Some(team.id),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests only the owner can decide or list registrations.
///
/// Expected: Err(AppError::Unauthorized) for the registrant
#[tokio::test]
async fn non_owner_cannot_decide() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, competition) = factory::helpers::create_competition_with_owner(db, false).await?;
    let user = factory::create_user(db).await?;

    let service = CompetitionService::new(db);
    let registration = service.register(individual(competition.id, user.id)).await?;

    assert!(matches!(
        service
            .decide(registration.id, user.id, Decision::Reject)
            .await,
        Err(AppError::Unauthorized(_))
    ));
    assert!(matches!(
        service.get_registrations(competition.id, user.id).await,
        Err(AppError::Unauthorized(_))
    ));

    Ok(())
}
