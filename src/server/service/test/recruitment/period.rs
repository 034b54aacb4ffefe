use super::*;

/// Tests opening and closing report NoEffect when already in that state.
///
/// Expected: open, NoEffect, close, NoEffect
#[tokio::test]
async fn toggles_period_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, team) = factory::helpers::create_team_with_leader(db).await?;
    let recruitment = factory::create_recruitment(db, team.id).await?;

    let service = RecruitmentService::new(db);

    assert!(service.open_period(recruitment.id, leader.id).await?.is_open);
    assert!(matches!(
        service.open_period(recruitment.id, leader.id).await,
        Err(AppError::NoEffect(_))
    ));
    assert!(!service.close_period(recruitment.id, leader.id).await?.is_open);
    assert!(matches!(
        service.close_period(recruitment.id, leader.id).await,
        Err(AppError::NoEffect(_))
    ));

    Ok(())
}

/// Tests a non-leader cannot open the period.
///
/// Expected: Err(AppError::Unauthorized), recruitment stays closed
#[tokio::test]
async fn non_leader_cannot_open() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = factory::helpers::create_team_with_leader(db).await?;
    let recruitment = factory::create_recruitment(db, team.id).await?;
    let stranger = factory::create_user(db).await?;

    let service = RecruitmentService::new(db);

    assert!(matches!(
        service.open_period(recruitment.id, stranger.id).await,
        Err(AppError::Unauthorized(_))
    ));
    assert!(!service.get(recruitment.id).await?.is_open);

    Ok(())
}
