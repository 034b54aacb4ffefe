use super::*;

/// Tests applying to a closed recruitment creates nothing.
///
/// Expected: Err(AppError::PeriodClosed), no application rows
#[tokio::test]
async fn closed_recruitment_rejects_applications() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = factory::helpers::create_team_with_leader(db).await?;
    let recruitment = factory::create_recruitment(db, team.id).await?;
    let applicant = factory::create_user(db).await?;

    let result = RecruitmentService::new(db)
        .apply(recruitment.id, applicant.id)
        .await;

    assert!(matches!(result, Err(AppError::PeriodClosed(_))));
    assert_eq!(
        entity::prelude::RecruitmentApplication::find()
            .count(db)
            .await?,
        0
    );

    Ok(())
}

/// Tests applying creates a pending, open application once.
///
/// Expected: Ok on the first attempt, Conflict on the second
#[tokio::test]
async fn applies_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, recruitment) = factory::helpers::create_recruitment_with_dependencies(db).await?;
    let applicant = factory::create_user(db).await?;

    let service = RecruitmentService::new(db);
    let application = service.apply(recruitment.id, applicant.id).await?;

    assert_eq!(application.status, AcceptanceStatus::Pending);
    assert!(application.is_open);
    assert!(matches!(
        service.apply(recruitment.id, applicant.id).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests a team member cannot apply to their own team.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn members_cannot_apply() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, _, recruitment) =
        factory::helpers::create_recruitment_with_dependencies(db).await?;

    let result = RecruitmentService::new(db)
        .apply(recruitment.id, leader.id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests applying to a missing recruitment.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_recruitment_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let applicant = factory::create_user(db).await?;

    let result = RecruitmentService::new(db).apply(999, applicant.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
