use super::*;

/// Tests the applicant can withdraw, after which no decision applies.
///
/// Expected: withdrawn application, then NoEffect for withdraw and accept
#[tokio::test]
async fn applicant_withdraws() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, _, recruitment) =
        factory::helpers::create_recruitment_with_dependencies(db).await?;
    let applicant = factory::create_user(db).await?;

    let service = RecruitmentService::new(db);
    let application = service.apply(recruitment.id, applicant.id).await?;

    let withdrawn = service.withdraw(application.id, applicant.id).await?;
    assert!(!withdrawn.is_open);
    assert_eq!(withdrawn.status, AcceptanceStatus::Pending);

    assert!(matches!(
        service.withdraw(application.id, applicant.id).await,
        Err(AppError::NoEffect(_))
    ));
    assert!(matches!(
        service
            .decide(application.id, leader.id, Decision::Accept)
            .await,
        Err(AppError::NoEffect(_))
    ));

    // A withdrawn application no longer blocks a fresh one.
    service.apply(recruitment.id, applicant.id).await?;

    Ok(())
}

/// Tests nobody but the applicant can withdraw.
///
/// Expected: Err(AppError::Unauthorized) for the team leader
#[tokio::test]
async fn others_cannot_withdraw() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, _, recruitment) =
        factory::helpers::create_recruitment_with_dependencies(db).await?;
    let applicant = factory::create_user(db).await?;

    let service = RecruitmentService::new(db);
    let application = service.apply(recruitment.id, applicant.id).await?;

    assert!(matches!(
        service.withdraw(application.id, leader.id).await,
        Err(AppError::Unauthorized(_))
    ));

    Ok(())
}
