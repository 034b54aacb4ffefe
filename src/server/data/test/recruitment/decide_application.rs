use super::*;

/// Tests a decision is recorded once and closes the application.
///
/// Expected: 1 on the first decision, 0 on any later one, status stays accepted
#[tokio::test]
async fn records_decision_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, recruitment) = factory::helpers::create_recruitment_with_dependencies(db).await?;
    let applicant = factory::create_user(db).await?;
    let application =
        factory::recruitment::create_application(db, recruitment.id, applicant.id).await?;

    let repo = RecruitmentRepository::new(db);

    assert_eq!(
        repo.decide_application(application.id, AcceptanceStatus::Accepted)
            .await?,
        1
    );
    assert_eq!(
        repo.decide_application(application.id, AcceptanceStatus::Rejected)
            .await?,
        0
    );

    let stored = repo.find_application(application.id).await?.unwrap();
    assert_eq!(stored.status, "accepted");
    assert!(!stored.is_open);

    Ok(())
}

/// Tests a withdrawn application can no longer be decided.
///
/// Expected: withdraw returns 1, later decision returns 0, status stays pending
#[tokio::test]
async fn skips_withdrawn_application() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, recruitment) = factory::helpers::create_recruitment_with_dependencies(db).await?;
    let applicant = factory::create_user(db).await?;
    let application =
        factory::recruitment::create_application(db, recruitment.id, applicant.id).await?;

    let repo = RecruitmentRepository::new(db);

    assert_eq!(repo.withdraw_application(application.id).await?, 1);
    assert_eq!(repo.withdraw_application(application.id).await?, 0);
    assert_eq!(
        repo.decide_application(application.id, AcceptanceStatus::Accepted)
            .await?,
        0
    );

    let stored = repo.find_application(application.id).await?.unwrap();
    assert_eq!(stored.status, "pending");
    assert!(!stored.is_open);

    Ok(())
}
