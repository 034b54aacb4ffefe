use super::*;

/// Tests recruitment history joins each application with its recruitment.
///
/// Expected: the user's application with the recruitment's role
#[tokio::test]
async fn joins_applications_with_recruitments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = factory::helpers::create_team_with_leader(db).await?;
    let recruitment = factory::recruitment::RecruitmentFactory::new(db, team.id)
        .role("Designer")
        .open(true)
        .build()
        .await?;
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let application =
        factory::recruitment::create_application(db, recruitment.id, user.id).await?;
    factory::recruitment::create_application(db, recruitment.id, other.id).await?;

    let rows = HistoryRepository::new(db)
        .recruitment_applications(user.id)
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id, application.id);
    let joined = rows[0].1.as_ref().unwrap();
    assert_eq!(joined.role, "Designer");
    assert_eq!(joined.team_id, team.id);

    Ok(())
}
