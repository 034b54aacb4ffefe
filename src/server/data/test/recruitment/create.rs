use super::*;

/// Tests new recruitments start closed.
///
/// Expected: Ok(Recruitment) with `is_open == false`
#[tokio::test]
async fn creates_closed_recruitment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, team) = factory::helpers::create_team_with_leader(db).await?;

    let recruitment = RecruitmentRepository::new(db)
        .create(CreateRecruitmentParams {
            team_id: team.id,
            requester_id: leader.id,
            role: "Backend".to_string(),
            description: "Rust".to_string(),
        })
        .await?;

    assert_eq!(recruitment.team_id, team.id);
    assert_eq!(recruitment.role, "Backend");
    assert!(!recruitment.is_open);

    Ok(())
}

/// Tests listing open recruitments skips closed ones.
///
/// Expected: only the open recruitment
#[tokio::test]
async fn lists_only_open_recruitments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = factory::helpers::create_team_with_leader(db).await?;
    let open = factory::recruitment::RecruitmentFactory::new(db, team.id)
        .open(true)
        .build()
        .await?;
    factory::create_recruitment(db, team.id).await?;

    let repo = RecruitmentRepository::new(db);
    let listed = repo.get_open().await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, open.id);
    assert_eq!(repo.get_by_team(team.id).await?.len(), 2);

    Ok(())
}
