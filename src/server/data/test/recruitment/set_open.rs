use super::*;

/// Tests toggling the open flag only changes rows in the other state.
///
/// Expected: 1 when opening a closed recruitment, 0 when opening it again
#[tokio::test]
async fn changes_only_when_state_differs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = factory::helpers::create_team_with_leader(db).await?;
    let recruitment = factory::create_recruitment(db, team.id).await?;

    let repo = RecruitmentRepository::new(db);

    assert_eq!(repo.set_open(recruitment.id, true).await?, 1);
    assert_eq!(repo.set_open(recruitment.id, true).await?, 0);
    assert!(repo.find_by_id(recruitment.id).await?.unwrap().is_open);

    assert_eq!(repo.set_open(recruitment.id, false).await?, 1);
    assert!(!repo.find_by_id(recruitment.id).await?.unwrap().is_open);

    Ok(())
}
