use super::*;

/// Tests team details list the leader first with member names.
///
/// Expected: Ok(Some(TeamDetails)) with the leader then the member
#[tokio::test]
async fn returns_roster_with_leader_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let leader = factory::user::UserFactory::new(db).name("Lead").build().await?;
    let team = factory::create_team(db, leader.id).await?;
    let member = factory::user::UserFactory::new(db).name("Member").build().await?;
    factory::add_member(db, team.id, member.id).await?;

    let details = TeamRepository::new(db).get_details(team.id).await?.unwrap();

    assert_eq!(details.team.id, team.id);
    assert_eq!(details.members.len(), 2);
    assert_eq!(details.members[0].user_id, leader.id);
    assert_eq!(details.members[0].name, "Lead");
    assert!(details.members[0].is_leader);
    assert_eq!(details.members[1].name, "Member");
    assert!(!details.members[1].is_leader);
    assert_eq!(details.leader_id(), Some(leader.id));

    Ok(())
}

/// Tests details of a nonexistent team.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(TeamRepository::new(db).get_details(999).await?.is_none());

    Ok(())
}
