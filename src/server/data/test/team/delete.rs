use super::*;

/// Tests deleting a team removes everything it owns.
///
/// Expected: Ok(1), and no members, recruitments, applications or team registrations left
#[tokio::test]
async fn deletes_team_and_owned_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_leader, team, recruitment) =
        factory::helpers::create_recruitment_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;
    factory::add_member(db, team.id, member.id).await?;

    let applicant = factory::create_user(db).await?;
    factory::recruitment::create_application(db, recruitment.id, applicant.id).await?;

    let (_owner, competition) = factory::helpers::create_competition_with_owner(db, true).await?;
    factory::competition::create_team_registration(db, competition.id, team.id).await?;

    let deleted = TeamRepository::new(db).delete(team.id).await?;

    assert_eq!(deleted, 1);
    assert_eq!(entity::prelude::Team::find().count(db).await?, 0);
    assert_eq!(entity::prelude::TeamMember::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Recruitment::find().count(db).await?, 0);
    assert_eq!(
        entity::prelude::RecruitmentApplication::find()
            .count(db)
            .await?,
        0
    );
    assert_eq!(
        entity::prelude::CompetitionRegistration::find()
            .count(db)
            .await?,
        0
    );
    // The competition itself is not owned by the team.
    assert_eq!(entity::prelude::Competition::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a team leaves other teams untouched.
///
/// Expected: Ok(1), the other team and its leader membership remain
#[tokio::test]
async fn leaves_other_teams_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, doomed) = factory::helpers::create_team_with_leader(db).await?;
    let (_, kept) = factory::helpers::create_team_with_leader(db).await?;

    TeamRepository::new(db).delete(doomed.id).await?;

    assert!(entity::prelude::Team::find_by_id(kept.id)
        .one(db)
        .await?
        .is_some());
    assert_eq!(
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(kept.id))
            .count(db)
            .await?,
        1
    );

    Ok(())
}

/// Tests deleting a nonexistent team.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = TeamRepository::new(db).delete(999).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
