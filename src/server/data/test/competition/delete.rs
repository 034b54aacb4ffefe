use super::*;

/// Tests deleting a competition removes its registrations only.
///
/// Expected: Ok(1), its registration gone, the other competition's registration kept
#[tokio::test]
async fn deletes_competition_with_registrations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, doomed) = factory::helpers::create_competition_with_owner(db, false).await?;
    let (_, kept) = factory::helpers::create_competition_with_owner(db, false).await?;
    let user = factory::create_user(db).await?;
    factory::competition::create_user_registration(db, doomed.id, user.id).await?;
    factory::competition::create_user_registration(db, kept.id, user.id).await?;

    let deleted = CompetitionRepository::new(db).delete(doomed.id).await?;

    assert_eq!(deleted, 1);
    assert_eq!(entity::prelude::Competition::find().count(db).await?, 1);
    assert_eq!(
        entity::prelude::CompetitionRegistration::find()
            .count(db)
            .await?,
        1
    );

    Ok(())
}

/// Tests the open flag toggles like recruitments.
///
/// Expected: 1 when opening a closed competition, 0 when already open
#[tokio::test]
async fn opens_closed_competition_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let competition = factory::create_competition(db, owner.id).await?;

    let repo = CompetitionRepository::new(db);

    assert_eq!(repo.set_open(competition.id, true).await?, 1);
    assert_eq!(repo.set_open(competition.id, true).await?, 0);

    Ok(())
}
