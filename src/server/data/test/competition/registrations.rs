use super::*;

/// Tests registration existence is scoped to registrant and competition.
///
/// Expected: true for the registered user only
#[tokio::test]
async fn detects_existing_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, competition) = factory::helpers::create_competition_with_owner(db, false).await?;
    let (_, other_competition) =
        factory::helpers::create_competition_with_owner(db, false).await?;
    let user = factory::create_user(db).await?;

    let repo = CompetitionRepository::new(db);
    let registration = repo
        .create_registration(competition.id, Registrant::User(user.id))
        .await?;

    assert_eq!(registration.user_id, Some(user.id));
    assert_eq!(registration.team_id, None);
    assert_eq!(registration.status, "pending");

    assert!(repo
        .registration_exists(competition.id, Registrant::User(user.id))
        .await?);
    assert!(!repo
        .registration_exists(other_competition.id, Registrant::User(user.id))
        .await?);
    assert!(!repo
        .registration_exists(competition.id, Registrant::Team(user.id))
        .await?);

    Ok(())
}

/// Tests a registration decision is recorded once.
///
/// Expected: 1 then 0, status stays rejected
#[tokio::test]
async fn records_decision_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, competition) = factory::helpers::create_competition_with_owner(db, false).await?;
    let user = factory::create_user(db).await?;
    let registration =
        factory::competition::create_user_registration(db, competition.id, user.id).await?;

    let repo = CompetitionRepository::new(db);

    assert_eq!(
        repo.decide_registration(registration.id, AcceptanceStatus::Rejected)
            .await?,
        1
    );
    assert_eq!(
        repo.decide_registration(registration.id, AcceptanceStatus::Accepted)
            .await?,
        0
    );
    assert_eq!(
        repo.find_registration(registration.id)
            .await?
            .unwrap()
            .status,
        "rejected"
    );

    Ok(())
}
