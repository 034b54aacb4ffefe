use super::*;

/// Tests logging in with correct credentials issues a decodable token.
///
/// Expected: Ok(AccessToken) whose claims carry the user id and email
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(b"secret");

    let service = AuthService::new(db, &tokens);
    let user = service
        .register(registration("alice@example.com", &[]))
        .await?;

    let token = service
        .login("alice@example.com".to_string(), "correct horse".to_string())
        .await?;

    let claims = tokens.decode(&token.token)?;
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.email, "alice@example.com");
    assert_eq!(token.expires_in, 30 * 60);

    let dto = token.into_dto();
    assert_eq!(dto.token_type, "Bearer");

    Ok(())
}

/// Tests a correct email with the wrong password never yields a token.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(b"secret");

    let service = AuthService::new(db, &tokens);
    service
        .register(registration("alice@example.com", &[]))
        .await?;

    let result = service
        .login("alice@example.com".to_string(), "wrong".to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests an unknown email gets the same error as a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(b"secret");

    let result = AuthService::new(db, &tokens)
        .login("nobody@example.com".to_string(), "whatever".to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
