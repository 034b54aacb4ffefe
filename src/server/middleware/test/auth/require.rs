use super::*;

/// Tests a valid token yields the identity it carries.
///
/// Expected: Ok(AuthenticatedUser) with the token's user id and email
#[test]
fn accepts_valid_token() {
    let tokens = TokenService::new(b"secret");
    let token = tokens
        .encode(&Claims::new(42, "alice@example.com"))
        .unwrap();
    let headers = bearer(&token);

    let user = AuthGuard::new(&tokens, &headers).require().unwrap();

    assert_eq!(user.user_id, 42);
    assert_eq!(user.email, "alice@example.com");
}

/// Tests a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_header() {
    let tokens = TokenService::new(b"secret");
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&tokens, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests a non-bearer scheme is treated as a missing token.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_other_scheme() {
    let tokens = TokenService::new(b"secret");
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(&tokens, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests an expired token is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_expired_token() {
    let tokens = TokenService::new(b"secret");
    let now = chrono::Utc::now().timestamp();
    let token = tokens
        .encode(&Claims {
            sub: 42,
            email: "alice@example.com".to_string(),
            iat: now - 3600,
            exp: now - 60,
        })
        .unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(&tokens, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_foreign_signature() {
    let tokens = TokenService::new(b"secret");
    let token = TokenService::new(b"other")
        .encode(&Claims::new(42, "alice@example.com"))
        .unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(&tokens, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}
