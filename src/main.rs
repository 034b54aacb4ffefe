mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, router, service::auth::token::TokenService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let tokens = TokenService::new(config.jwt_secret.as_bytes());
    let cors = startup::setup_cors(&config)?;

    let app = router::router()
        .with_state(AppState::new(db, tokens))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    tracing::info!("Listening on {}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
