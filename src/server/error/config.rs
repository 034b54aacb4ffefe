use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed.
    #[error("Invalid value for environment variable {0}: '{1}'")]
    InvalidEnvVar(String, String),

    /// Allowed CORS origin is not a valid header value.
    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
}
