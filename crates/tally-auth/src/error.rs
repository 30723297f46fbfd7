use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid provider URL: {0}")]
    InvalidUrl(String),
}
