use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkinGuideError {
    #[error("Profile error: {0}")]
    Profile(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Remote store error: {0}")]
    Remote(String),

    #[error("Scan error: {0}")]
    Scan(String),
}

impl From<SkinGuideError> for String {
    fn from(err: SkinGuideError) -> Self {
        err.to_string()
    }
}
