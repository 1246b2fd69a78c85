use sample_common::error::CommonError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("config error: {0}")]
    Config(String),

    #[error("sample path has too few segments: {0}")]
    SamplePath(String),

    #[error("readme could not be read: {0}")]
    UnreadableReadme(String),
}
