use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinesError {
    #[error(transparent)]
    Line(#[from] crate::file::LineFileError),

    #[error(transparent)]
    Repository(#[from] crate::repository::RepositoryError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type LinesResult<T> = Result<T, LinesError>;
