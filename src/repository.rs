//! Entity persistence on top of a [`LineFile`](crate::file::LineFile).
//!
//! [`RepositoryEntity`] describes something that can save its state to, and
//! rebuild itself from, a storage representation. [`Repository`] is the CRUD
//! surface over a collection of such entities. [`LineRepository`] implements
//! it by storing one entity per line of a text file.

pub mod entity;
pub mod store;

pub use entity::{Repository, RepositoryEntity};
pub use store::LineRepository;

use crate::file::LineFileError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Store(#[from] LineFileError),

    #[error("malformed entity on line {line}: {source}")]
    Entity {
        line: usize,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("invalid record: {0}")]
    InvalidRecord(String),
}
