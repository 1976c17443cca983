use crate::repository::RepositoryError;
use std::fmt::Debug;

/// An entity that can travel in and out of a [`Repository`].
///
/// `S` is the representation the entity saves its state as and is rebuilt from.
pub trait RepositoryEntity<S>: Sized {
    type Id: PartialEq + Debug;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Identifies the entity within its repository.
    fn id(&self) -> &Self::Id;

    /// Snapshot of the current state.
    fn save_entity(&self) -> S;

    /// Rebuilds an entity from a snapshot produced by [`save_entity`](Self::save_entity).
    fn build_entity(data: S) -> Result<Self, Self::Error>;
}

/// A collection of entities that can be pushed to or pulled from storage.
///
/// `insert`, `delete` and `update` report whether storage changed rather than
/// failing when the entity is (or is not) already present.
pub trait Repository<E, S>
where
    E: RepositoryEntity<S>,
{
    /// All entities in storage order.
    fn entities(&self) -> Result<Vec<E>, RepositoryError>;

    /// The first entity with the given id.
    fn get_by_id(&self, id: &E::Id) -> Result<Option<E>, RepositoryError>;

    /// Adds `entity`; `false` if its id is already taken.
    fn insert(&self, entity: &E) -> Result<bool, RepositoryError>;

    /// Removes the entity with `entity`'s id; `false` if there is none.
    fn delete(&self, entity: &E) -> Result<bool, RepositoryError>;

    /// Replaces the stored entity with `entity`'s id; `false` if there is none.
    fn update(&self, entity: &E) -> Result<bool, RepositoryError>;
}
