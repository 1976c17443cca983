use crate::file::LineFile;
use crate::repository::{Repository, RepositoryEntity, RepositoryError};
use log::debug;
use std::marker::PhantomData;

/// A [`Repository`] keeping one entity per line of a [`LineFile`].
///
/// Blank lines are skipped when loading. Entities are addressed by id; the
/// line they occupy is looked up again on every call since the file may have
/// changed in between.
pub struct LineRepository<'a, E> {
    file: &'a LineFile,
    _entity: PhantomData<fn() -> E>,
}

impl<'a, E> LineRepository<'a, E>
where
    E: RepositoryEntity<String>,
{
    /// Creates a repository over the given [`LineFile`].
    pub fn new(file: &'a LineFile) -> Self {
        LineRepository {
            file,
            _entity: PhantomData,
        }
    }

    /// Returns the file backing this repository.
    pub fn file(&self) -> &LineFile {
        self.file
    }

    /// Loads every entity together with the line it was read from.
    ///
    /// # Errors
    /// Returns [`RepositoryError::Entity`] for the first line that fails to build.
    fn records(&self) -> Result<Vec<(usize, E)>, RepositoryError> {
        let mut records = Vec::new();
        for (line, text) in self.file.read_lines()?.into_iter().enumerate() {
            if text.trim().is_empty() {
                continue;
            }

            let entity = E::build_entity(text).map_err(|e| RepositoryError::Entity {
                line,
                source: Box::new(e),
            })?;
            records.push((line, entity));
        }
        Ok(records)
    }

    fn position_of(&self, id: &E::Id) -> Result<Option<usize>, RepositoryError> {
        Ok(self
            .records()?
            .into_iter()
            .find(|(_, entity)| entity.id() == id)
            .map(|(line, _)| line))
    }

    /// Serializes `entity`, rejecting forms that would not survive a reload
    /// as exactly one line.
    fn record_of(&self, entity: &E) -> Result<String, RepositoryError> {
        let record = entity.save_entity();

        if record.trim().is_empty() {
            return Err(RepositoryError::InvalidRecord(format!(
                "entity {:?} saved as a blank line",
                entity.id()
            )));
        }

        if record.contains(&['\n', '\r'][..]) {
            return Err(RepositoryError::InvalidRecord(format!(
                "entity {:?} saved across several lines",
                entity.id()
            )));
        }

        Ok(record)
    }
}

impl<'a, E> Repository<E, String> for LineRepository<'a, E>
where
    E: RepositoryEntity<String>,
{
    fn entities(&self) -> Result<Vec<E>, RepositoryError> {
        Ok(self
            .records()?
            .into_iter()
            .map(|(_, entity)| entity)
            .collect())
    }

    fn get_by_id(&self, id: &E::Id) -> Result<Option<E>, RepositoryError> {
        Ok(self
            .records()?
            .into_iter()
            .map(|(_, entity)| entity)
            .find(|entity| entity.id() == id))
    }

    fn insert(&self, entity: &E) -> Result<bool, RepositoryError> {
        let record = self.record_of(entity)?;

        if self.position_of(entity.id())?.is_some() {
            return Ok(false);
        }

        let content = self.file.read_all()?;
        let terminator = self.file.options().terminator.as_str();

        if content.is_empty() || content.ends_with(terminator) {
            self.file.write(&record, true)?;
        } else {
            self.file.write(&format!("{terminator}{record}"), true)?;
        }

        debug!(
            "inserted entity {:?} into {}",
            entity.id(),
            self.file.path().display()
        );
        Ok(true)
    }

    fn delete(&self, entity: &E) -> Result<bool, RepositoryError> {
        let Some(line) = self.position_of(entity.id())? else {
            return Ok(false);
        };

        self.file.remove_line_at(line)?;
        debug!(
            "deleted entity {:?} from line {line} of {}",
            entity.id(),
            self.file.path().display()
        );
        Ok(true)
    }

    fn update(&self, entity: &E) -> Result<bool, RepositoryError> {
        let record = self.record_of(entity)?;

        let Some(line) = self.position_of(entity.id())? else {
            return Ok(false);
        };

        self.file.insert_line(&record, line)?;
        debug!(
            "updated entity {:?} on line {line} of {}",
            entity.id(),
            self.file.path().display()
        );
        Ok(true)
    }
}
