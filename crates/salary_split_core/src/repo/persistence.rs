//! Persistence adapter contract and in-memory implementation.
//!
//! # Invariants
//! - `read` returning `Ok(None)` means nothing was ever written.
//! - `write` replaces the whole payload (last write wins).

use crate::db::DbError;
use std::cell::{Cell, RefCell};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PersistResult<T> = Result<T, PersistError>;

/// Failure reported by a persistence adapter.
#[derive(Debug)]
pub enum PersistError {
    Db(DbError),
    /// Backing storage refused the operation.
    Unavailable(String),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for PersistError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable storage for one serialized bucket collection.
pub trait PersistenceAdapter {
    fn read(&self) -> PersistResult<Option<String>>;
    fn write(&self, payload: &str) -> PersistResult<()>;
}

impl<T: PersistenceAdapter + ?Sized> PersistenceAdapter for &T {
    fn read(&self) -> PersistResult<Option<String>> {
        (**self).read()
    }

    fn write(&self, payload: &str) -> PersistResult<()> {
        (**self).write(payload)
    }
}

/// Process-local adapter, mainly for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    payload: RefCell<Option<String>>,
    writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `payload` as if it had been written earlier.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        let adapter = Self::default();
        adapter.payload.replace(Some(payload.into()));
        adapter
    }

    /// Current stored payload.
    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Makes subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn read(&self) -> PersistResult<Option<String>> {
        Ok(self.payload())
    }

    fn write(&self, payload: &str) -> PersistResult<()> {
        if self.fail_writes.get() {
            return Err(PersistError::Unavailable(
                "memory adapter configured to reject writes".to_string(),
            ));
        }
        self.payload.replace(Some(payload.to_string()));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryAdapter, PersistError, PersistenceAdapter};

    #[test]
    fn memory_adapter_keeps_last_write() {
        let adapter = MemoryAdapter::new();
        assert_eq!(adapter.read().unwrap(), None);

        adapter.write("[1]").unwrap();
        adapter.write("[2]").unwrap();
        assert_eq!(adapter.read().unwrap().as_deref(), Some("[2]"));
        assert_eq!(adapter.write_count(), 2);
    }

    #[test]
    fn failing_writes_leave_payload_untouched() {
        let adapter = MemoryAdapter::with_payload("[]");
        adapter.set_fail_writes(true);

        let err = (&adapter).write("[1]").unwrap_err();
        assert!(matches!(err, PersistError::Unavailable(_)));
        assert_eq!(adapter.payload().as_deref(), Some("[]"));
        assert_eq!(adapter.write_count(), 0);
    }
}
