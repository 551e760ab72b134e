//! Ordered named-vector storage.

use crate::error::{Error, Result};
use crate::vector::Vector3;

/// Longest accepted vector name, matching the on-disk token width.
pub const MAX_NAME_LEN: usize = 31;

/// A named vector held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub value: Vector3,
}

/// Returns `true` if `name` is a non-empty run of ASCII letters, digits and
/// underscores. The length bound is checked separately by [`validate_name`].
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check `name` against the naming rule and the length bound.
pub fn validate_name(name: &str) -> Result<()> {
    if !is_valid_name(name) {
        return Err(Error::InvalidName(name.to_string()));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(Error::NameTooLong {
            name: name.to_string(),
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

/// Named vectors in insertion order.
///
/// Names are unique; assigning an existing name replaces its value without
/// moving it. The store grows without bound unless a capacity limit is set,
/// in which case adding a new name to a full store fails with
/// [`Error::CapacityExceeded`].
#[derive(Debug, Clone, Default)]
pub struct VectorStore {
    entries: Vec<Entry>,
    capacity_limit: Option<usize>,
}

impl VectorStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            entries: Vec::with_capacity(limit),
            capacity_limit: Some(limit),
        }
    }

    #[must_use]
    pub const fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    /// Insert or replace the vector stored under `name`.
    pub fn set(&mut self, name: &str, value: Vector3) -> Result<()> {
        validate_name(name)?;

        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.value = value;
            return Ok(());
        }

        if let Some(capacity) = self.capacity_limit {
            if self.entries.len() >= capacity {
                return Err(Error::CapacityExceeded { capacity });
            }
        }

        self.entries.push(Entry {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Vector3> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
