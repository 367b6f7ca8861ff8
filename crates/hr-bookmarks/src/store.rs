//! # Bookmark Store
//!
//! Owns the bookmarked employee list and mirrors it to a storage backend.

use hr_domain::Employee;

use crate::backend::StorageBackend;
use crate::error::Result;

/// Storage key the bookmark list is persisted under
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Bookmarked employees, in the order they were added.
///
/// The list is read from the backend once in [`BookmarkStore::load`] and
/// rewritten in full after every successful mutation. Reads never touch
/// the backend.
#[derive(Debug)]
pub struct BookmarkStore<B> {
    backend: B,
    key: String,
    bookmarks: Vec<Employee>,
}

impl<B: StorageBackend> BookmarkStore<B> {
    /// Load bookmarks stored under [`BOOKMARKS_KEY`].
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read. Corrupted stored
    /// data is not an error: it is logged and replaced by an empty list.
    pub fn load(backend: B) -> Result<Self> {
        Self::load_with_key(backend, BOOKMARKS_KEY)
    }

    /// Load bookmarks stored under a custom key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the key is invalid.
    pub fn load_with_key(backend: B, key: &str) -> Result<Self> {
        let bookmarks = match backend.get(key)? {
            Some(raw) => match serde_json::from_str::<Vec<Employee>>(&raw) {
                Ok(list) => list,
                Err(err) => {
                    tracing::warn!(key, error = %err, "Failed to parse bookmarks, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        tracing::debug!(key, count = bookmarks.len(), "Loaded bookmarks");

        Ok(Self {
            backend,
            key: key.to_string(),
            bookmarks,
        })
    }

    /// Bookmarked employees in insertion order
    pub fn bookmarks(&self) -> &[Employee] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn contains(&self, employee_id: u32) -> bool {
        self.bookmarks.iter().any(|e| e.id() == employee_id)
    }

    pub fn get(&self, employee_id: u32) -> Option<&Employee> {
        self.bookmarks.iter().find(|e| e.id() == employee_id)
    }

    /// Bookmark an employee. Returns `false` if already bookmarked.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails; the in-memory list is left
    /// unchanged in that case.
    pub fn add(&mut self, employee: Employee) -> Result<bool> {
        if self.contains(employee.id()) {
            return Ok(false);
        }
        let id = employee.id();
        self.bookmarks.push(employee);
        if let Err(err) = self.persist() {
            self.bookmarks.pop();
            return Err(err);
        }
        tracing::info!(employee_id = id, total = self.bookmarks.len(), "Bookmark added");
        Ok(true)
    }

    /// Remove a bookmark. Returns `false` if the id was not bookmarked.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails; the in-memory list is left
    /// unchanged in that case.
    pub fn remove(&mut self, employee_id: u32) -> Result<bool> {
        let Some(pos) = self.bookmarks.iter().position(|e| e.id() == employee_id) else {
            return Ok(false);
        };
        let removed = self.bookmarks.remove(pos);
        if let Err(err) = self.persist() {
            self.bookmarks.insert(pos, removed);
            return Err(err);
        }
        tracing::info!(employee_id, total = self.bookmarks.len(), "Bookmark removed");
        Ok(true)
    }

    /// Flip the bookmark state of an employee. Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn toggle(&mut self, employee: Employee) -> Result<bool> {
        if self.contains(employee.id()) {
            self.remove(employee.id()).map(|_| false)
        } else {
            self.add(employee)
        }
    }

    /// Remove every bookmark.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn clear(&mut self) -> Result<()> {
        if self.bookmarks.is_empty() {
            return Ok(());
        }
        let previous = std::mem::take(&mut self.bookmarks);
        if let Err(err) = self.persist() {
            self.bookmarks = previous;
            return Err(err);
        }
        Ok(())
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.bookmarks)?;
        self.backend.set(&self.key, &raw)
    }
}
