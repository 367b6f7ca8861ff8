//! # Employee Loader
//!
//! Fetches raw users from a [`UserSource`] and passes them through a
//! [`RecordEnricher`] to produce employees.

use hr_domain::Employee;
use hr_enricher::RecordEnricher;

use crate::error::Result;
use crate::source::UserSource;

/// Default number of users requested by [`EmployeeLoader::load_all`]
pub const DEFAULT_LIMIT: u32 = 20;

/// Source plus enricher, wired together
pub struct EmployeeLoader<S, E> {
    source: S,
    enricher: E,
    limit: u32,
}

impl<S: UserSource, E: RecordEnricher> EmployeeLoader<S, E> {
    pub const fn new(source: S, enricher: E) -> Self {
        Self {
            source,
            enricher,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Override the number of users requested per list load
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Load and enrich the employee list.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`LoadError`](crate::LoadError); nothing is
    /// enriched when the fetch fails.
    pub async fn load_all(&mut self) -> Result<Vec<Employee>> {
        let users = self.source.fetch_users(self.limit).await.inspect_err(|err| {
            tracing::error!(limit = self.limit, error = %err, "Failed to fetch users");
        })?;

        let employees = self.enricher.enrich_all(users);
        tracing::info!(count = employees.len(), limit = self.limit, "Loaded employees");
        Ok(employees)
    }

    /// Load and enrich one employee.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`](crate::LoadError::NotFound) for an
    /// unknown id, or any other source failure.
    pub async fn load_one(&mut self, id: u32) -> Result<Employee> {
        let user = self.source.fetch_user(id).await.inspect_err(|err| {
            tracing::warn!(employee_id = id, error = %err, "Failed to fetch user");
        })?;

        let employee = self.enricher.enrich(user);
        tracing::debug!(employee_id = id, department = %employee.department, "Loaded employee");
        Ok(employee)
    }
}
