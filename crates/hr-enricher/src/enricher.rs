//! The enrichment seam between the record source and the rest of the app.

use hr_domain::{Employee, RawUser};

/// Converts a raw upstream user into a full employee record.
///
/// Implementations may be random, fixture-based or backed by a real HR
/// system; consumers only see the resulting [`Employee`].
pub trait RecordEnricher {
    /// Enrich a single user.
    fn enrich(&mut self, user: RawUser) -> Employee;

    /// Enrich a batch, preserving input order.
    fn enrich_all(&mut self, users: Vec<RawUser>) -> Vec<Employee> {
        users.into_iter().map(|user| self.enrich(user)).collect()
    }
}

impl<E: RecordEnricher + ?Sized> RecordEnricher for Box<E> {
    fn enrich(&mut self, user: RawUser) -> Employee {
        (**self).enrich(user)
    }
}
