//! Deterministic enrichment for tests and offline demos.

use std::collections::HashMap;

use chrono::NaiveDate;
use hr_domain::{Department, Employee, Performance, RawUser};

use crate::enricher::RecordEnricher;

/// Enricher with fully predictable output.
///
/// Unpinned users get `Department::ALL[id % 8]` and a rating of
/// `id % 5 + 1`. History, projects and feedback are left empty.
#[derive(Debug, Clone)]
pub struct FixtureEnricher {
    pinned: HashMap<u32, (Department, u8)>,
    join_date: NaiveDate,
}

impl FixtureEnricher {
    pub fn new() -> Self {
        Self {
            pinned: HashMap::new(),
            join_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
        }
    }

    /// Fix the department and rating assigned to one user id.
    #[must_use]
    pub fn pin(mut self, user_id: u32, department: Department, rating: u8) -> Self {
        self.pinned.insert(user_id, (department, rating));
        self
    }

    #[must_use]
    pub fn with_join_date(mut self, join_date: NaiveDate) -> Self {
        self.join_date = join_date;
        self
    }
}

impl Default for FixtureEnricher {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordEnricher for FixtureEnricher {
    fn enrich(&mut self, user: RawUser) -> Employee {
        let (department, current) = self.pinned.get(&user.id).cloned().unwrap_or_else(|| {
            let departments = Department::ALL;
            let dept = departments[user.id as usize % departments.len()].clone();
            (dept, (user.id % 5 + 1) as u8)
        });
        let bio = format!("{} works in {}.", user.first_name, department);

        Employee {
            user,
            department,
            performance: Performance {
                current,
                history: Vec::new(),
            },
            projects: Vec::new(),
            feedback: Vec::new(),
            bio,
            join_date: self.join_date,
        }
    }
}
