//! Query engine: text search, facet filters and per-department aggregates.
//!
//! Every operation is a pure function of its inputs. Records are borrowed,
//! never mutated, and results are allocated per call, so the engine can be
//! shared freely across threads.

use std::collections::{BTreeMap, HashSet};

use hr_domain::{Department, Employee, FilterCriteria, MAX_RATING, MIN_RATING, UNRATED};
use serde::{Deserialize, Serialize};

/// Count and mean rating for one department.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub count: usize,
    /// Mean current rating rounded to 2 decimals; `0.0` when `count == 0`
    pub average_rating: f64,
}

/// Whether a single record satisfies every predicate class in `criteria`.
pub fn matches(employee: &Employee, criteria: &FilterCriteria) -> bool {
    matches_search(employee, &criteria.search_term)
        && matches_department(employee, criteria)
        && matches_rating(employee, criteria)
}

fn matches_search(employee: &Employee, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {} {}",
        employee.user.first_name,
        employee.user.last_name,
        employee.user.email,
        employee.department
    )
    .to_lowercase();
    haystack.contains(&term.to_lowercase())
}

fn matches_department(employee: &Employee, criteria: &FilterCriteria) -> bool {
    criteria.departments.is_empty()
        || (employee.department.is_known() && criteria.departments.contains(&employee.department))
}

fn matches_rating(employee: &Employee, criteria: &FilterCriteria) -> bool {
    criteria.ratings.is_empty() || criteria.ratings.contains(&employee.rating())
}

/// Records satisfying `criteria`, in their original relative order.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a Employee>
where
    I: IntoIterator<Item = &'a Employee>,
{
    records
        .into_iter()
        .filter(|employee| matches(employee, criteria))
        .collect()
}

/// Distinct departments present in `records`, in first-seen order.
pub fn available_departments<'a, I>(records: I) -> Vec<Department>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut seen = HashSet::new();
    let mut departments = Vec::new();
    for employee in records {
        if seen.insert(&employee.department) {
            departments.push(employee.department.clone());
        }
    }
    departments
}

/// The fixed rating scale offered as a facet, independent of the data.
pub fn available_ratings() -> Vec<u8> {
    (MIN_RATING..=MAX_RATING).collect()
}

/// Per-category count and average rating.
///
/// Every category in `categories` is present in the result, including
/// those with no matching records. Unrated records count as members but
/// are left out of the mean.
pub fn aggregate_by_category<'a, I>(
    records: I,
    categories: &[Department],
) -> BTreeMap<Department, CategoryStats>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut totals: BTreeMap<&Department, (usize, RatingSum)> = categories
        .iter()
        .map(|dept| (dept, (0, RatingSum::default())))
        .collect();

    for employee in records {
        if let Some((count, sum)) = totals.get_mut(&employee.department) {
            *count += 1;
            sum.add(employee.rating());
        }
    }

    totals
        .into_iter()
        .map(|(dept, (count, sum))| {
            let average_rating = sum.mean();
            (
                dept.clone(),
                CategoryStats {
                    count,
                    average_rating,
                },
            )
        })
        .collect()
}

/// Running total of ratings, skipping [`UNRATED`].
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RatingSum {
    total: u64,
    rated: usize,
}

impl RatingSum {
    pub(crate) fn add(&mut self, rating: u8) {
        if rating != UNRATED {
            self.total += u64::from(rating);
            self.rated += 1;
        }
    }

    /// Mean of the rated values rounded to 2 decimals; `0.0` when none.
    pub(crate) fn mean(self) -> f64 {
        if self.rated == 0 {
            0.0
        } else {
            round2(self.total as f64 / self.rated as f64)
        }
    }
}

/// Round to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Query engine bound to a category set.
///
/// Holds configuration only; no records are retained between calls.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    categories: Vec<Department>,
}

impl QueryEngine {
    /// Engine over the full known department set.
    pub fn new() -> Self {
        Self::with_categories(Department::ALL.to_vec())
    }

    /// Engine aggregating over a custom category set.
    pub fn with_categories(categories: Vec<Department>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Department] {
        &self.categories
    }

    pub fn filter<'a>(&self, records: &'a [Employee], criteria: &FilterCriteria) -> Vec<&'a Employee> {
        let result = filter(records, criteria);
        tracing::debug!(
            total = records.len(),
            matched = result.len(),
            search = %criteria.search_term,
            "Filtered employee records"
        );
        result
    }

    pub fn available_departments(&self, records: &[Employee]) -> Vec<Department> {
        available_departments(records)
    }

    pub fn available_ratings(&self) -> Vec<u8> {
        available_ratings()
    }

    /// Aggregate `records` over the engine's category set.
    pub fn aggregate(&self, records: &[Employee]) -> BTreeMap<Department, CategoryStats> {
        aggregate_by_category(records, &self.categories)
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::{FirstName, LastName};
    use fake::Fake;
    use hr_domain::{Performance, RawUser};

    pub(crate) fn employee(id: u32, first: &str, last: &str, dept: Department, rating: u8) -> Employee {
        Employee {
            user: RawUser {
                id,
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
                ..RawUser::default()
            },
            department: dept,
            performance: Performance {
                current: rating,
                history: Vec::new(),
            },
            projects: Vec::new(),
            feedback: Vec::new(),
            bio: String::new(),
            join_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        }
    }

    fn alice_and_bob() -> Vec<Employee> {
        vec![
            employee(1, "Alice", "Smith", Department::Engineering, 5),
            employee(2, "Bob", "Jones", Department::Sales, 2),
        ]
    }

    fn ids(records: &[&Employee]) -> Vec<u32> {
        records.iter().map(|e| e.id()).collect()
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee(1, "Alice", "Smith", Department::Engineering, 5),
            employee(2, "Bob", "Jones", Department::Sales, 2),
            employee(3, "Carol", "White", Department::Engineering, 3),
            employee(4, "Dan", "Brown", Department::Design, 4),
            employee(5, "Erin", "Black", Department::Sales, 4),
            employee(6, "Frank", "Green", Department::Other("Legal".into()), 3),
        ]
    }

    #[test]
    fn test_department_filter() {
        let records = alice_and_bob();
        let criteria = FilterCriteria::new().with_department(Department::Engineering);
        assert_eq!(ids(&filter(&records, &criteria)), vec![1]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = alice_and_bob();
        let criteria = FilterCriteria::new().with_search("bob");
        assert_eq!(ids(&filter(&records, &criteria)), vec![2]);
    }

    #[test]
    fn test_rating_filter_without_matches() {
        let records = alice_and_bob();
        let criteria = FilterCriteria::new().with_ratings([3, 4]);
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn test_aggregate_includes_empty_categories() {
        let records = alice_and_bob();
        let categories = [Department::Engineering, Department::Sales, Department::Marketing];
        let stats = aggregate_by_category(&records, &categories);

        assert_eq!(stats.len(), 3);
        assert_eq!(stats[&Department::Engineering], CategoryStats { count: 1, average_rating: 5.0 });
        assert_eq!(stats[&Department::Sales], CategoryStats { count: 1, average_rating: 2.0 });
        assert_eq!(stats[&Department::Marketing], CategoryStats { count: 0, average_rating: 0.0 });
    }

    #[test]
    fn test_unrestricted_filter_is_identity() {
        let records = roster();
        let result = filter(&records, &FilterCriteria::default());
        assert_eq!(result.len(), records.len());
        assert!(result.iter().zip(&records).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = roster();
        let criteria = FilterCriteria::new()
            .with_search("e")
            .with_departments([Department::Engineering, Department::Sales]);
        let once = filter(&records, &criteria);
        let twice = filter(once.iter().copied(), &criteria);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_filter_preserves_order() {
        let records = roster();
        let criteria = FilterCriteria::new().with_ratings([4, 5]);
        assert_eq!(ids(&filter(&records, &criteria)), vec![1, 4, 5]);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let records = roster();
        let criteria = FilterCriteria::new()
            .with_department(Department::Sales)
            .with_rating(4)
            .with_search("example.com");
        assert_eq!(ids(&filter(&records, &criteria)), vec![5]);
    }

    #[test]
    fn test_search_spans_name_email_and_department() {
        let records = roster();
        assert_eq!(ids(&filter(&records, &FilterCriteria::new().with_search("alice smith"))), vec![1]);
        assert_eq!(ids(&filter(&records, &FilterCriteria::new().with_search("DAN.BROWN@"))), vec![4]);
        assert_eq!(ids(&filter(&records, &FilterCriteria::new().with_search("design"))), vec![4]);
        assert!(filter(&records, &FilterCriteria::new().with_search("jones alice")).is_empty());
    }

    #[test]
    fn test_whitespace_term_is_matched_literally() {
        let records = roster();
        // Every haystack has separating spaces.
        assert_eq!(filter(&records, &FilterCriteria::new().with_search(" ")).len(), records.len());
        assert!(filter(&records, &FilterCriteria::new().with_search("   ")).is_empty());
    }

    #[test]
    fn test_unknown_department_never_matches_department_filter() {
        let records = roster();
        let criteria = FilterCriteria::new().with_department(Department::Other("Legal".into()));
        assert!(filter(&records, &criteria).is_empty());
    }

    fn generated_roster(n: u32) -> Vec<Employee> {
        (1..=n)
            .map(|id| {
                let mut e = employee(
                    id,
                    &FirstName().fake::<String>(),
                    &LastName().fake::<String>(),
                    Department::ALL[id as usize % Department::ALL.len()].clone(),
                    (id % 5 + 1) as u8,
                );
                e.user.email = SafeEmail().fake();
                e
            })
            .collect()
    }

    #[test]
    fn test_filter_laws_on_generated_roster() {
        let records = generated_roster(40);

        let all = filter(&records, &FilterCriteria::default());
        assert_eq!(ids(&all), records.iter().map(Employee::id).collect::<Vec<_>>());

        let criteria = FilterCriteria::new()
            .with_search("a")
            .with_departments([Department::Finance, Department::Design])
            .with_ratings([2, 3, 4]);
        let once = filter(&records, &criteria);
        let twice = filter(once.iter().copied(), &criteria);
        assert_eq!(ids(&once), ids(&twice));
        assert!(once.windows(2).all(|w| w[0].id() < w[1].id()));
        assert!(once.iter().all(|e| matches(e, &criteria)));
    }

    #[test]
    fn test_miscased_department_label_is_treated_as_unknown() {
        let mut value =
            serde_json::to_value(employee(7, "Gina", "Hart", Department::Engineering, 4)).unwrap();
        value["department"] = serde_json::json!("engineering");
        let stored: Employee = serde_json::from_value(value).unwrap();
        assert!(!stored.department.is_known());

        let records = vec![stored];
        let criteria = FilterCriteria::new().with_department(Department::Engineering);
        assert!(filter(&records, &criteria).is_empty());

        let stats = aggregate_by_category(&records, &Department::ALL);
        assert_eq!(stats[&Department::Engineering].count, 0);
        assert_eq!(available_departments(&records), vec![Department::Other("engineering".into())]);
    }

    #[test]
    fn test_unrated_members_are_excluded_from_mean() {
        let records = vec![
            employee(1, "Alice", "Smith", Department::Finance, 4),
            employee(2, "Bob", "Jones", Department::Finance, UNRATED),
            employee(3, "Cara", "Lane", Department::Product, UNRATED),
        ];
        let stats = aggregate_by_category(&records, &[Department::Finance, Department::Product]);
        assert_eq!(stats[&Department::Finance], CategoryStats { count: 2, average_rating: 4.0 });
        assert_eq!(stats[&Department::Product], CategoryStats { count: 1, average_rating: 0.0 });
    }

    #[test]
    fn test_unrated_record_never_matches_rating_filter() {
        let records = vec![employee(9, "Gail", "Stone", Department::Finance, UNRATED)];
        let criteria = FilterCriteria::new().with_ratings(available_ratings());
        assert!(filter(&records, &criteria).is_empty());
        assert_eq!(filter(&records, &FilterCriteria::default()).len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<Employee> = Vec::new();
        assert!(filter(&records, &FilterCriteria::new().with_search("x")).is_empty());
        assert!(available_departments(&records).is_empty());

        let stats = aggregate_by_category(&records, &Department::ALL);
        assert_eq!(stats.len(), Department::ALL.len());
        assert!(stats.values().all(|s| s.count == 0 && s.average_rating == 0.0));
    }

    #[test]
    fn test_available_departments_first_seen_order() {
        let records = roster();
        assert_eq!(
            available_departments(&records),
            vec![
                Department::Engineering,
                Department::Sales,
                Department::Design,
                Department::Other("Legal".into()),
            ]
        );
    }

    #[test]
    fn test_available_ratings_is_fixed_scale() {
        assert_eq!(available_ratings(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_average_rounded_once() {
        let records = vec![
            employee(1, "A", "A", Department::Product, 5),
            employee(2, "B", "B", Department::Product, 4),
            employee(3, "C", "C", Department::Product, 4),
        ];
        let stats = aggregate_by_category(&records, &[Department::Product]);
        assert_eq!(stats[&Department::Product].average_rating, 4.33);

        let reversed: Vec<Employee> = records.into_iter().rev().collect();
        let again = aggregate_by_category(&reversed, &[Department::Product]);
        assert_eq!(again, stats);
    }

    #[test]
    fn test_engine_uses_configured_categories() {
        let records = roster();
        let engine = QueryEngine::with_categories(vec![Department::Design]);
        let stats = engine.aggregate(&records);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[&Department::Design].count, 1);

        let full = QueryEngine::new().aggregate(&records);
        assert_eq!(full.len(), 8);
        assert_eq!(full[&Department::Engineering].average_rating, 4.0);
    }
}
