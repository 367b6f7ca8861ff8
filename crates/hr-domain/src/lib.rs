//! # HR Dashboard - Domain Model
//!
//! Core domain entities, value objects, and enums for the HR dashboard.
//! These types are the single source of truth across all layers: record
//! enrichment, the query engine, bookmark persistence, and presentation.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// RATING SCALE
// =============================================================================

/// Lowest selectable performance rating
pub const MIN_RATING: u8 = 1;

/// Highest selectable performance rating
pub const MAX_RATING: u8 = 5;

/// Rating assigned when a record carries no current rating.
/// Sits outside the scale so it never matches a rating filter.
pub const UNRATED: u8 = 0;

/// Check that a rating lies on the 1-5 scale
pub fn validate_rating(rating: u8) -> Result<u8, DomainError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(DomainError::InvalidRating(rating))
    }
}

// =============================================================================
// DEPARTMENTS
// =============================================================================

/// Department an employee belongs to.
///
/// The eight named variants form the closed category set shared by the
/// enricher, the query engine and the analytics views. Labels outside
/// that set survive deserialization as [`Department::Other`] so that a
/// malformed record can still be loaded; it simply never matches a
/// department filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Department {
    Engineering,
    Marketing,
    Finance,
    HumanResources,
    Sales,
    Product,
    Design,
    Operations,
    Other(String),
}

impl Department {
    /// Every known department, in display order
    pub const ALL: [Self; 8] = [
        Self::Engineering,
        Self::Marketing,
        Self::Finance,
        Self::HumanResources,
        Self::Sales,
        Self::Product,
        Self::Design,
        Self::Operations,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Engineering => "Engineering",
            Self::Marketing => "Marketing",
            Self::Finance => "Finance",
            Self::HumanResources => "Human Resources",
            Self::Sales => "Sales",
            Self::Product => "Product",
            Self::Design => "Design",
            Self::Operations => "Operations",
            Self::Other(label) => label,
        }
    }

    /// Whether this department belongs to the known category set
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Exact label match; stored records must carry the canonical spelling.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().find(|dept| dept.as_str() == label).cloned()
    }

    fn from_label_ignore_case(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|dept| dept.as_str().eq_ignore_ascii_case(label))
            .cloned()
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Department {
    fn from(label: String) -> Self {
        Self::from_label(&label).unwrap_or(Self::Other(label))
    }
}

impl From<Department> for String {
    fn from(dept: Department) -> Self {
        match dept {
            Department::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Strict parse for user input: only labels from the known set are
/// accepted, in any letter case.
impl FromStr for Department {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label_ignore_case(s.trim()).ok_or_else(|| DomainError::UnknownDepartment(s.to_string()))
    }
}

// =============================================================================
// ENUMS
// =============================================================================

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Planned => "Planned",
        }
    }
}

/// Feedback category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackType {
    Positive,
    Constructive,
    Recognition,
}

impl FeedbackType {
    pub const ALL: [Self; 3] = [Self::Positive, Self::Constructive, Self::Recognition];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Constructive => "Constructive",
            Self::Recognition => "Recognition",
        }
    }
}

/// Badge tier derived from a (possibly fractional) rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    Outstanding,
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl PerformanceTier {
    #[must_use]
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.5 {
            Self::Outstanding
        } else if rating >= 3.5 {
            Self::Excellent
        } else if rating >= 2.5 {
            Self::Good
        } else if rating >= 1.5 {
            Self::Average
        } else {
            Self::NeedsImprovement
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

// =============================================================================
// RAW USER (record source shape)
// =============================================================================

/// Postal address attached to a user or company
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// Employer details as reported by the user API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub department: String,
    pub name: String,
    pub title: String,
    pub address: Address,
}

/// User as returned by the upstream users API, before HR enrichment.
/// Fields the dashboard does not use are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawUser {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub birth_date: String,
    pub image: String,
    pub address: Address,
    pub university: String,
    pub company: Company,
}

// =============================================================================
// HR ATTRIBUTES
// =============================================================================

/// A single historical performance review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceReview {
    pub rating: u8,
    pub review: String,
    pub date: NaiveDate,
}

/// Current rating plus review history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Current 1-5 rating; [`UNRATED`] when the source omitted it
    #[serde(default)]
    pub current: u8,
    #[serde(default)]
    pub history: Vec<PerformanceReview>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub status: ProjectStatus,
    pub role: String,
    pub description: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: u32,
    pub from: String,
    pub message: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: FeedbackType,
}

// =============================================================================
// ENTITY TYPES
// =============================================================================

/// Employee record: upstream identity plus enriched HR attributes.
///
/// Serializes to a flat camelCase object, which is also the persisted
/// bookmark format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(flatten)]
    pub user: RawUser,
    pub department: Department,
    #[serde(default)]
    pub performance: Performance,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub feedback: Vec<Feedback>,
    #[serde(default)]
    pub bio: String,
    pub join_date: NaiveDate,
}

impl Employee {
    pub const fn id(&self) -> u32 {
        self.user.id
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.user.first_name, self.user.last_name)
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }

    /// Current performance rating
    pub const fn rating(&self) -> u8 {
        self.performance.current
    }

    /// Badge tier for the current rating
    #[must_use]
    pub fn tier(&self) -> PerformanceTier {
        PerformanceTier::from_rating(f64::from(self.rating()))
    }
}

// =============================================================================
// QUERY/FILTER TYPES
// =============================================================================

/// Search term plus department and rating facets for one query.
///
/// Empty sets place no restriction on their predicate class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub departments: BTreeSet<Department>,
    pub ratings: BTreeSet<u8>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    #[must_use]
    pub fn with_department(mut self, dept: Department) -> Self {
        self.departments.insert(dept);
        self
    }

    #[must_use]
    pub fn with_departments(mut self, depts: impl IntoIterator<Item = Department>) -> Self {
        self.departments.extend(depts);
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.ratings.insert(rating);
        self
    }

    #[must_use]
    pub fn with_ratings(mut self, ratings: impl IntoIterator<Item = u8>) -> Self {
        self.ratings.extend(ratings);
        self
    }

    /// True when no predicate restricts the result
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.search_term.is_empty() && self.departments.is_empty() && self.ratings.is_empty()
    }

    /// Merge a partial facet update; the search term is left untouched.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(departments) = update.departments {
            self.departments = departments;
        }
        if let Some(ratings) = update.ratings {
            self.ratings = ratings;
        }
    }

    /// Clear the search term and every facet
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Partial replacement of the facet sets in a [`FilterCriteria`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub departments: Option<BTreeSet<Department>>,
    pub ratings: Option<BTreeSet<u8>>,
}

// =============================================================================
// ANALYTICS TYPES
// =============================================================================

/// One line of the bookmark trend chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub label: String,
    pub data: Vec<u32>,
}

/// Monthly bookmark counts per department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkTrends {
    pub labels: Vec<String>,
    pub datasets: Vec<TrendSeries>,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Domain-level errors
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Employee not found: {0}")]
    NotFound(u32),

    #[error("Invalid rating {0}: expected a value from 1 to 5")]
    InvalidRating(u8),

    #[error("Unknown department: {0}")]
    UnknownDepartment(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::{FirstName, LastName};
    use fake::Fake;

    fn fake_user(id: u32) -> RawUser {
        RawUser {
            id,
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            email: SafeEmail().fake(),
            ..RawUser::default()
        }
    }

    #[test]
    fn test_department_labels_round_trip() {
        for dept in Department::ALL {
            let label = dept.to_string();
            assert_eq!(Department::from(label.clone()), dept);
            assert_eq!(label.parse::<Department>().unwrap(), dept);
        }
        assert_eq!(Department::HumanResources.as_str(), "Human Resources");
    }

    #[test]
    fn test_unknown_department_is_kept_as_other() {
        let dept: Department = serde_json::from_str("\"Legal\"").unwrap();
        assert_eq!(dept, Department::Other("Legal".to_string()));
        assert!(!dept.is_known());
        assert_eq!(serde_json::to_string(&dept).unwrap(), "\"Legal\"");
        assert!("Legal".parse::<Department>().is_err());
    }

    #[test]
    fn test_miscased_label_is_not_a_known_department() {
        let dept: Department = serde_json::from_str("\"engineering\"").unwrap();
        assert_eq!(dept, Department::Other("engineering".to_string()));
        assert_eq!(serde_json::to_string(&dept).unwrap(), "\"engineering\"");

        let criteria = FilterCriteria::new().with_department(Department::Engineering);
        assert!(!criteria.departments.contains(&dept));

        assert_eq!("SALES".parse::<Department>().unwrap(), Department::Sales);
        assert_eq!(" human resources ".parse::<Department>().unwrap(), Department::HumanResources);
    }

    #[test]
    fn test_rating_validation() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(matches!(validate_rating(0), Err(DomainError::InvalidRating(0))));
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(PerformanceTier::from_rating(5.0), PerformanceTier::Outstanding);
        assert_eq!(PerformanceTier::from_rating(4.5), PerformanceTier::Outstanding);
        assert_eq!(PerformanceTier::from_rating(4.49), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::from_rating(2.5), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_rating(1.5), PerformanceTier::Average);
        assert_eq!(PerformanceTier::from_rating(1.0), PerformanceTier::NeedsImprovement);
    }

    #[test]
    fn test_employee_json_shape() {
        let employee = Employee {
            user: fake_user(7),
            department: Department::Sales,
            performance: Performance {
                current: 4,
                history: Vec::new(),
            },
            projects: vec![Project {
                id: 1,
                name: "Cloud Migration".into(),
                status: ProjectStatus::InProgress,
                role: "Lead".into(),
                description: String::new(),
                start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                end_date: None,
            }],
            feedback: Vec::new(),
            bio: String::new(),
            join_date: NaiveDate::from_ymd_opt(2021, 6, 15).unwrap(),
        };

        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["department"], "Sales");
        assert_eq!(value["joinDate"], "2021-06-15");
        assert_eq!(value["projects"][0]["status"], "In Progress");
        assert!(value["projects"][0].get("endDate").is_none());

        let back: Employee = serde_json::from_value(value).unwrap();
        assert_eq!(back, employee);
    }

    #[test]
    fn test_missing_rating_defaults_to_unrated() {
        let json = r#"{
            "id": 3,
            "firstName": "Ada",
            "lastName": "Byron",
            "email": "ada@example.com",
            "department": "Engineering",
            "joinDate": "2022-01-10",
            "someUpstreamField": true
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.rating(), UNRATED);
        assert_eq!(employee.full_name(), "Ada Byron");
        assert!(employee.projects.is_empty());
    }

    #[test]
    fn test_criteria_update_and_reset() {
        let mut criteria = FilterCriteria::new()
            .with_search("ann")
            .with_department(Department::Design)
            .with_rating(3);
        assert!(!criteria.is_unrestricted());

        criteria.apply(FilterUpdate {
            departments: None,
            ratings: Some(BTreeSet::from([4, 5])),
        });
        assert_eq!(criteria.search_term, "ann");
        assert!(criteria.departments.contains(&Department::Design));
        assert_eq!(criteria.ratings, BTreeSet::from([4, 5]));

        criteria.reset();
        assert!(criteria.is_unrestricted());
    }
}
