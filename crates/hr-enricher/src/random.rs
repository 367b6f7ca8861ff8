//! Randomized HR attribute generation.

use chrono::{Duration, Months, NaiveDate, Utc};
use hr_domain::{
    Department, Employee, Feedback, FeedbackType, Performance, PerformanceReview, Project,
    ProjectStatus, RawUser, MAX_RATING, MIN_RATING,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::enricher::RecordEnricher;

const PROJECT_NAMES: [&str; 10] = [
    "Website Redesign",
    "Mobile App Development",
    "Cloud Migration",
    "Customer Portal",
    "Data Analytics Platform",
    "Internal Dashboard",
    "Security Audit",
    "Performance Optimization",
    "Social Media Campaign",
    "Product Launch",
];

const PROJECT_ROLES: [&str; 5] = ["Lead", "Contributor", "Manager", "Consultant", "Coordinator"];

const PROJECT_DESCRIPTION: &str =
    "Project focused on improving business outcomes through strategic implementation.";

const REVIEWS: [&str; 10] = [
    "Exceeds expectations in all areas.",
    "Consistently delivers high-quality work.",
    "Meets most expectations with some areas for improvement.",
    "Shows dedication and commitment to projects.",
    "Demonstrates strong problem-solving skills.",
    "Communication skills need improvement.",
    "Excellent team player.",
    "Takes initiative on challenging tasks.",
    "Needs more focus on meeting deadlines.",
    "Shows great potential for growth.",
];

const REVIEWERS: [&str; 10] = [
    "John Smith",
    "Emily Johnson",
    "Michael Chen",
    "Sarah Williams",
    "David Rodriguez",
    "Jessica Thompson",
    "Robert Kim",
    "Amanda Davis",
    "Christopher Wilson",
    "Samantha Lee",
];

const FEEDBACK_MESSAGES: [&str; 10] = [
    "Excellent collaboration skills and technical knowledge.",
    "Always willing to help team members and contribute to projects.",
    "Should focus more on documentation and knowledge sharing.",
    "Great leadership during the recent project crisis.",
    "Needs to improve time management and meeting deadlines.",
    "Outstanding problem-solving abilities.",
    "Communication with stakeholders could be improved.",
    "Demonstrates exceptional attention to detail.",
    "Has been instrumental in team success this quarter.",
    "Shows great potential for taking on more responsibilities.",
];

/// Enricher drawing every HR attribute at random.
///
/// Dates are generated relative to `today`, which defaults to the current
/// UTC date and can be pinned for reproducible output.
#[derive(Debug, Clone)]
pub struct RandomEnricher {
    rng: StdRng,
    today: NaiveDate,
}

impl RandomEnricher {
    /// Create an enricher seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            today: Utc::now().date_naive(),
        }
    }

    /// Create a reproducible enricher.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            today: Utc::now().date_naive(),
        }
    }

    /// Generate dates relative to a fixed day.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn pick<T: Clone>(&mut self, items: &[T]) -> T {
        items[self.rng.gen_range(0..items.len())].clone()
    }

    fn rating(&mut self) -> u8 {
        self.rng.gen_range(MIN_RATING..=MAX_RATING)
    }

    fn years_ago(&self, years: u32) -> NaiveDate {
        self.today
            .checked_sub_months(Months::new(12 * years))
            .unwrap_or(self.today)
    }

    /// Uniform day in `[start, end]`.
    fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = (end - start).num_days();
        if span <= 0 {
            return start;
        }
        start + Duration::days(self.rng.gen_range(0..=span))
    }

    fn performance_history(&mut self, count: usize) -> Vec<PerformanceReview> {
        let start = self.years_ago(3);
        let mut history: Vec<PerformanceReview> = (0..count)
            .map(|_| PerformanceReview {
                rating: self.rating(),
                review: self.pick(&REVIEWS).to_string(),
                date: self.date_between(start, self.today),
            })
            .collect();
        history.sort_by(|a, b| b.date.cmp(&a.date));
        history
    }

    fn projects(&mut self, count: usize) -> Vec<Project> {
        let window_start = self.years_ago(3);
        (1..=count as u32)
            .map(|id| {
                let start_date = self.date_between(window_start, self.today);
                let end_date = self
                    .rng
                    .gen_bool(0.7)
                    .then(|| self.date_between(start_date, self.today));
                let status = match end_date {
                    Some(_) => ProjectStatus::Completed,
                    None if self.rng.gen_bool(0.5) => ProjectStatus::InProgress,
                    None => ProjectStatus::Planned,
                };
                Project {
                    id,
                    name: self.pick(&PROJECT_NAMES).to_string(),
                    status,
                    role: self.pick(&PROJECT_ROLES).to_string(),
                    description: PROJECT_DESCRIPTION.to_string(),
                    start_date,
                    end_date,
                }
            })
            .collect()
    }

    fn feedback(&mut self, count: usize) -> Vec<Feedback> {
        let start = self.years_ago(1);
        let mut feedback: Vec<Feedback> = (1..=count as u32)
            .map(|id| Feedback {
                id,
                from: self.pick(&REVIEWERS).to_string(),
                message: self.pick(&FEEDBACK_MESSAGES).to_string(),
                date: self.date_between(start, self.today),
                kind: self.pick(&FeedbackType::ALL),
            })
            .collect();
        feedback.sort_by(|a, b| b.date.cmp(&a.date));
        feedback
    }

    fn bio(&mut self, first_name: &str, department: &Department) -> String {
        match self.rng.gen_range(0..4) {
            0 => format!(
                "{first_name} has been a valued member of the {department} team since joining. \
                 With a focus on collaboration and innovation, they have contributed to numerous \
                 successful projects."
            ),
            1 => format!(
                "As a dedicated professional in the {department} department, {first_name} brings \
                 expertise and enthusiasm to every project they undertake."
            ),
            2 => format!(
                "{first_name} joined the {department} team with previous experience in the \
                 industry. Their insights and dedication have been valuable assets to the team."
            ),
            _ => format!(
                "A key member of the {department} department, {first_name} has demonstrated \
                 consistent growth and adaptability throughout their tenure."
            ),
        }
    }
}

impl Default for RandomEnricher {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordEnricher for RandomEnricher {
    fn enrich(&mut self, user: RawUser) -> Employee {
        let department = self.pick(&Department::ALL);
        let current = self.rating();
        let history_len = self.rng.gen_range(3..=7);
        let history = self.performance_history(history_len);
        let project_count = self.rng.gen_range(2..=7);
        let projects = self.projects(project_count);
        let feedback_count = self.rng.gen_range(3..=10);
        let feedback = self.feedback(feedback_count);
        let tenure_years = self.rng.gen_range(1..=5);
        let join_date = self.years_ago(tenure_years);
        let bio = self.bio(&user.first_name, &department);

        tracing::trace!(
            user_id = user.id,
            department = %department,
            rating = current,
            "Enriched user"
        );

        Employee {
            user,
            department,
            performance: Performance { current, history },
            projects,
            feedback,
            bio,
            join_date,
        }
    }
}
