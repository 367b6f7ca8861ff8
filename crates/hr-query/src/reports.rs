//! Report generation for the analytics view.

use crate::engine::{QueryEngine, RatingSum};
use crate::error::{QueryError, Result};
use hr_domain::{BookmarkTrends, Department, Employee, PerformanceTier};
use serde::{Deserialize, Serialize};

/// Bar-chart row for one department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentRow {
    pub department: Department,
    pub employee_count: usize,
    pub average_rating: f64,
    pub tier: PerformanceTier,
}

/// Analytics summary over a loaded roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub generated_at: String,
    pub total_employees: usize,
    pub average_performance: f64,
    pub total_bookmarks: usize,
    /// Share of employees bookmarked, as a percentage
    pub bookmark_share_pct: f64,
    pub departments: Vec<DepartmentRow>,
    pub bookmark_trends: Option<BookmarkTrends>,
}

impl QueryEngine {
    /// Generate the analytics report.
    pub fn generate_report(
        &self,
        employees: &[Employee],
        bookmarks: &[Employee],
        trends: Option<BookmarkTrends>,
    ) -> AnalyticsReport {
        let total_employees = employees.len();
        let mut ratings = RatingSum::default();
        for employee in employees {
            ratings.add(employee.rating());
        }
        let average_performance = ratings.mean();
        let bookmark_share_pct = if total_employees > 0 {
            (bookmarks.len() as f64 / total_employees as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };

        let departments = self
            .aggregate(employees)
            .into_iter()
            .map(|(department, stats)| DepartmentRow {
                department,
                employee_count: stats.count,
                average_rating: stats.average_rating,
                tier: PerformanceTier::from_rating(stats.average_rating),
            })
            .collect();

        AnalyticsReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            total_employees,
            average_performance,
            total_bookmarks: bookmarks.len(),
            bookmark_share_pct,
            departments,
            bookmark_trends: trends,
        }
    }

    /// Generate report as JSON string.
    pub fn generate_report_json(
        &self,
        employees: &[Employee],
        bookmarks: &[Employee],
        trends: Option<BookmarkTrends>,
    ) -> Result<String> {
        let report = self.generate_report(employees, bookmarks, trends);
        serde_json::to_string_pretty(&report).map_err(QueryError::from)
    }

    /// Generate Markdown report.
    pub fn generate_report_markdown(
        &self,
        employees: &[Employee],
        bookmarks: &[Employee],
        trends: Option<BookmarkTrends>,
    ) -> String {
        let report = self.generate_report(employees, bookmarks, trends);
        render_markdown(&report)
    }
}

/// Render a report as Markdown tables.
pub fn render_markdown(report: &AnalyticsReport) -> String {
    let mut md = String::new();
    md.push_str("# HR Analytics Report\n\n");
    md.push_str(&format!("**Generated:** {}\n\n", report.generated_at));

    md.push_str("## Overview\n\n");
    md.push_str("| Metric | Value |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Total Employees | {} |\n", report.total_employees));
    md.push_str(&format!("| Average Performance | {:.2} / 5 |\n", report.average_performance));
    md.push_str(&format!(
        "| Bookmarked | {} ({:.1}% of employees) |\n",
        report.total_bookmarks, report.bookmark_share_pct
    ));
    md.push('\n');

    if !report.departments.is_empty() {
        md.push_str("## Department Performance\n\n");
        md.push_str("| Department | Employees | Avg Rating | Tier |\n");
        md.push_str("|------------|-----------|------------|------|\n");
        for row in &report.departments {
            md.push_str(&format!(
                "| {} | {} | {:.2} | {} |\n",
                row.department,
                row.employee_count,
                row.average_rating,
                if row.employee_count > 0 { row.tier.label() } else { "-" }
            ));
        }
        md.push('\n');
    }

    if let Some(ref trends) = report.bookmark_trends {
        md.push_str("## Bookmark Trends\n\n");
        md.push_str("| Department |");
        for label in &trends.labels {
            md.push_str(&format!(" {label} |"));
        }
        md.push('\n');
        md.push_str("|------------|");
        for _ in &trends.labels {
            md.push_str("-----|");
        }
        md.push('\n');
        for series in &trends.datasets {
            md.push_str(&format!("| {} |", series.label));
            for value in &series.data {
                md.push_str(&format!(" {value} |"));
            }
            md.push('\n');
        }
        md.push('\n');
    }

    md
}
