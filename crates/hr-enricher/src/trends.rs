//! Mock bookmark trend series for the analytics line chart.

use hr_domain::{BookmarkTrends, Department, TrendSeries};
use rand::Rng;

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Six months of bookmark counts per department, each in 1-10.
pub fn generate_bookmark_trends<R: Rng>(rng: &mut R) -> BookmarkTrends {
    let datasets = Department::ALL
        .iter()
        .map(|dept| TrendSeries {
            label: dept.to_string(),
            data: MONTHS.iter().map(|_| rng.gen_range(1..=10)).collect(),
        })
        .collect();

    BookmarkTrends {
        labels: MONTHS.iter().map(ToString::to_string).collect(),
        datasets,
    }
}
