//! Terminal rendering for employee cards, detail views and facets.

use std::fmt::Write;

use hr_domain::{Department, Employee, MAX_RATING};

const FULL_STAR: char = '★';
const HALF_STAR: char = '⯨';
const EMPTY_STAR: char = '☆';

/// Render a rating as `max` stars with half-star granularity.
pub fn render_stars(rating: f64, max: u8) -> String {
    let rounded = (rating.clamp(0.0, f64::from(max)) * 2.0).round() / 2.0;
    (1..=max)
        .map(|position| {
            let position = f64::from(position);
            if position <= rounded {
                FULL_STAR
            } else if position - 0.5 <= rounded {
                HALF_STAR
            } else {
                EMPTY_STAR
            }
        })
        .collect()
}

/// Two-line summary card.
pub fn employee_card(employee: &Employee, bookmarked: bool) -> String {
    let mut card = format!(
        "#{:<4} {}  <{}>",
        employee.id(),
        employee.full_name(),
        employee.email()
    );
    if bookmarked {
        card.push_str("  [bookmarked]");
    }
    let _ = write!(
        card,
        "\n      {} | {} ({}/{}) | {}",
        employee.department,
        render_stars(f64::from(employee.rating()), MAX_RATING),
        employee.rating(),
        MAX_RATING,
        employee.tier().label()
    );
    card
}

/// Full detail view with overview, projects and feedback sections.
pub fn employee_detail(employee: &Employee, bookmarked: bool) -> String {
    let user = &employee.user;
    let mut out = String::new();

    let _ = writeln!(out, "{}", employee.full_name());
    let _ = writeln!(out, "{}", "=".repeat(employee.full_name().chars().count()));
    let _ = writeln!(
        out,
        "{} | {} | {}{}",
        employee.department,
        render_stars(f64::from(employee.rating()), MAX_RATING),
        employee.tier().label(),
        if bookmarked { " | bookmarked" } else { "" }
    );

    out.push_str("\n## Overview\n\n");
    let _ = writeln!(out, "Email:     {}", user.email);
    let _ = writeln!(out, "Phone:     {}", user.phone);
    let _ = writeln!(out, "Age:       {}", user.age);
    if !user.address.city.is_empty() {
        let _ = writeln!(
            out,
            "Address:   {}, {}, {} {}",
            user.address.address, user.address.city, user.address.state, user.address.postal_code
        );
    }
    if !user.company.title.is_empty() {
        let _ = writeln!(out, "Title:     {} at {}", user.company.title, user.company.name);
    }
    let _ = writeln!(out, "Joined:    {}", employee.join_date);
    let _ = writeln!(out, "\n{}", employee.bio);

    out.push_str("\n## Performance History\n\n");
    for review in &employee.performance.history {
        let _ = writeln!(
            out,
            "{}  {}  {}",
            review.date,
            render_stars(f64::from(review.rating), MAX_RATING),
            review.review
        );
    }

    out.push_str("\n## Projects\n\n");
    for project in &employee.projects {
        let ended = project
            .end_date
            .map_or_else(|| "present".to_string(), |d| d.to_string());
        let _ = writeln!(
            out,
            "- {} [{}] as {} ({} to {})",
            project.name,
            project.status.as_str(),
            project.role,
            project.start_date,
            ended
        );
    }

    out.push_str("\n## Feedback\n\n");
    for feedback in &employee.feedback {
        let _ = writeln!(
            out,
            "- {} {} ({}): {}",
            feedback.date,
            feedback.from,
            feedback.kind.as_str(),
            feedback.message
        );
    }

    out
}

/// Facet listing for the filter panel.
pub fn facets(departments: &[Department], ratings: &[u8]) -> String {
    let mut out = String::from("Departments:\n");
    for department in departments {
        let _ = writeln!(out, "  {department}");
    }
    out.push_str("Ratings:\n");
    for rating in ratings {
        let _ = writeln!(out, "  {rating}  {}", render_stars(f64::from(*rating), MAX_RATING));
    }
    out
}
