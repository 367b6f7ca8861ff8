//! # Dashboard Commands
//!
//! The dashboard views as plain operations over a loader, the query
//! engine and the bookmark store. Each command returns the rendered text;
//! the binary only prints it.

use hr_bookmarks::{BookmarkStore, StorageBackend};
use hr_domain::{BookmarkTrends, Department, FilterCriteria};
use hr_enricher::RecordEnricher;
use hr_query::{QueryEngine, SearchState};

use crate::display;
use crate::error::DashboardError;
use crate::loader::EmployeeLoader;
use crate::source::UserSource;

type Result<T> = std::result::Result<T, DashboardError>;

/// Analytics output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

/// Inputs of the list view
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub search: String,
    pub departments: Vec<Department>,
    pub ratings: Vec<u8>,
    /// Query the bookmark list instead of the loaded roster
    pub bookmarked: bool,
    /// Number of "load more" pages to reveal, at least one
    pub pages: usize,
}

impl ListQuery {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .with_search(self.search.clone())
            .with_departments(self.departments.iter().cloned())
            .with_ratings(self.ratings.iter().copied())
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            departments: Vec::new(),
            ratings: Vec::new(),
            bookmarked: false,
            pages: 1,
        }
    }
}

/// Loader, engine and bookmarks for one dashboard session
pub struct Dashboard<S, E, B> {
    loader: EmployeeLoader<S, E>,
    engine: QueryEngine,
    bookmarks: BookmarkStore<B>,
}

impl<S, E, B> Dashboard<S, E, B>
where
    S: UserSource,
    E: RecordEnricher,
    B: StorageBackend,
{
    pub fn new(loader: EmployeeLoader<S, E>, bookmarks: BookmarkStore<B>) -> Self {
        Self {
            loader,
            engine: QueryEngine::new(),
            bookmarks,
        }
    }

    pub const fn bookmarks(&self) -> &BookmarkStore<B> {
        &self.bookmarks
    }

    /// Employee cards matching the query, one page window at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be loaded.
    pub async fn list(&mut self, query: &ListQuery) -> Result<String> {
        let records = if query.bookmarked {
            self.bookmarks.bookmarks().to_vec()
        } else {
            self.loader.load_all().await?
        };

        let mut state = SearchState::with_criteria(query.criteria());
        state.show_pages(&records, query.pages);
        let page = state.visible(&records);

        if page.total == 0 {
            return Ok(if query.bookmarked && self.bookmarks.is_empty() {
                "No bookmarked employees yet.\n".to_string()
            } else {
                "No employees found matching your criteria.\n".to_string()
            });
        }

        let mut out = String::new();
        for employee in &page.items {
            out.push_str(&display::employee_card(employee, self.bookmarks.contains(employee.id())));
            out.push_str("\n\n");
        }
        out.push_str(&format!("Showing {} of {}", page.items.len(), page.total));
        if page.has_more {
            out.push_str(&format!(" (use --pages {} to load more)", query.pages.max(1).saturating_add(1)));
        }
        out.push('\n');
        Ok(out)
    }

    /// Detail view of one employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee cannot be loaded.
    pub async fn show(&mut self, id: u32) -> Result<String> {
        let employee = self.loader.load_one(id).await?;
        Ok(display::employee_detail(&employee, self.bookmarks.contains(id)))
    }

    /// Facet values offered by the filter panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be loaded.
    pub async fn facets(&mut self) -> Result<String> {
        let records = self.loader.load_all().await?;
        Ok(display::facets(
            &self.engine.available_departments(&records),
            &self.engine.available_ratings(),
        ))
    }

    /// Bookmark an employee by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee cannot be loaded or persisting fails.
    pub async fn bookmark_add(&mut self, id: u32) -> Result<String> {
        if self.bookmarks.contains(id) {
            return Ok(format!("Employee {id} is already bookmarked.\n"));
        }
        let employee = self.loader.load_one(id).await?;
        let name = employee.full_name();
        self.bookmarks.add(employee)?;
        Ok(format!("Bookmarked {name} (#{id}).\n"))
    }

    /// Remove a bookmark by id.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn bookmark_remove(&mut self, id: u32) -> Result<String> {
        if self.bookmarks.remove(id)? {
            Ok(format!("Removed bookmark #{id}.\n"))
        } else {
            Ok(format!("Employee {id} is not bookmarked.\n"))
        }
    }

    /// Cards for every bookmarked employee.
    pub fn bookmark_list(&self) -> String {
        if self.bookmarks.is_empty() {
            return "No bookmarked employees yet.\n".to_string();
        }
        let mut out = String::new();
        for employee in self.bookmarks.bookmarks() {
            out.push_str(&display::employee_card(employee, true));
            out.push_str("\n\n");
        }
        out
    }

    /// Analytics report over the loaded roster and current bookmarks.
    ///
    /// Bookmarks of employees outside the loaded roster still count
    /// towards the bookmark total.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be loaded or JSON rendering fails.
    pub async fn analytics(
        &mut self,
        format: ReportFormat,
        trends: Option<BookmarkTrends>,
    ) -> Result<String> {
        let records = self.loader.load_all().await?;
        let bookmarks = self.bookmarks.bookmarks();

        Ok(match format {
            ReportFormat::Markdown => {
                self.engine.generate_report_markdown(&records, bookmarks, trends)
            }
            ReportFormat::Json => self.engine.generate_report_json(&records, bookmarks, trends)?,
        })
    }
}
