//! Report Queries
//!
//! Filtering, sorting and pagination over an in-memory report list. A query never fails: a
//! filter that matches nothing yields an empty page.

use std::{cmp::Ordering, fmt, num::NonZeroUsize, str::FromStr};

use jiff::civil::Date;
use thiserror::Error;

use crate::{categories::Category, reports::DamageReport};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(7);

/// Returned when a sort key or direction cannot be recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort option: {0}")]
pub struct UnknownSortOption(pub String);

/// Field a report listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Product name, lexicographic
    ProductName,

    /// Seller name, lexicographic
    Seller,

    /// Registration time, chronological
    #[default]
    Date,
}

impl FromStr for SortKey {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "product" | "product-name" | "product_name" | "productname" => Ok(SortKey::ProductName),
            "seller" => Ok(SortKey::Seller),
            "date" => Ok(SortKey::Date),
            _ => Err(UnknownSortOption(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::ProductName => "product-name",
            SortKey::Seller => "seller",
            SortKey::Date => "date",
        })
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first
    Ascending,

    /// Largest first
    #[default]
    Descending,
}

impl FromStr for SortDirection {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(UnknownSortOption(s.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        })
    }
}

/// What to show from the report collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSortSpec {
    /// Case-insensitive substring of product name, code or serial number. Blank matches all.
    pub search_term: String,

    /// Only this category, or every category when `None`.
    pub category: Option<Category>,

    /// Inclusive lower bound on the report's UTC date.
    pub start_date: Option<Date>,

    /// Inclusive upper bound on the report's UTC date.
    pub end_date: Option<Date>,

    /// Ordering field
    pub sort_key: SortKey,

    /// Ordering direction
    pub sort_direction: SortDirection,

    /// 1-based page number. Pages outside `1..=total_pages` are empty.
    pub page: usize,

    /// Reports per page
    pub page_size: NonZeroUsize,
}

impl Default for FilterSortSpec {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: None,
            start_date: None,
            end_date: None,
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterSortSpec {
    /// Whether `report` passes every active filter.
    pub fn matches(&self, report: &DamageReport) -> bool {
        self.matches_search(report)
            && self.category.is_none_or(|category| report.category == category)
            && self.matches_dates(report)
    }

    fn matches_search(&self, report: &DamageReport) -> bool {
        let term = self.search_term.trim();

        if term.is_empty() {
            return true;
        }

        let term = term.to_lowercase();

        [&report.product_name, &report.code, &report.serial_number]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_dates(&self, report: &DamageReport) -> bool {
        let date = report.date_utc();

        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }

    fn compare(&self, a: &DamageReport, b: &DamageReport) -> Ordering {
        let ordering = match self.sort_key {
            SortKey::ProductName => a.product_name.cmp(&b.product_name),
            SortKey::Seller => a.seller.cmp(&b.seller),
            SortKey::Date => a.date.cmp(&b.date),
        };

        match self.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// One page of a report query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult<'a> {
    /// Reports on the requested page
    pub items: Vec<&'a DamageReport>,

    /// Reports matching the filters, across all pages
    pub total_matched: usize,

    /// Number of non-empty pages
    pub total_pages: usize,
}

/// Filter and sort without paginating.
///
/// The sort is stable: reports that compare equal keep their input order in both directions.
pub fn filter_and_sort<'a>(reports: &'a [DamageReport], spec: &FilterSortSpec) -> Vec<&'a DamageReport> {
    let mut matched: Vec<&DamageReport> = reports.iter().filter(|report| spec.matches(report)).collect();

    matched.sort_by(|a, b| spec.compare(a, b));

    matched
}

/// Filter, sort and paginate `reports`.
///
/// The requested page is not clamped; see [`clamp_page`].
pub fn query<'a>(reports: &'a [DamageReport], spec: &FilterSortSpec) -> QueryResult<'a> {
    let matched = filter_and_sort(reports, spec);
    let total_matched = matched.len();
    let page_size = spec.page_size.get();

    let items = spec
        .page
        .checked_sub(1)
        .and_then(|page| page.checked_mul(page_size))
        .map(|start| matched.into_iter().skip(start).take(page_size).collect())
        .unwrap_or_default();

    QueryResult {
        items,
        total_matched,
        total_pages: total_matched.div_ceil(page_size),
    }
}

/// Clamp a requested page into `1..=max(1, total_pages)`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}
