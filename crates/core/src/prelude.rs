//! Avaria prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    categories::{Category, UnknownCategory},
    discounts::{DiscountError, DiscountPercent},
    export::{
        ExportError, ExportFormat, render_dashboard, render_products, render_reports,
        write_reports,
    },
    fixtures::{FixtureError, SeedData, seed},
    pricing::{
        CURRENCY, PricingError, apply_discount, format_currency, format_money, parse_currency,
        to_money,
    },
    products::{Product, find_by_code},
    query::{
        DEFAULT_PAGE_SIZE, FilterSortSpec, QueryResult, SortDirection, SortKey, UnknownSortOption,
        clamp_page, filter_and_sort, query,
    },
    registration::{MissingFields, RegistrationDraft, RegistrationError, RequiredField},
    reports::{DamageReport, PLACEHOLDER_PHOTO_URL, next_report_id},
    stats::{ChartBucket, DashboardStats, compute_category_chart, compute_dashboard_stats},
};
