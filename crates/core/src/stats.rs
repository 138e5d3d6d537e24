//! Dashboard Statistics

use jiff::civil::Date;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::{
    categories::Category,
    pricing::{PricingError, to_money},
    reports::DamageReport,
};

/// Value shown for pending warnings.
///
/// There is no business rule behind this figure yet; it is a fixed placeholder until one is
/// defined.
pub const PENDING_WARNINGS_PLACEHOLDER: u32 = 3;

/// Summary figures for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Reports registered on the current UTC day
    pub damaged_today: usize,

    /// Sum of discounted prices registered in the current month
    pub monthly_value: Money<'static, Currency>,

    /// See [`PENDING_WARNINGS_PLACEHOLDER`]
    pub pending_warnings: u32,

    /// Size of the whole collection
    pub total_reports: usize,
}

/// Number of reports in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartBucket {
    /// Category
    pub category: Category,

    /// Reports in the category
    pub total: usize,
}

/// Compute the dashboard figures as seen on `today`.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the monthly sum cannot be represented.
pub fn compute_dashboard_stats(
    reports: &[DamageReport],
    today: Date,
) -> Result<DashboardStats, PricingError> {
    let damaged_today = reports
        .iter()
        .filter(|report| report.date_utc() == today)
        .count();

    let monthly_total = reports
        .iter()
        .filter(|report| {
            let date = report.date_utc();

            date.year() == today.year() && date.month() == today.month()
        })
        .try_fold(Decimal::ZERO, |acc, report| acc.checked_add(report.new_price))
        .ok_or(PricingError::Overflow)?;

    Ok(DashboardStats {
        damaged_today,
        monthly_value: to_money(monthly_total)?,
        pending_warnings: PENDING_WARNINGS_PLACEHOLDER,
        total_reports: reports.len(),
    })
}

/// Count reports per category.
///
/// Buckets come out in the order their category is first seen; categories without reports are
/// left out.
pub fn compute_category_chart(reports: &[DamageReport]) -> Vec<ChartBucket> {
    let mut buckets: Vec<ChartBucket> = Vec::with_capacity(Category::ALL.len());

    for report in reports {
        match buckets
            .iter_mut()
            .find(|bucket| bucket.category == report.category)
        {
            Some(bucket) => bucket.total += 1,
            None => buckets.push(ChartBucket {
                category: report.category,
                total: 1,
            }),
        }
    }

    buckets
}
