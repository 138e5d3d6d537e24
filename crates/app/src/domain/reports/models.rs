//! Report Models

use avaria::{
    reports::DamageReport,
    stats::{ChartBucket, DashboardStats},
};

/// One page of the report listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    pub items: Vec<DamageReport>,

    /// Page actually shown, after clamping the requested one.
    pub page: usize,

    pub total_matched: usize,
    pub total_pages: usize,
}

/// Dashboard figures and chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub chart: Vec<ChartBucket>,
}
