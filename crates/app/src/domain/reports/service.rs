//! Reports service.

use std::{io, sync::Arc};

use avaria::{
    export::{ExportFormat, write_reports},
    query::{FilterSortSpec, clamp_page, filter_and_sort, query},
    registration::RegistrationDraft,
    reports::DamageReport,
    stats::{compute_category_chart, compute_dashboard_stats},
};
use mockall::automock;
use tracing::{error, info, warn};

use crate::{
    clock::Clock,
    domain::{
        reports::{
            errors::ReportsServiceError,
            models::{Dashboard, ReportPage},
        },
        settings::{SettingsService, models::Settings},
    },
    store::RecordStore,
};

#[derive(Clone)]
pub struct StoreReportsService {
    store: RecordStore,
    clock: Arc<dyn Clock>,
    settings: Arc<dyn SettingsService>,
}

impl StoreReportsService {
    #[must_use]
    pub fn new(
        store: RecordStore,
        clock: Arc<dyn Clock>,
        settings: Arc<dyn SettingsService>,
    ) -> Self {
        Self {
            store,
            clock,
            settings,
        }
    }

    fn current_settings(&self) -> Settings {
        self.settings.get_settings().unwrap_or_else(|error| {
            warn!(%error, "failed to load settings, using defaults");

            Settings::default()
        })
    }
}

impl ReportsService for StoreReportsService {
    fn list_reports(&self) -> Vec<DamageReport> {
        self.store.get_all().unwrap_or_else(|error| {
            error!(%error, "failed to load damage reports");

            Vec::new()
        })
    }

    fn query_reports(&self, spec: &FilterSortSpec) -> ReportPage {
        let reports = self.list_reports();
        let mut result = query(&reports, spec);
        let page = clamp_page(spec.page, result.total_pages);

        if page != spec.page {
            result = query(
                &reports,
                &FilterSortSpec {
                    page,
                    ..spec.clone()
                },
            );
        }

        ReportPage {
            items: result.items.into_iter().cloned().collect(),
            page,
            total_matched: result.total_matched,
            total_pages: result.total_pages,
        }
    }

    #[tracing::instrument(
        name = "reports.register",
        skip(self, draft),
        fields(serial_number = %draft.serial_number),
        err
    )]
    fn register_report(
        &self,
        draft: RegistrationDraft,
    ) -> Result<DamageReport, ReportsServiceError> {
        let settings = self.current_settings();
        let mut reports = self.store.get_all::<DamageReport>()?;

        let report = draft.build(&reports, self.clock.now(), settings.max_discount_percent)?;

        reports.insert(0, report.clone());
        self.store.replace_all(&reports)?;

        if settings.notifications.new_damage {
            info!(
                target: "avaria::notifications",
                id = report.id,
                code = %report.code,
                discount = %report.discount,
                "new damage registered"
            );
        }

        if settings.audit_log {
            info!(
                target: "avaria::audit",
                action = "register_report",
                id = report.id,
                seller = %report.seller,
                "report registered"
            );
        }

        Ok(report)
    }

    fn dashboard(&self) -> Result<Dashboard, ReportsServiceError> {
        let reports = self.list_reports();

        Ok(Dashboard {
            stats: compute_dashboard_stats(&reports, self.clock.today())?,
            chart: compute_category_chart(&reports),
        })
    }

    fn export_reports(
        &self,
        spec: &FilterSortSpec,
        format: ExportFormat,
        out: &mut dyn io::Write,
    ) -> Result<(), ReportsServiceError> {
        let reports = self.list_reports();
        let selected = filter_and_sort(&reports, spec);

        write_reports(out, &selected, format)?;

        if self.current_settings().audit_log {
            info!(
                target: "avaria::audit",
                action = "export_reports",
                reports = selected.len(),
                "reports exported"
            );
        }

        Ok(())
    }
}

#[automock]
pub trait ReportsService: Send + Sync {
    /// Every report, newest first. Empty if the collection cannot be read.
    fn list_reports(&self) -> Vec<DamageReport>;

    /// Filter, sort and paginate reports; the requested page is clamped into range.
    fn query_reports(&self, spec: &FilterSortSpec) -> ReportPage;

    /// Validate a draft, price it and store the new report at the front of the collection.
    ///
    /// A unit whose serial number is already on file is rejected.
    fn register_report(
        &self,
        draft: RegistrationDraft,
    ) -> Result<DamageReport, ReportsServiceError>;

    /// Dashboard figures as of the current UTC day.
    fn dashboard(&self) -> Result<Dashboard, ReportsServiceError>;

    /// Write every report matching `spec` to `out`, ignoring pagination.
    fn export_reports(
        &self,
        spec: &FilterSortSpec,
        format: ExportFormat,
        out: &mut dyn io::Write,
    ) -> Result<(), ReportsServiceError>;
}
