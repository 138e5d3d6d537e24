//! Reports and settings survive reopening a file-backed store

use std::{fs, sync::Arc};

use avaria::{discounts::DiscountPercent, fixtures, registration::RegistrationDraft};
use avaria_app::{
    auth::Credentials,
    clock::FixedClock,
    context::AppContext,
    domain::settings::models::SettingKey,
    store::{FileStore, KeyValueStore},
};
use testresult::TestResult;

fn open(dir: &std::path::Path) -> Result<AppContext, Box<dyn std::error::Error>> {
    Ok(AppContext::from_store_dir(
        dir,
        fixtures::seed()?,
        Credentials::default(),
    )?)
}

#[test]
fn registered_report_is_persisted() -> TestResult {
    let dir = tempfile::tempdir()?;
    let ctx = open(dir.path())?;

    let product = ctx
        .products
        .find_by_code("FOG-CON-05")
        .ok_or("missing stove")?;

    let report = ctx.reports.register_report(RegistrationDraft {
        product: Some(product),
        serial_number: "CON-FOG-0001".to_string(),
        damage: "Vidro do forno trincado.".to_string(),
        discount: DiscountPercent::new(30)?,
        seller: "Ana Lima".to_string(),
        photo_url: None,
    })?;

    let reopened = open(dir.path())?;

    let ids: Vec<u64> = reopened
        .reports
        .list_reports()
        .iter()
        .map(|report| report.id)
        .collect();

    assert_eq!(ids, [report.id, 1]);
    assert!(dir.path().join("damageReports.json").is_file());

    Ok(())
}

#[test]
fn seeding_happens_once() -> TestResult {
    let dir = tempfile::tempdir()?;

    let first = open(dir.path())?.reports.list_reports();

    let raw = fs::read_to_string(dir.path().join("damageReports.json"))?;

    let second = open(dir.path())?.reports.list_reports();

    assert_eq!(first, second);
    assert_eq!(
        raw,
        fs::read_to_string(dir.path().join("damageReports.json"))?
    );

    Ok(())
}

#[test]
fn stored_reports_use_camel_case_keys() -> TestResult {
    let dir = tempfile::tempdir()?;

    open(dir.path())?.reports.list_reports();

    let raw = FileStore::open(dir.path())?
        .get("damageReports")?
        .ok_or("collection not written")?;

    let value: serde_json::Value = serde_json::from_str(&raw)?;
    let first = value
        .as_array()
        .and_then(|reports| reports.first())
        .ok_or("no reports")?;

    assert!(first.get("serialNumber").is_some(), "unexpected layout: {first}");
    assert!(first.get("newPrice").is_some(), "unexpected layout: {first}");

    Ok(())
}

#[test]
fn settings_are_persisted() -> TestResult {
    let dir = tempfile::tempdir()?;

    let ctx = open(dir.path())?;
    let updated = ctx
        .settings
        .get_settings()?
        .with_value(SettingKey::PageSize, "12")?;
    ctx.settings.save_settings(&updated)?;

    let reopened = open(dir.path())?;

    assert_eq!(reopened.settings.get_settings()?.page_size.get(), 12);

    Ok(())
}

#[test]
fn in_memory_context_uses_injected_clock() -> TestResult {
    let ctx = AppContext::in_memory(
        fixtures::seed()?,
        Arc::new(FixedClock("2025-10-01T09:00:00Z".parse()?)),
        Credentials::default(),
    );

    let dashboard = ctx.reports.dashboard()?;

    assert_eq!(dashboard.stats.damaged_today, 0);
    assert_eq!(dashboard.stats.monthly_value.to_minor_units(), 0);
    assert_eq!(dashboard.stats.total_reports, 1);

    Ok(())
}
