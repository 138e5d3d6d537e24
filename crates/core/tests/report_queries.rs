//! Filtering, ordering and pagination over a generated report collection

use avaria::prelude::*;
use jiff::{Timestamp, civil::date};
use rust_decimal::Decimal;
use testresult::TestResult;

const SELLERS: [&str; 3] = ["Ana Lima", "Bruno Costa", "Carla Dias"];
const NAMES: [&str; 4] = [
    "Smart TV LG 55",
    "Geladeira Brastemp",
    "Notebook Dell",
    "Guarda-Roupa Madesa",
];

fn collection(len: u64) -> Result<Vec<DamageReport>, Box<dyn std::error::Error>> {
    let mut reports = Vec::new();

    for id in 1..=len {
        let name_idx = usize::try_from(id % 4)?;
        let seller_idx = usize::try_from(id % 3)?;
        let category_idx = usize::try_from(id % 3)?;
        let day = i8::try_from(id % 28 + 1)?;

        let timestamp: Timestamp = format!("2025-09-{day:02}T1{}:00:00Z", id % 10).parse()?;

        reports.push(DamageReport {
            id,
            code: format!("SKU-{id:03}"),
            serial_number: format!("SN-{id:05}"),
            product_name: NAMES.get(name_idx).copied().unwrap_or_default().to_string(),
            damage: "Avaria.".to_string(),
            discount: DiscountPercent::new(u16::try_from(id % 51)?)?,
            seller: SELLERS.get(seller_idx).copied().unwrap_or_default().to_string(),
            date: timestamp,
            category: Category::ALL.get(category_idx).copied().unwrap_or(Category::Furniture),
            new_price: Decimal::new(i64::try_from(id)? * 1000, 2),
            original_price: Decimal::new(i64::try_from(id)? * 1000, 2),
            photo_url: PLACEHOLDER_PHOTO_URL.to_string(),
        });
    }

    Ok(reports)
}

fn specs() -> Vec<FilterSortSpec> {
    let mut specs = Vec::new();

    for search_term in ["", "tv", "SKU-01", "sn-0000", "zzz"] {
        for category in [None, Some(Category::Electronics), Some(Category::Furniture)] {
            for (start_date, end_date) in [
                (None, None),
                (Some(date(2025, 9, 5)), None),
                (None, Some(date(2025, 9, 10))),
                (Some(date(2025, 9, 10)), Some(date(2025, 9, 3))),
            ] {
                specs.push(FilterSortSpec {
                    search_term: search_term.to_string(),
                    category,
                    start_date,
                    end_date,
                    ..FilterSortSpec::default()
                });
            }
        }
    }

    specs
}

fn expected_match(report: &DamageReport, spec: &FilterSortSpec) -> bool {
    let term = spec.search_term.to_lowercase();

    let text = [&report.product_name, &report.code, &report.serial_number]
        .iter()
        .any(|field| field.to_lowercase().contains(&term));

    let category = spec.category.is_none_or(|category| report.category == category);

    let day = report.date_utc();
    let after_start = spec.start_date.is_none_or(|start| day >= start);
    let before_end = spec.end_date.is_none_or(|end| day <= end);

    text && category && after_start && before_end
}

#[test]
fn matches_are_sound_and_complete() -> TestResult {
    let reports = collection(60)?;

    for spec in specs() {
        let mut matched: Vec<u64> = filter_and_sort(&reports, &spec)
            .iter()
            .map(|report| report.id)
            .collect();
        matched.sort_unstable();

        let expected: Vec<u64> = reports
            .iter()
            .filter(|report| expected_match(report, &spec))
            .map(|report| report.id)
            .collect();

        assert_eq!(matched, expected, "wrong matches for {spec:?}");
    }

    Ok(())
}

#[test]
fn search_ignores_case_across_fields() -> TestResult {
    let reports = collection(60)?;

    let by_name = filter_and_sort(
        &reports,
        &FilterSortSpec {
            search_term: "TV".to_string(),
            ..FilterSortSpec::default()
        },
    );

    assert!(!by_name.is_empty(), "expected TV reports");
    assert!(by_name.iter().all(|report| report.product_name == "Smart TV LG 55"));

    let by_serial = filter_and_sort(
        &reports,
        &FilterSortSpec {
            search_term: "sn-00042".to_string(),
            ..FilterSortSpec::default()
        },
    );

    let ids: Vec<u64> = by_serial.iter().map(|report| report.id).collect();

    assert_eq!(ids, [42]);

    Ok(())
}

#[test]
fn inverted_date_range_matches_nothing() -> TestResult {
    let reports = collection(60)?;

    let spec = FilterSortSpec {
        start_date: Some(date(2025, 9, 10)),
        end_date: Some(date(2025, 9, 3)),
        ..FilterSortSpec::default()
    };

    assert!(filter_and_sort(&reports, &spec).is_empty());

    Ok(())
}

#[test]
fn ordering_is_stable_in_both_directions() -> TestResult {
    let reports = collection(60)?;

    for sort_key in [SortKey::ProductName, SortKey::Seller, SortKey::Date] {
        for sort_direction in [SortDirection::Ascending, SortDirection::Descending] {
            let spec = FilterSortSpec {
                sort_key,
                sort_direction,
                ..FilterSortSpec::default()
            };

            let sorted = filter_and_sort(&reports, &spec);

            for pair in sorted.windows(2) {
                let [a, b] = pair else {
                    continue;
                };

                let key = |report: &DamageReport| match sort_key {
                    SortKey::ProductName => report.product_name.clone(),
                    SortKey::Seller => report.seller.clone(),
                    SortKey::Date => report.date.to_string(),
                };

                let ordered = match sort_direction {
                    SortDirection::Ascending => key(*a) <= key(*b),
                    SortDirection::Descending => key(*a) >= key(*b),
                };

                assert!(ordered, "{sort_key} {sort_direction}: {} before {}", a.id, b.id);

                if key(*a) == key(*b) {
                    assert!(a.id < b.id, "ties must keep input order: {} before {}", a.id, b.id);
                }
            }
        }
    }

    Ok(())
}

#[test]
fn pages_partition_the_matches() -> TestResult {
    let reports = collection(61)?;

    for size in [1_usize, 3, 8, 61, 100] {
        let page_size = std::num::NonZeroUsize::new(size).ok_or("zero page size")?;
        let base = FilterSortSpec {
            page_size,
            ..FilterSortSpec::default()
        };

        let all = filter_and_sort(&reports, &base);
        let first = query(&reports, &base);

        assert_eq!(first.total_pages, all.len().div_ceil(size), "page count for {size}");

        let mut seen = Vec::new();

        for page in 1..=first.total_pages {
            let result = query(&reports, &FilterSortSpec { page, ..base.clone() });

            assert!(!result.items.is_empty(), "page {page} of size {size} is empty");
            assert!(result.items.len() <= size, "page {page} is oversized");

            seen.extend(result.items.iter().map(|report| report.id));
        }

        let expected: Vec<u64> = all.iter().map(|report| report.id).collect();

        assert_eq!(seen, expected, "pages of size {size} do not cover the matches");

        let past_end = query(
            &reports,
            &FilterSortSpec {
                page: first.total_pages + 1,
                ..base.clone()
            },
        );

        assert!(past_end.items.is_empty(), "page past the end must be empty");
    }

    Ok(())
}

#[test]
fn clamped_page_is_always_valid() {
    for total_pages in 0..5 {
        for page in 0..8 {
            let clamped = clamp_page(page, total_pages);

            assert!(clamped >= 1, "clamped page below one");
            assert!(clamped <= total_pages.max(1), "clamped page past the end");
        }
    }
}
