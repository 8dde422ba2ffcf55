use hdb_forecast::application::fetcher::{PagedFetcher, page_count};
use hdb_forecast::domain::errors::FetchError;
use hdb_forecast::domain::record::ResaleRecord;
use hdb_forecast::infrastructure::MockPageSource;
use rust_decimal::Decimal;
use std::sync::Arc;

fn records(n: usize) -> Vec<ResaleRecord> {
    (0..n)
        .map(|i| {
            ResaleRecord::new(
                "TAMPINES",
                "4 ROOM",
                format!("2020-{:02}", i % 12 + 1),
                Decimal::from(400_000 + i as i64),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_pages_requested_in_order_with_fixed_limit() {
    let source = Arc::new(MockPageSource::new(records(25)));
    let fetcher = PagedFetcher::new(source.clone(), 10);

    let outcome = fetcher.fetch_all().await;

    assert!(outcome.is_complete());
    assert_eq!(outcome.declared_total, Some(25));
    assert_eq!(outcome.pages_requested, page_count(25, 10));
    assert_eq!(source.requests(), vec![(0, 10), (10, 10), (20, 10)]);
    assert_eq!(outcome.records, source.records());
}

#[tokio::test]
async fn test_exact_multiple_issues_one_trailing_empty_page() {
    let source = Arc::new(MockPageSource::new(records(20)));
    let outcome = PagedFetcher::new(source.clone(), 10).fetch_all().await;

    assert_eq!(source.requests(), vec![(0, 10), (10, 10), (20, 10)]);
    assert_eq!(outcome.pages_completed, 3);
    assert_eq!(outcome.records.len(), 20);
}

#[tokio::test]
async fn test_zero_total_requests_single_empty_page() {
    let source = Arc::new(MockPageSource::new(Vec::new()));
    let outcome = PagedFetcher::new(source.clone(), 10_000).fetch_all().await;

    assert!(outcome.is_complete());
    assert_eq!(source.requests(), vec![(0, 10_000)]);
    assert!(outcome.into_dataset().is_empty());
}

#[tokio::test]
async fn test_failed_page_keeps_earlier_records() {
    let source = Arc::new(
        MockPageSource::new(records(35)).with_page_failure(2, FetchError::Status { status: 500 }),
    );
    let outcome = PagedFetcher::new(source.clone(), 10).fetch_all().await;

    assert_eq!(outcome.aborted, Some(FetchError::Status { status: 500 }));
    assert!(!outcome.is_complete());
    assert_eq!(outcome.pages_requested, 3);
    assert_eq!(outcome.pages_completed, 2);
    // Paging stops at the failed page; page 3 is never requested
    assert_eq!(source.requests().len(), 3);
    assert_eq!(outcome.records, source.records()[..20].to_vec());
}

#[tokio::test]
async fn test_first_page_failure_yields_empty_dataset() {
    let source = Arc::new(MockPageSource::new(records(5)).with_page_failure(
        0,
        FetchError::Transport {
            reason: "connection reset".to_string(),
        },
    ));
    let outcome = PagedFetcher::new(source, 10).fetch_all().await;

    assert!(outcome.records.is_empty());
    assert!(matches!(outcome.aborted, Some(FetchError::Transport { .. })));
}

#[tokio::test]
async fn test_count_failure_skips_paging() {
    let source = Arc::new(
        MockPageSource::new(records(5)).with_count_failure(FetchError::Status { status: 503 }),
    );
    let outcome = PagedFetcher::new(source.clone(), 10).fetch_all().await;

    assert_eq!(outcome.declared_total, None);
    assert_eq!(outcome.pages_requested, 0);
    assert!(source.requests().is_empty());
    assert!(outcome.records.is_empty());
}

#[tokio::test]
async fn test_declared_total_drives_page_count() {
    // Upstream claims more rows than it serves; surplus pages come back empty
    let source = Arc::new(MockPageSource::new(records(5)).with_declared_total(25));
    let outcome = PagedFetcher::new(source.clone(), 10).fetch_all().await;

    assert!(outcome.is_complete());
    assert_eq!(source.requests().len(), 3);
    assert_eq!(outcome.records.len(), 5);
}
