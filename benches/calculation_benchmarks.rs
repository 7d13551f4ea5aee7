//! Performance benchmarks for the Liquidation Engine.
//!
//! This benchmark suite measures:
//! - The liquidation formulas called directly
//! - The indemnity calculation for each contract type
//! - A single liquidation request through the HTTP router
//! - A batch of 100 liquidation requests
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use liquidation_engine::api::{AppState, create_router};
use liquidation_engine::calculation::{calculate_compensation, calculate_liquidation};
use liquidation_engine::config::{ConfigLoader, LegalConstants};
use liquidation_engine::models::EmployeeRecord;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/colombia").expect("Failed to load config");
    AppState::new(config)
}

fn sample_employee() -> EmployeeRecord {
    EmployeeRecord::new(
        Decimal::new(1_000_000, 0),
        Decimal::new(100_000, 0),
        180,
        180,
    )
}

fn liquidation_body(salary: i64, days: i32) -> String {
    serde_json::json!({
        "employee": {
            "basic_monthly_salary": salary,
            "transportation_allowance": 100000,
            "worked_days": days,
            "severance_pay_for_accrued_leave_days": days
        },
        "compensation": {
            "type_of_contract": "indefinite_term",
            "start_date": "2020-01-01",
            "end_date": "2024-06-30"
        }
    })
    .to_string()
}

/// Benchmark: The four formulas without the HTTP layer.
fn bench_liquidation_core(c: &mut Criterion) {
    let employee = sample_employee();
    let constants = LegalConstants::default();

    c.bench_function("liquidation_core", |b| {
        b.iter(|| calculate_liquidation(black_box(&employee), black_box(&constants)))
    });
}

/// Benchmark: Indemnity for each contract type.
fn bench_compensation(c: &mut Criterion) {
    let employee = sample_employee();
    let constants = LegalConstants::default();
    let mut group = c.benchmark_group("compensation");

    for (contract_type, agreed_end) in [
        ("fixed_term_one_year", None),
        ("fixed_term_under_one_year", Some("2024-10-31")),
        ("indefinite_term", None),
    ] {
        group.bench_with_input(
            BenchmarkId::new("contract_type", contract_type),
            &contract_type,
            |b, contract_type| {
                b.iter(|| {
                    calculate_compensation(
                        black_box(&employee),
                        contract_type,
                        "2024-01-01",
                        "2024-06-30",
                        agreed_end,
                        &constants,
                    )
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: A single liquidation request through the router.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = liquidation_body(1_000_000, 180);

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/liquidation")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 liquidation requests.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100)
        .map(|i| liquidation_body(1_000_000 + i * 50_000, (i as i32 * 7) % 361))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/liquidation")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_liquidation_core,
    bench_compensation,
    bench_single_request,
    bench_batch_100,
);
criterion_main!(benches);
