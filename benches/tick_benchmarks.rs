//! Performance benchmarks for the earnings ticker engine.
//!
//! `tick` runs every 100ms on the driver's clock, so it must stay far below that
//! budget even though it classifies the whole month each time:
//! - Single tick: < 50μs mean
//! - Next rest day over the default 90-day horizon: < 50μs mean
//! - Monthly workday count: < 20μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;

use chrono::{NaiveDate, NaiveDateTime};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;

use earnings_ticker::calculation::{
    DEFAULT_HORIZON_DAYS, effective_workdays, next_rest_day, tick, upcoming_rest_days,
};
use earnings_ticker::config::ConfigLoader;
use earnings_ticker::models::{CalendarExceptionStore, ScheduleConfig};

fn load_calendar() -> CalendarExceptionStore {
    ConfigLoader::load("./config/default")
        .expect("Failed to load config")
        .calendar()
        .clone()
}

fn schedule() -> ScheduleConfig {
    ScheduleConfig {
        monthly_salary: Decimal::new(10000, 0),
        ..ScheduleConfig::default()
    }
}

fn make_datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn make_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Benchmark: one tick during the shift of a month with holidays.
fn bench_tick(c: &mut Criterion) {
    let calendar = load_calendar();
    let schedule = schedule();
    let now = make_datetime("2026-10-12 14:30:00");

    c.bench_function("tick_in_shift", |b| {
        b.iter(|| black_box(tick(black_box(now), &schedule, &calendar)))
    });
}

/// Benchmark: one tick on a day off, which skips the month count.
fn bench_tick_off_day(c: &mut Criterion) {
    let calendar = load_calendar();
    let schedule = schedule();
    let now = make_datetime("2026-10-03 14:30:00");

    c.bench_function("tick_off_day", |b| {
        b.iter(|| black_box(tick(black_box(now), &schedule, &calendar)))
    });
}

/// Benchmark: the monthly workday count behind every tick.
fn bench_effective_workdays(c: &mut Criterion) {
    let calendar = load_calendar();
    let schedule = schedule();

    c.bench_function("effective_workdays", |b| {
        b.iter(|| black_box(effective_workdays(black_box(2026), black_box(10), &schedule, &calendar)))
    });
}

/// Benchmark: next rest day when the answer is a few days away.
fn bench_next_rest_day(c: &mut Criterion) {
    let calendar = load_calendar();
    let schedule = schedule();
    let today = make_date("2026-09-28");

    c.bench_function("next_rest_day", |b| {
        b.iter(|| {
            black_box(next_rest_day(
                black_box(today),
                &schedule,
                &calendar,
                DEFAULT_HORIZON_DAYS,
            ))
        })
    });
}

/// Benchmark: the forward calendar listing as the horizon grows.
fn bench_upcoming_scaling(c: &mut Criterion) {
    let calendar = load_calendar();
    let schedule = schedule();
    let today = make_date("2026-09-28");

    let mut group = c.benchmark_group("upcoming_rest_days");

    for horizon in [30u32, 90, 365].iter() {
        group.throughput(Throughput::Elements(u64::from(*horizon)));
        group.bench_with_input(BenchmarkId::from_parameter(horizon), horizon, |b, &horizon| {
            b.iter(|| black_box(upcoming_rest_days(today, &schedule, &calendar, horizon)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_tick,
    bench_tick_off_day,
    bench_effective_workdays,
    bench_next_rest_day,
    bench_upcoming_scaling,
);
criterion_main!(benches);
