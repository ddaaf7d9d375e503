//! Performance benchmarks for the upcoming-birthday query.
//!
//! These benchmarks measure the query over books of different sizes, with
//! every contact carrying a birthday spread across the year.

use chrono::{Duration, NaiveDate};
use contact_book::domain::FieldKind;
use contact_book::{AddressBook, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book of `size` contacts with birthdays one day apart.
fn create_test_book(size: usize) -> AddressBook {
    let first = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::new(format!("contact{}", i)).unwrap();
        let birthday = first + Duration::days((i % 365) as i64);
        record
            .add_field(FieldKind::Birthday, &birthday.format("%d.%m.%Y").to_string())
            .unwrap();
        book.add_contact(record).unwrap();
    }
    book
}

/// Benchmark the weekly query for growing book sizes.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let reference = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.upcoming_birthdays(black_box(reference), black_box(7)));
        });
    }

    group.finish();
}

/// Benchmark a year-long window, where every contact is included and sorted.
fn bench_full_year_window(c: &mut Criterion) {
    let reference = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let book = create_test_book(1_000);

    c.bench_function("upcoming_birthdays_full_year", |b| {
        b.iter(|| book.upcoming_birthdays(black_box(reference), black_box(366)));
    });
}

criterion_group!(benches, bench_upcoming_birthdays, bench_full_year_window);
criterion_main!(benches);
