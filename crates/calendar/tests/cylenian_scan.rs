//! Compares the table-driven Cylenian conversion against a plain greedy scan.

use cylenian_calendar::CylenianDate;
use cylenian_calendar::cylenian::{
    days_in_era, days_in_month, days_in_year, from_days_since_epoch, months_in_year,
    to_days_since_epoch,
};

/// Consumes whole eras, then years, then months, one at a time.
fn greedy_from_days(mut days: i64) -> (u32, u8, u8, u8) {
    let mut era = 1;
    while days >= i64::from(days_in_era(era).unwrap()) {
        days -= i64::from(days_in_era(era).unwrap());
        era += 1;
    }
    let mut year = 1;
    while days >= i64::from(days_in_year(era, year).unwrap()) {
        days -= i64::from(days_in_year(era, year).unwrap());
        year += 1;
    }
    let mut month = 1;
    while days >= i64::from(days_in_month(era, year, month).unwrap()) {
        days -= i64::from(days_in_month(era, year, month).unwrap());
        month += 1;
    }
    (era, year, month, days as u8 + 1)
}

fn fields(date: CylenianDate) -> (u32, u8, u8, u8) {
    (date.era(), date.year(), date.month(), date.day())
}

#[test]
fn matches_greedy_scan_sampled() {
    // Every 7th day across two and a half cycles, plus every era boundary.
    for days in (0..1_100_000).step_by(7) {
        assert_eq!(
            fields(from_days_since_epoch(days).unwrap()),
            greedy_from_days(days),
            "day {days}"
        );
    }
}

#[test]
fn matches_greedy_scan_at_boundaries() {
    let mut start = 0i64;
    for era in 1..=250 {
        for offset in [-1, 0, 1] {
            let days = start + offset;
            if days >= 0 {
                assert_eq!(
                    fields(from_days_since_epoch(days).unwrap()),
                    greedy_from_days(days),
                    "era {era}, day {days}"
                );
            }
        }
        start += i64::from(days_in_era(era).unwrap());
    }
}

#[test]
fn every_valid_date_roundtrips() {
    for era in [1, 4, 12, 99, 100, 101, 104, 187, 1234] {
        for year in 1..=12 {
            for month in 1..=months_in_year(era, year).unwrap() {
                for day in 1..=days_in_month(era, year, month).unwrap() {
                    let days = to_days_since_epoch(era, year, month, day).unwrap();
                    assert_eq!(
                        fields(from_days_since_epoch(days).unwrap()),
                        (era, year, month, day)
                    );
                }
            }
        }
    }
}

#[test]
fn consecutive_days_are_consecutive_dates() {
    let mut prev = from_days_since_epoch(0).unwrap();
    for days in 1..(4383 * 13) {
        let date = from_days_since_epoch(days).unwrap();
        assert_eq!(date.days_since_epoch(), prev.days_since_epoch() + 1);
        assert!(date > prev, "{date:?} should follow {prev:?}");
        prev = date;
    }
}
