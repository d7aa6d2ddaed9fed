
use billing_test_utils::prelude::*;
use chrono::{NaiveDate, NaiveDateTime};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn datetime(year: i32, month: u32, day: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(12, 0, 0).unwrap()
}
