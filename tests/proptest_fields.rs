//! Property-based tests for field validation, birthdays and paging.

use chrono::{Datelike, NaiveDate};
use contact_book::{Birthday, ContactBook, Phone, Record};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 ..= 2100-12-31
    (0i64..73_414).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

fn arb_book() -> impl Strategy<Value = ContactBook> {
    prop::collection::btree_set("[A-Z][a-z]{1,8}", 0..30).prop_map(|names| {
        names
            .into_iter()
            .map(|name| Record::new(name).unwrap())
            .collect()
    })
}

// ---------------------------------------------------------------------------
// Phones
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn ten_digit_strings_are_valid_phones(digits in "[0-9]{10}") {
        let phone = Phone::new(digits.clone()).unwrap();
        prop_assert_eq!(phone.as_str(), digits.as_str());
    }

    #[test]
    fn wrong_length_digit_strings_are_rejected(digits in "[0-9]{0,9}|[0-9]{11,15}") {
        prop_assert!(Phone::new(digits).is_err());
    }

    #[test]
    fn strings_with_a_non_digit_are_rejected(
        prefix in "[0-9]{0,9}",
        bad in "[^0-9]",
        suffix in "[0-9]{0,9}",
    ) {
        let candidate = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(Phone::new(candidate).is_err());
    }
}

// ---------------------------------------------------------------------------
// Birthdays
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn real_dates_are_valid_birthdays(date in arb_date()) {
        let text = date.format("%d-%m-%Y").to_string();
        let birthday = Birthday::new(&text).unwrap();
        prop_assert_eq!(birthday.date(), date);
        prop_assert_eq!(birthday.to_string(), text);
    }

    #[test]
    fn impossible_days_are_rejected(year in 1900i32..2100, month in 1u32..=12, day in 29u32..=31) {
        let text = format!("{:02}-{:02}-{}", day, month, year);
        let exists = NaiveDate::from_ymd_opt(year, month, day).is_some();
        prop_assert_eq!(Birthday::new(text).is_ok(), exists);
    }

    #[test]
    fn days_until_birthday_is_within_a_year(born in arb_date(), today in arb_date()) {
        let birthday = Birthday::from_date(born);
        let days = birthday.days_until(today).unwrap();
        prop_assert!((0..=365).contains(&days));

        let next = today + chrono::Duration::days(days);
        prop_assert_eq!(next.month(), born.month());
        if !(born.month() == 2 && born.day() == 29) {
            prop_assert_eq!(next.day(), born.day());
        }
    }

    #[test]
    fn birthday_today_is_zero_days_away(today in arb_date(), age in 1i32..100) {
        let born = NaiveDate::from_ymd_opt(today.year() - age, today.month(), today.day());
        if let Some(born) = born {
            prop_assert_eq!(Birthday::from_date(born).days_until(today), Some(0));
        }
    }
}

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn pages_cover_the_book_in_order(book in arb_book(), page_size in 1usize..8) {
        let pages: Vec<_> = book.pages(page_size).collect();

        prop_assert_eq!(pages.len(), book.len().div_ceil(page_size));
        for (i, page) in pages.iter().enumerate() {
            prop_assert!(!page.is_empty());
            prop_assert!(page.len() <= page_size);
            if i + 1 < pages.len() {
                prop_assert_eq!(page.len(), page_size);
            }
        }

        let flattened: Vec<_> = pages.into_iter().flatten().collect();
        let all: Vec<_> = book.iter().collect();
        prop_assert_eq!(flattened, all);
    }
}
