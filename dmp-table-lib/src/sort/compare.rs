//! Type-aware cell comparison.
//!
//! Every pair of cells is compared through three tiers, decided per pair
//! because the tier depends on both values, not on the column:
//!
//! 1. **Numeric**: both values read as non-NaN floats (see
//!    [`Value::as_f64`]).
//! 2. **Date**: both values are `DD/MM/YYYY` strings, parsed day first.
//! 3. **Raw**: strings lexicographically, bools `false < true`, date-times
//!    chronologically, anything else by rendered text.
//!
//! Null and absent cells never reach the tiers: they sort after every
//! present value in both directions.

use std::cmp::Ordering;
use std::sync::LazyLock;

use chrono::Months;
use chrono::NaiveDate;
use chrono::TimeDelta;
use regex::Regex;

use crate::model::SortDirection;
use crate::model::Value;

static DAY_FIRST_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").expect("date pattern is valid")
});

/// Compares two present values using the numeric, date and raw tiers.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) {
        // Neither side is NaN, so partial_cmp is total here.
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }

    if let (Some(x), Some(y)) = (day_first_date(a), day_first_date(b)) {
        return x.cmp(&y);
    }

    compare_raw(a, b)
}

/// Compares two cells for one sort column.
///
/// Absent and `Null` cells are placed after present ones regardless of
/// `direction`; only the comparison between present values is inverted for
/// [`SortDirection::Descending`].
pub fn compare_cells(a: Option<&Value>, b: Option<&Value>, direction: SortDirection) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = compare_values(a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

/// Parses a `DD/MM/YYYY` string.
///
/// Out-of-range days and months roll over into neighbouring months and
/// years, so `31/02/2024` is 2 March 2024 and `00/01/2024` is the last day
/// of 2023.
pub fn day_first_date(value: &Value) -> Option<NaiveDate> {
    let caps = DAY_FIRST_DATE.captures(value.as_str()?)?;
    let day: i64 = caps[1].parse().ok()?;
    let month: i64 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;

    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let month_offset = month - 1;
    let month_start = if month_offset >= 0 {
        start.checked_add_months(Months::new(u32::try_from(month_offset).ok()?))?
    } else {
        start.checked_sub_months(Months::new(u32::try_from(-month_offset).ok()?))?
    };
    month_start.checked_add_signed(TimeDelta::try_days(day - 1)?)
}

fn compare_raw(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::DateTime(x), Value::DateTime(y)) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}
