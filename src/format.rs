//! Display formatting for figures and dates shown on the report pages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate};

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Abbreviate a number with a `K`/`M`/`B` suffix and one decimal place.
///
/// Values below one thousand are printed unchanged. Rounding follows JS
/// `toFixed(1)`: the exact binary value is rounded, and only exact halves
/// round up, so `1.45` (stored as `1.4499…`) gives `"1.4"`.
pub fn format_number(num: f64) -> String {
    if num >= BILLION {
        return format!("{}B", one_decimal(num / BILLION));
    }
    if num >= MILLION {
        return format!("{}M", one_decimal(num / MILLION));
    }
    if num >= THOUSAND {
        return format!("{}K", one_decimal(num / THOUSAND));
    }
    format!("{num}")
}

/// `value` is positive. `{:.1}` rounds the exact expansion but breaks ties
/// to even; an exact tie `(2k + 1) / 20` is rounded up instead.
#[allow(clippy::float_cmp)]
fn one_decimal(value: f64) -> String {
    let twentieths = value * 20.0;
    let exact = value.mul_add(20.0, -twentieths) == 0.0;
    if exact && twentieths.fract() == 0.0 && twentieths % 2.0 == 1.0 {
        return format!("{:.1}", (twentieths + 1.0) / 20.0);
    }
    format!("{value:.1}")
}

/// Format a `YYYY-MM-DD` date or RFC 3339 timestamp as `"Jan 15, 2024"`.
///
/// Timestamps keep the calendar date as written, independent of the
/// visitor's time zone. Returns `None` when the input is neither.
pub fn format_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()));
    match parsed {
        Ok(date) => Some(date.format("%b %-d, %Y").to_string()),
        Err(err) => {
            log::debug!("unparseable date {raw:?}: {err}");
            None
        }
    }
}
