//! Reporting-year resolution.
//!
//! A company declares the years it reports on either as a free-text range
//! (`"2020-2023"`, `"2020 – 2023"`, `"2020 to 2023"`) or through the most recent
//! report year. [`resolve_years`] turns those hints into the descending list shown
//! by the year selector; once the backend answers, [`effective_years`] lets the
//! list it reports take over.

use chrono::{Datelike, Utc};
use std::ops::RangeInclusive;

/// Years at or below this are never synthesized from a latest report year.
pub const EARLIEST_SYNTHESIZED_YEAR_EXCLUSIVE: i32 = 2020;

/// How many years are synthesized back from the latest report year.
pub const SYNTHESIZED_WINDOW: i32 = 4;

/// Reporting years a company record may name.
pub const REPORT_YEARS: RangeInclusive<i32> = 1900..=2100;

/// Anything that carries the year hints of a company record.
pub trait YearSource {
    /// Free-text reporting range, e.g. `"2020-2023"`.
    fn year_range(&self) -> Option<&str>;
    /// The most recent year a report was filed for.
    fn latest_report_year(&self) -> Option<i32>;
}

/// Plain carrier for year hints when no full company record is at hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearHints {
    pub year_range: Option<String>,
    pub latest_report_year: Option<i32>,
}

impl YearSource for YearHints {
    fn year_range(&self) -> Option<&str> {
        self.year_range.as_deref()
    }

    fn latest_report_year(&self) -> Option<i32> {
        self.latest_report_year
    }
}

/// Leading-integer parse: optional sign then ASCII digits, trailing garbage ignored.
fn parse_leading_int(token: &str) -> Option<i32> {
    let (sign, digits) = match token.as_bytes().first() {
        Some(b'-') => (-1, &token[1..]),
        Some(b'+') => (1, &token[1..]),
        _ => (1, token),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i32>().ok().map(|v| v * sign)
}

/// Expands a year range string into the ascending list of years it covers.
///
/// En-dashes and the word `to` are accepted as separators and whitespace is
/// ignored. Missing input, a single year, unparseable bounds, a reversed range
/// or a bound outside [`REPORT_YEARS`] yields an empty list.
///
/// ```
/// use esg_dashboard::years::parse_range;
///
/// assert_eq!(parse_range(Some("2020–2022")), vec![2020, 2021, 2022]);
/// assert!(parse_range(Some("2023-2020")).is_empty());
/// ```
#[must_use]
pub fn parse_range(input: Option<&str>) -> Vec<i32> {
    let Some(raw) = input else {
        return Vec::new();
    };

    let normalized: String = raw
        .replace('\u{2013}', "-")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace("to", "-");

    let mut tokens = normalized.split('-');
    let start = tokens.next().and_then(parse_leading_int);
    let end = tokens.next().and_then(parse_leading_int);

    match (start, end) {
        (Some(start), Some(end))
            if start <= end && REPORT_YEARS.contains(&start) && REPORT_YEARS.contains(&end) =>
        {
            (start..=end).collect()
        }
        _ => {
            if !raw.trim().is_empty() {
                #[cfg(feature = "tracing")]
                tracing::warn!(input = raw, "ignoring unparseable year range");
            }
            Vec::new()
        }
    }
}

/// Resolves the descending year list for a company using today's calendar year
/// as the last-resort fallback.
#[must_use]
pub fn resolve_years(source: &impl YearSource) -> Vec<i32> {
    resolve_years_at(source, Utc::now().year())
}

/// Resolves the descending year list for a company.
///
/// 1. An explicit range string wins when it parses to at least one year.
/// 2. Otherwise up to [`SYNTHESIZED_WINDOW`] years ending at the latest report
///    year, keeping only years after [`EARLIEST_SYNTHESIZED_YEAR_EXCLUSIVE`].
/// 3. Otherwise just `current_year`.
#[must_use]
pub fn resolve_years_at(source: &impl YearSource, current_year: i32) -> Vec<i32> {
    let mut from_range = parse_range(source.year_range());
    if !from_range.is_empty() {
        from_range.sort_unstable_by(|a, b| b.cmp(a));
        return from_range;
    }

    if let Some(latest) = source.latest_report_year() {
        return (0..SYNTHESIZED_WINDOW)
            .map(|back| latest.saturating_sub(back))
            .filter(|year| *year > EARLIEST_SYNTHESIZED_YEAR_EXCLUSIVE)
            .collect();
    }

    vec![current_year]
}

/// Picks the year list to display: the backend's when it reported one, otherwise the resolved guess.
#[must_use]
pub fn effective_years(resolved: Vec<i32>, backend: Option<&[i32]>) -> Vec<i32> {
    match backend {
        Some(years) if !years.is_empty() => {
            let mut years = years.to_vec();
            years.sort_unstable_by(|a, b| b.cmp(a));
            years.dedup();
            years
        }
        _ => resolved,
    }
}

/// The year a descending list starts with, i.e. the one the selector opens on.
#[must_use]
pub fn latest_year(years: &[i32]) -> Option<i32> {
    years.first().copied()
}
