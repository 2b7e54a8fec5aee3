use serde::{Deserialize, Deserializer};

/// Placeholder shown for text fields the backend left empty.
pub const NOT_AVAILABLE: &str = "N/A";

/// The backend returns documents either bare or wrapped in `{ "data": ... }`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyNumber {
    F64(f64),
    Str(String),
}

impl AnyNumber {
    fn into_f64(self) -> Option<f64> {
        match self {
            Self::F64(f) => Some(f),
            // Spreadsheet imports leave values like "42.5%" or " 12 ".
            Self::Str(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u32(f: f64) -> Option<u32> {
    let rounded = f.round();
    if rounded >= 0.0 && rounded <= f64::from(u32::MAX) {
        Some(rounded as u32)
    } else {
        None
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_i32(f: f64) -> Option<i32> {
    let rounded = f.round();
    if rounded >= f64::from(i32::MIN) && rounded <= f64::from(i32::MAX) {
        Some(rounded as i32)
    } else {
        None
    }
}

/// Accepts a JSON number, a numeric string or null. Unparseable strings become `None`.
pub(crate) fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<AnyNumber>::deserialize(deserializer)?
        .and_then(AnyNumber::into_f64)
        .filter(|f| f.is_finite()))
}

pub(crate) fn de_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_lenient_f64(deserializer)?.and_then(to_u32))
}

pub(crate) fn de_lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_lenient_f64(deserializer)?.and_then(to_i32))
}

/// Year lists sometimes arrive as strings (`["2023", "2022"]`).
pub(crate) fn de_lenient_years<'de, D>(deserializer: D) -> Result<Option<Vec<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<AnyNumber>>::deserialize(deserializer)?;
    Ok(raw.map(|items| {
        items
            .into_iter()
            .filter_map(|n| n.into_f64().and_then(to_i32))
            .collect()
    }))
}

/// Identifiers are numeric in some tables and UUID strings in others.
pub(crate) fn de_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyId {
        Int(i64),
        Float(f64),
        Str(String),
    }

    Ok(match Option::<AnyId>::deserialize(deserializer)? {
        Some(AnyId::Int(i)) => Some(i.to_string()),
        Some(AnyId::Float(f)) => Some(f.to_string()),
        Some(AnyId::Str(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

pub fn or_zero(v: Option<f64>) -> f64 {
    v.unwrap_or(0.0)
}

pub fn or_zero_u32(v: Option<u32>) -> u32 {
    v.unwrap_or(0)
}

/// Missing or blank strings become [`NOT_AVAILABLE`].
pub fn or_na(v: Option<String>) -> String {
    match v {
        Some(s) if !s.trim().is_empty() => s,
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Blank strings are treated the same as missing ones.
pub(crate) fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

/// `part` as a percentage of `whole`; zero when there is no whole to divide by.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole * 100.0 } else { 0.0 }
}
