use serde::{Deserialize, Serialize};

use crate::catalog::record::VehicleRecord;

/// Partial query over the catalog.
///
/// Every present key narrows the result. Absent keys, and text keys that are
/// empty or whitespace-only, impose no constraint. Numeric bounds are
/// inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub make: Option<String>,
    pub model: Option<String>,
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,
    pub year_min: Option<u16>,
    pub year_max: Option<u16>,
    pub mileage_max: Option<u32>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub location: Option<String>,
    pub body_type: Option<String>,
    pub color: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.active_filters().is_empty()
    }

    pub fn matches(&self, record: &VehicleRecord) -> bool {
        contains_ci(&record.make, self.make.as_deref())
            && contains_ci(&record.model, self.model.as_deref())
            && self.price_min.is_none_or(|min| record.price >= min)
            && self.price_max.is_none_or(|max| record.price <= max)
            && self.year_min.is_none_or(|min| record.year >= min)
            && self.year_max.is_none_or(|max| record.year <= max)
            && self.mileage_max.is_none_or(|max| record.mileage <= max)
            && contains_ci(&record.fuel, self.fuel_type.as_deref())
            && contains_ci(&record.transmission, self.transmission.as_deref())
            && contains_ci(&record.location, self.location.as_deref())
            && contains_ci(&record.body_type, self.body_type.as_deref())
            && contains_ci(&record.color, self.color.as_deref())
    }

    /// Labelled values of the keys that constrain the result, in form order.
    pub fn active_filters(&self) -> Vec<(&'static str, String)> {
        let mut active = Vec::new();
        push_text(&mut active, "Make", &self.make);
        push_text(&mut active, "Model", &self.model);
        push_number(&mut active, "Price min", self.price_min);
        push_number(&mut active, "Price max", self.price_max);
        push_number(&mut active, "Year min", self.year_min);
        push_number(&mut active, "Year max", self.year_max);
        push_number(&mut active, "Max mileage", self.mileage_max);
        push_text(&mut active, "Fuel", &self.fuel_type);
        push_text(&mut active, "Transmission", &self.transmission);
        push_text(&mut active, "Location", &self.location);
        push_text(&mut active, "Body type", &self.body_type);
        push_text(&mut active, "Color", &self.color);
        active
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn with_price_min(mut self, price_min: u64) -> Self {
        self.price_min = Some(price_min);
        self
    }

    pub fn with_price_max(mut self, price_max: u64) -> Self {
        self.price_max = Some(price_max);
        self
    }

    pub fn with_body_type(mut self, body_type: impl Into<String>) -> Self {
        self.body_type = Some(body_type.into());
        self
    }
}

/// Unsigned integer types a numeric search bound can be parsed into.
pub trait Amount: std::str::FromStr + Copy {
    const MAX: Self;
}

impl Amount for u16 {
    const MAX: Self = u16::MAX;
}

impl Amount for u32 {
    const MAX: Self = u32::MAX;
}

impl Amount for u64 {
    const MAX: Self = u64::MAX;
}

/// Parses a numeric form value such as `5,000,000`.
///
/// Returns `None` for blank or non-numeric input so the bound is skipped.
/// Digit strings too large for `T` saturate at `T::MAX`: a huge minimum
/// excludes everything and a huge maximum excludes nothing.
pub fn parse_amount<T: Amount>(input: &str) -> Option<T> {
    let digits: String = input
        .chars()
        .filter(|c| !matches!(c, ',' | '_') && !c.is_whitespace())
        .collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse::<T>().unwrap_or(T::MAX))
}

/// Normalizes a text form value: blank input means "no constraint".
pub fn text_value(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle.map(str::trim) {
        None | Some("") => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

fn push_text(out: &mut Vec<(&'static str, String)>, label: &'static str, value: &Option<String>) {
    if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        out.push((label, value.to_string()));
    }
}

fn push_number<T: ToString>(out: &mut Vec<(&'static str, String)>, label: &'static str, value: Option<T>) {
    if let Some(value) = value {
        out.push((label, value.to_string()));
    }
}
