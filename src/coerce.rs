//! Conversions from raw cell text to typed record attributes.
//!
//! Each record kind's `assign` picks one of these per field. Optional coercions treat a
//! blank cell as absent; required ones never invent a value.
use chrono::NaiveDate;
use url::Url;

use crate::enums::RawValue;
use crate::error::TransitError;
use crate::schema::FieldSchema;
use crate::values::{Color, ServiceTime};

type Result<T> = std::result::Result<T, TransitError>;

pub fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}

/// The raw text, verbatim. Empty is kept as empty; required checks happen after assignment.
pub fn string(cell: &str) -> String {
    cell.to_owned()
}

pub fn optional_string(cell: &str) -> Option<String> {
    if is_blank(cell) {
        None
    } else {
        Some(cell.to_owned())
    }
}

/// A non-negative base-10 integer. Signs, decimal points and blanks are rejected.
pub fn uint<F: FieldSchema>(field: F, cell: &str) -> Result<u32> {
    if cell.is_empty() || !cell.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TransitError::invalid(field.label(), cell));
    }
    cell.parse()
        .map_err(|_| TransitError::invalid(field.label(), cell))
}

pub fn optional_uint<F: FieldSchema>(field: F, cell: &str) -> Result<Option<u32>> {
    if is_blank(cell) {
        return Ok(None);
    }
    uint(field, cell).map(Some)
}

fn finite_double<F: FieldSchema>(field: F, cell: &str) -> Result<f64> {
    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TransitError::invalid(field.label(), cell)),
    }
}

pub fn optional_double<F: FieldSchema>(field: F, cell: &str) -> Result<Option<f64>> {
    if is_blank(cell) {
        return Ok(None);
    }
    finite_double(field, cell).map(Some)
}

/// A latitude or longitude that must be present.
pub fn coordinate<F: FieldSchema>(field: F, cell: &str) -> Result<f64> {
    finite_double(field, cell)
}

pub fn url<F: FieldSchema>(field: F, cell: &str) -> Result<Url> {
    Url::parse(cell).map_err(|_| TransitError::invalid(field.label(), cell))
}

pub fn optional_url<F: FieldSchema>(field: F, cell: &str) -> Result<Option<Url>> {
    if is_blank(cell) {
        return Ok(None);
    }
    url(field, cell).map(Some)
}

pub fn optional_color(cell: &str) -> Result<Option<Color>> {
    if is_blank(cell) {
        return Ok(None);
    }
    cell.parse().map(Some)
}

/// Decodes a closed enumeration from its raw unsigned value.
pub fn enumeration<E: RawValue, F: FieldSchema>(field: F, cell: &str) -> Result<E> {
    let raw = uint(field, cell)?;
    E::from_raw(raw).ok_or_else(|| TransitError::invalid(field.label(), cell))
}

pub fn optional_enumeration<E: RawValue, F: FieldSchema>(field: F, cell: &str) -> Result<Option<E>> {
    if is_blank(cell) {
        return Ok(None);
    }
    enumeration(field, cell).map(Some)
}

/// A `YYYYMMDD` service date.
pub fn date<F: FieldSchema>(field: F, cell: &str) -> Result<NaiveDate> {
    if cell.len() != 8 {
        return Err(TransitError::invalid(field.label(), cell));
    }
    NaiveDate::parse_from_str(cell, "%Y%m%d").map_err(|_| TransitError::invalid(field.label(), cell))
}

pub fn optional_time<F: FieldSchema>(field: F, cell: &str) -> Result<Option<ServiceTime>> {
    if is_blank(cell) {
        return Ok(None);
    }
    ServiceTime::parse(cell)
        .map(Some)
        .ok_or_else(|| TransitError::invalid(field.label(), cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::RouteType;
    use crate::route::RouteField;

    const F: RouteField = RouteField::SortOrder;

    #[test]
    fn uint_accepts_only_digits() {
        assert_eq!(uint(F, "0"), Ok(0));
        assert_eq!(uint(F, "0042"), Ok(42));
        for bad in &["", "-1", "+1", "1.0", "1e3", " 1", "one", "99999999999"] {
            assert_eq!(
                uint(F, bad),
                Err(TransitError::InvalidFieldType {
                    field: "route_sort_order",
                    value: bad.to_string()
                }),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn blank_optionals_are_absent() {
        assert_eq!(optional_string(""), None);
        assert_eq!(optional_string("  "), None);
        assert_eq!(optional_string(" x "), Some(" x ".to_string()));
        assert_eq!(optional_uint(F, ""), Ok(None));
        assert_eq!(optional_double(F, " "), Ok(None));
        assert_eq!(optional_url(F, ""), Ok(None));
        assert_eq!(optional_color(""), Ok(None));
        assert_eq!(optional_enumeration::<RouteType, _>(F, ""), Ok(None));
        assert_eq!(optional_time(F, ""), Ok(None));
    }

    #[test]
    fn plain_string_is_verbatim() {
        assert_eq!(string(""), "");
        assert_eq!(string(" a "), " a ");
    }

    #[test]
    fn doubles() {
        assert_eq!(optional_double(F, "12.5"), Ok(Some(12.5)));
        assert_eq!(coordinate(F, "-33.8688"), Ok(-33.8688));
        assert!(coordinate(F, "").is_err());
        assert!(coordinate(F, "NaN").is_err());
        assert!(optional_double(F, "inf").is_err());
        assert!(optional_double(F, "1,5").is_err());
    }

    #[test]
    fn urls() {
        let parsed = optional_url(F, "https://example.com/route/1").unwrap().unwrap();
        assert_eq!(parsed.host_str(), Some("example.com"));
        assert!(optional_url(F, "not a url").is_err());
        assert!(url(F, "").is_err());
    }

    #[test]
    fn colors() {
        assert_eq!(optional_color("FF0000"), Ok(Some(Color::new(255, 0, 0))));
        assert_eq!(
            optional_color("ZZZZZZ"),
            Err(TransitError::InvalidColor("ZZZZZZ".to_string()))
        );
    }

    #[test]
    fn enumerations_have_no_fallback() {
        assert_eq!(enumeration(F, "3"), Ok(RouteType::Bus));
        assert!(enumeration::<RouteType, _>(F, "99").is_err());
        assert!(enumeration::<RouteType, _>(F, "").is_err());
        assert!(optional_enumeration::<RouteType, _>(F, "-3").is_err());
    }

    #[test]
    fn dates() {
        assert_eq!(date(F, "20240102").ok(), NaiveDate::from_ymd_opt(2024, 1, 2));
        assert!(date(F, "2024-01-02").is_err());
        assert!(date(F, "20241301").is_err());
        assert!(date(F, "").is_err());
    }
}
