//! Conversions from raw field values into typed values.
//!
//! Every parser receives the field name so errors can name both the field and
//! the offending value.

use crate::gtfs::Error;

/// A closed set of wire codes mapping onto an enumeration.
pub trait Code: Sized {
    /// Returns the variant for `code`, or `None` when the code is not part of the set.
    /// Types with a documented default map the empty string onto it.
    fn from_code(code: &str) -> Option<Self>;
}

pub fn parse_enum<T: Code>(field: &'static str, value: &str) -> Result<T, Error> {
    T::from_code(value).ok_or_else(|| Error::invalid(field, value))
}

/// "0" is false and "1" is true. Anything else, including an empty value, is an error.
pub fn parse_bool(field: &'static str, value: &str) -> Result<bool, Error> {
    match value {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(Error::invalid(field, value)),
    }
}

/// Like [`parse_bool`] but an empty value is false.
pub fn parse_optional_bool(field: &'static str, value: &str) -> Result<bool, Error> {
    match value {
        "" => Ok(false),
        _ => parse_bool(field, value),
    }
}

/// An unsigned integer where an empty value defaults to 0.
pub fn parse_u64(field: &'static str, value: &str) -> Result<u64, Error> {
    match value {
        "" => Ok(0),
        _ => parse_required_u64(field, value),
    }
}

pub fn parse_required_u64(field: &'static str, value: &str) -> Result<u64, Error> {
    // u64::from_str accepts a leading '+'
    if value.starts_with('+') {
        return Err(Error::invalid(field, value));
    }
    value.parse().map_err(|_| Error::invalid(field, value))
}

pub fn parse_f64(field: &'static str, value: &str) -> Result<f64, Error> {
    value.parse().map_err(|_| Error::invalid(field, value))
}

/// A float where an empty value defaults to 0.0.
pub fn parse_optional_f64(field: &'static str, value: &str) -> Result<f64, Error> {
    match value {
        "" => Ok(0.0),
        _ => parse_f64(field, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_values() {
        assert!(!parse_bool("monday", "0").unwrap());
        assert!(parse_bool("monday", "1").unwrap());
        assert!(parse_bool("monday", "").is_err());
        assert!(parse_bool("monday", "2").is_err());
        assert!(parse_bool("monday", "true").is_err());
    }

    #[test]
    fn optional_bool_values() {
        assert!(!parse_optional_bool("exact_times", "").unwrap());
        assert!(!parse_optional_bool("exact_times", "0").unwrap());
        assert!(parse_optional_bool("exact_times", "1").unwrap());
        assert!(parse_optional_bool("exact_times", "2").is_err());
        assert!(parse_optional_bool("exact_times", "foo").is_err());
    }

    #[test]
    fn unsigned_values() {
        assert_eq!(parse_u64("route_sort_order", "").unwrap(), 0);
        assert_eq!(parse_u64("route_sort_order", "42").unwrap(), 42);
        assert!(parse_u64("route_sort_order", "-1").is_err());
        assert!(parse_u64("route_sort_order", "+1").is_err());
        assert!(parse_u64("route_sort_order", "1.5").is_err());
        assert!(parse_u64("route_sort_order", "foo").is_err());
    }

    #[test]
    fn required_unsigned_values() {
        assert_eq!(parse_required_u64("stop_sequence", "7").unwrap(), 7);
        assert!(parse_required_u64("stop_sequence", "").is_err());
    }

    #[test]
    fn float_values() {
        assert_eq!(parse_f64("stop_lat", "52.5").unwrap(), 52.5);
        assert_eq!(parse_f64("stop_lat", "-13").unwrap(), -13.0);
        assert!(parse_f64("stop_lat", "").is_err());
        assert!(parse_f64("stop_lat", "north").is_err());

        assert_eq!(parse_optional_f64("shape_dist_traveled", "").unwrap(), 0.0);
        assert_eq!(parse_optional_f64("shape_dist_traveled", "50.2").unwrap(), 50.2);
        assert!(parse_optional_f64("shape_dist_traveled", "far").is_err());
    }

    #[test]
    fn error_names_field_and_value() {
        let err = parse_u64("transfer_duration", "abc").unwrap_err();
        assert_eq!(err.to_string(), "invalid transfer_duration: \"abc\"");
    }
}
