// File: rusty-forms/src/value.rs
// Purpose: Field values exchanged between records and inputs

use chrono::{NaiveDate, NaiveTime};

/// Value read from a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A string field, bound as a single value.
    Text(String),
    /// A string-sequence field, bound as multiple values.
    List(Vec<String>),
    /// Any other scalar, stringified. Never written back.
    Scalar(String),
    /// An absent optional value.
    Empty,
}

impl FieldValue {
    /// Values as an input holds them.
    pub fn into_values(self) -> Vec<String> {
        match self {
            FieldValue::Text(s) | FieldValue::Scalar(s) => vec![s],
            FieldValue::List(items) => items,
            FieldValue::Empty => Vec::new(),
        }
    }

    /// Values to run validation on: every value, or a single empty string
    /// when there is none.
    pub fn selected(&self) -> Vec<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Scalar(s) => vec![s.as_str()],
            FieldValue::List(items) if !items.is_empty() => {
                items.iter().map(String::as_str).collect()
            }
            FieldValue::List(_) | FieldValue::Empty => vec![""],
        }
    }
}

/// Conversion between a record field's Rust type and input values.
///
/// `from_values` returns `None` for types that are never written back,
/// which leaves the field untouched on sync.
pub trait FieldType: Sized {
    fn to_field_value(&self) -> FieldValue;

    fn from_values(_values: &[String]) -> Option<Self> {
        None
    }
}

impl FieldType for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }

    fn from_values(values: &[String]) -> Option<Self> {
        Some(values.first().cloned().unwrap_or_default())
    }
}

impl FieldType for Vec<String> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::List(self.clone())
    }

    fn from_values(values: &[String]) -> Option<Self> {
        Some(values.to_vec())
    }
}

impl FieldType for Option<String> {
    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(s) => FieldValue::Text(s.clone()),
            None => FieldValue::Empty,
        }
    }

    fn from_values(values: &[String]) -> Option<Self> {
        Some(values.first().cloned())
    }
}

macro_rules! scalar_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldType for $ty {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Scalar(self.to_string())
                }
            }
        )*
    };
}

scalar_field!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl FieldType for NaiveDate {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Scalar(self.format("%Y-%m-%d").to_string())
    }
}

impl FieldType for NaiveTime {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Scalar(self.format("%H:%M").to_string())
    }
}

macro_rules! optional_scalar_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldType for Option<$ty> {
                fn to_field_value(&self) -> FieldValue {
                    match self {
                        Some(v) => v.to_field_value(),
                        None => FieldValue::Empty,
                    }
                }
            }
        )*
    };
}

optional_scalar_field!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, NaiveDate, NaiveTime);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_round_trip() {
        let value = "Ana".to_string().to_field_value();
        assert_eq!(value, FieldValue::Text("Ana".into()));
        let values = value.into_values();
        assert_eq!(String::from_values(&values), Some("Ana".to_string()));
        assert_eq!(String::from_values(&[]), Some(String::new()));
    }

    #[test]
    fn test_list_round_trip() {
        let tags = vec!["a".to_string(), "b".to_string()];
        let values = tags.to_field_value().into_values();
        assert_eq!(Vec::<String>::from_values(&values), Some(tags));
    }

    #[test]
    fn test_optional_string_clears_to_none() {
        assert_eq!(None::<String>.to_field_value(), FieldValue::Empty);
        assert_eq!(Option::<String>::from_values(&[]), Some(None));
    }

    #[test]
    fn test_scalars_are_stringified_and_not_written_back() {
        assert_eq!(42u32.to_field_value(), FieldValue::Scalar("42".into()));
        assert_eq!(true.to_field_value(), FieldValue::Scalar("true".into()));
        assert_eq!(u32::from_values(&["7".to_string()]), None);
        assert_eq!(Some(3i64).to_field_value(), FieldValue::Scalar("3".into()));
    }

    #[test]
    fn test_chrono_formats() {
        let date = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        assert_eq!(date.to_field_value(), FieldValue::Scalar("2020-02-29".into()));
        let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(time.to_field_value(), FieldValue::Scalar("09:05".into()));
    }

    #[test]
    fn test_selected_values() {
        assert_eq!(FieldValue::Empty.selected(), vec![""]);
        assert_eq!(FieldValue::List(vec![]).selected(), vec![""]);
        assert_eq!(
            FieldValue::List(vec!["x".into(), "y".into()]).selected(),
            vec!["x", "y"]
        );
    }
}
