// File: rusty-forms/src/error.rs
// Purpose: Error taxonomy for field validation and record binding

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a single character was rejected by the rule engine.
///
/// The classes are checked in declaration order, so a space is always
/// reported as `Space` even when the allow-list would have covered other
/// whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    Space,
    Tilde,
    Tab,
    Newline,
    Letter,
    Digit,
    Other,
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CharClass::Space => "space",
            CharClass::Tilde => "accented letter",
            CharClass::Tab => "tab",
            CharClass::Newline => "newline",
            CharClass::Letter => "letter",
            CharClass::Digit => "digit",
            CharClass::Other => "character",
        };
        f.write_str(label)
    }
}

/// Structural problem found by a variant-specific check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatIssue {
    /// Wrong overall shape, e.g. `21/12/1998` for a date.
    Layout,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    /// A national ID without the `-` before its check character.
    MissingSeparator,
    /// A national ID body that is not a number or starts with zero.
    Body,
    ZeroAddress,
    MixedSeparators,
    Whitespace,
    LeadingBackslash,
    /// Not one of the accepted checkbox tokens.
    Boolean,
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormatIssue::Layout => "unexpected layout",
            FormatIssue::Year => "year out of range",
            FormatIssue::Month => "month out of range",
            FormatIssue::Day => "day out of range",
            FormatIssue::Hour => "hour out of range",
            FormatIssue::Minute => "minute out of range",
            FormatIssue::MissingSeparator => "hyphen missing",
            FormatIssue::Body => "number part is invalid",
            FormatIssue::ZeroAddress => "unspecified address",
            FormatIssue::MixedSeparators => "mixed '.' and ':' separators",
            FormatIssue::Whitespace => "whitespace not allowed",
            FormatIssue::LeadingBackslash => "must not start with '\\'",
            FormatIssue::Boolean => "expected true, false, on, 1 or 0",
        };
        f.write_str(label)
    }
}

/// Violation reported when validating a single value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputError {
    #[error("must be at least {min} characters")]
    TooShort { min: usize },

    #[error("must be at most {max} characters")]
    TooLong { max: usize },

    #[error("text {text:?} is not allowed")]
    ForbiddenText { text: String },

    #[error("{class} {character:?} is not allowed")]
    CharacterNotAllowed { character: char, class: CharClass },

    #[error("invalid format: {issue}")]
    FormatInvalid { issue: FormatIssue },

    #[error("check digit does not match")]
    ChecksumInvalid,

    #[error("value {value:?} is not one of the options")]
    ValueNotAllowed { value: String },

    #[error("a value is required")]
    Required,
}

impl InputError {
    pub(crate) fn format(issue: FormatIssue) -> Self {
        InputError::FormatInvalid { issue }
    }
}

/// Failure while binding, validating or syncing a whole form.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("no registered input matches field `{field}` of `{record}`")]
    FieldUnmatched { record: &'static str, field: String },

    #[error("field `{field}` is invalid: {source}")]
    Invalid {
        field: String,
        id: String,
        #[source]
        source: InputError,
    },

    #[error("no input with id `{id}`")]
    UnknownInput { id: String },

    #[error("field `{field}` has no slot {index} on the record")]
    FieldIndex { field: String, index: usize },
}

impl FormError {
    /// The input-level violation, when this is a validation failure.
    pub fn input_error(&self) -> Option<&InputError> {
        match self {
            FormError::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Name of the field this error is about, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            FormError::FieldUnmatched { field, .. }
            | FormError::Invalid { field, .. }
            | FormError::FieldIndex { field, .. } => Some(field),
            FormError::UnknownInput { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_violation() {
        let err = InputError::CharacterNotAllowed {
            character: '@',
            class: CharClass::Other,
        };
        assert_eq!(err.to_string(), "character '@' is not allowed");
        assert_eq!(
            InputError::format(FormatIssue::MissingSeparator).to_string(),
            "invalid format: hyphen missing"
        );
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(InputError::TooShort { min: 5 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "too_short", "min": 5}));

        let json = serde_json::to_value(InputError::format(FormatIssue::Day)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "format_invalid", "issue": "day"}));
    }

    #[test]
    fn test_form_error_exposes_field_and_source() {
        let err = FormError::Invalid {
            field: "email".into(),
            id: "signup.email".into(),
            source: InputError::Required,
        };
        assert_eq!(err.field(), Some("email"));
        assert_eq!(err.input_error(), Some(&InputError::Required));
        assert!(err.to_string().contains("email"));
    }
}
