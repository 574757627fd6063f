// File: rusty-forms/src/input/checks.rs
// Purpose: Structural checks layered on top of the rule engine

use crate::error::{FormatIssue, InputError};
use crate::options::KeyValue;
use crate::permitted::Permitted;

const CHECKBOX_TOKENS: [&str; 6] = ["", "false", "true", "on", "0", "1"];

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn digits_value(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

/// `YYYY-MM-DD`, calendar-valid.
pub(super) fn date(rules: &Permitted, value: &str) -> Result<(), InputError> {
    rules.validate(value)?;

    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return Err(InputError::format(FormatIssue::Layout));
    }
    let layout_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !layout_ok {
        return Err(InputError::format(FormatIssue::Layout));
    }

    let year = digits_value(&value[..4]);
    let month = digits_value(&value[5..7]);
    let day = digits_value(&value[8..]);

    if !(1000..=9999).contains(&year) {
        return Err(InputError::format(FormatIssue::Year));
    }
    if !(1..=12).contains(&month) {
        return Err(InputError::format(FormatIssue::Month));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(InputError::format(FormatIssue::Day));
    }
    Ok(())
}

/// `HH:MM` on a 24 hour clock, 00:00 to 23:59.
pub(super) fn hour(rules: &Permitted, value: &str) -> Result<(), InputError> {
    if value.starts_with("24") {
        return Err(InputError::format(FormatIssue::Hour));
    }
    rules.validate(value)?;

    let bytes = value.as_bytes();
    let layout_ok = bytes.len() == 5
        && bytes[2] == b':'
        && bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit);
    if !layout_ok {
        return Err(InputError::format(FormatIssue::Layout));
    }
    if digits_value(&value[..2]) > 23 {
        return Err(InputError::format(FormatIssue::Hour));
    }
    if digits_value(&value[3..]) > 59 {
        return Err(InputError::format(FormatIssue::Minute));
    }
    Ok(())
}

/// Expected check character for a RUT body: weights 2..=7 cycle from the
/// rightmost digit, `11 - sum % 11`, with 11 → "0" and 10 → "k".
fn rut_check_digit(mut body: u64) -> String {
    let mut sum = 0;
    let mut factor = 2;
    while body != 0 {
        sum += (body % 10) * factor;
        body /= 10;
        factor = if factor == 7 { 2 } else { factor + 1 };
    }
    match 11 - (sum % 11) {
        11 => "0".to_string(),
        10 => "k".to_string(),
        digit => digit.to_string(),
    }
}

/// `<body>-<check>` with a valid modulo-11 check character.
pub(super) fn rut(rules: &Permitted, value: &str) -> Result<(), InputError> {
    rules.validate(value)?;

    if !value.contains('-') {
        return Err(InputError::format(FormatIssue::MissingSeparator));
    }
    let mut parts = value.split('-');
    let (body, check) = match (parts.next(), parts.next(), parts.next()) {
        (Some(body), Some(check), None) => (body, check),
        _ => return Err(InputError::format(FormatIssue::Layout)),
    };
    if check.chars().count() != 1 {
        return Err(InputError::format(FormatIssue::Layout));
    }
    if body.is_empty() || body.starts_with('0') || !body.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::format(FormatIssue::Body));
    }
    let number: u64 = body
        .parse()
        .map_err(|_| InputError::format(FormatIssue::Body))?;

    if rut_check_digit(number) != check.to_lowercase() {
        return Err(InputError::ChecksumInvalid);
    }
    Ok(())
}

/// IPv4 or IPv6 text, not the unspecified v4 address and not a mix of both
/// separator styles.
pub(super) fn ip(rules: &Permitted, value: &str) -> Result<(), InputError> {
    if value == "0.0.0.0" {
        return Err(InputError::format(FormatIssue::ZeroAddress));
    }
    rules.validate(value)?;

    if value.contains('.') && value.contains(':') {
        return Err(InputError::format(FormatIssue::MixedSeparators));
    }
    Ok(())
}

pub(super) fn filepath(rules: &Permitted, value: &str) -> Result<(), InputError> {
    rules.validate(value)?;

    if value.chars().any(char::is_whitespace) {
        return Err(InputError::format(FormatIssue::Whitespace));
    }
    if value.starts_with('\\') {
        return Err(InputError::format(FormatIssue::LeadingBackslash));
    }
    Ok(())
}

pub(super) fn checkbox(required: bool, value: &str) -> Result<(), InputError> {
    let token = value.to_lowercase();
    if token.is_empty() && required {
        return Err(InputError::Required);
    }
    if CHECKBOX_TOKENS.contains(&token.as_str()) {
        Ok(())
    } else {
        Err(InputError::format(FormatIssue::Boolean))
    }
}

/// Value must be one of the option keys (ignoring case). Without options
/// any value is accepted, and an empty value only fails when required.
pub(super) fn choice(options: &[KeyValue], required: bool, value: &str) -> Result<(), InputError> {
    if value.is_empty() && required {
        return Err(InputError::Required);
    }
    if value.is_empty() || options.is_empty() {
        return Ok(());
    }
    let wanted = value.to_lowercase();
    if options.iter().any(|opt| opt.key.to_lowercase() == wanted) {
        Ok(())
    } else {
        Err(InputError::ValueNotAllowed {
            value: value.to_string(),
        })
    }
}
