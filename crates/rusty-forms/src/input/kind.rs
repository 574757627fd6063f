// File: rusty-forms/src/input/kind.rs
// Purpose: Closed set of input kinds and their default rules

use crate::options::KeyValue;
use crate::permitted::Permitted;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic kind of an input. Every kind shares the [`Input`](super::Input)
/// shape and differs in default rules, aliases and structural checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Address,
    Email,
    Password,
    Phone,
    Number,
    Date,
    Hour,
    /// Chilean national ID (RUT) with a modulo-11 check character.
    Rut,
    Ip,
    Filepath,
    Checkbox,
    Radio,
    Gender,
    Select,
    Datalist,
    Textarea,
}

impl InputKind {
    pub const ALL: [InputKind; 17] = [
        InputKind::Text,
        InputKind::Address,
        InputKind::Email,
        InputKind::Password,
        InputKind::Phone,
        InputKind::Number,
        InputKind::Date,
        InputKind::Hour,
        InputKind::Rut,
        InputKind::Ip,
        InputKind::Filepath,
        InputKind::Checkbox,
        InputKind::Radio,
        InputKind::Gender,
        InputKind::Select,
        InputKind::Datalist,
        InputKind::Textarea,
    ];

    /// Canonical lowercase name, also used as the template name.
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Address => "address",
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Phone => "phone",
            InputKind::Number => "number",
            InputKind::Date => "date",
            InputKind::Hour => "hour",
            InputKind::Rut => "rut",
            InputKind::Ip => "ip",
            InputKind::Filepath => "filepath",
            InputKind::Checkbox => "checkbox",
            InputKind::Radio => "radio",
            InputKind::Gender => "gender",
            InputKind::Select => "select",
            InputKind::Datalist => "datalist",
            InputKind::Textarea => "textarea",
        }
    }

    /// HTML tag used for matching and render dispatch.
    pub fn html_name(self) -> &'static str {
        match self {
            InputKind::Text
            | InputKind::Address
            | InputKind::Rut
            | InputKind::Ip
            | InputKind::Filepath => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Phone => "tel",
            InputKind::Number => "number",
            InputKind::Date => "date",
            InputKind::Hour => "time",
            InputKind::Checkbox => "checkbox",
            InputKind::Radio | InputKind::Gender => "radio",
            InputKind::Select => "select",
            InputKind::Datalist => "datalist",
            InputKind::Textarea => "textarea",
        }
    }

    pub fn default_aliases(self) -> &'static [&'static str] {
        match self {
            InputKind::Text => &["name", "fullname", "username"],
            InputKind::Address => &["address", "addr", "direccion", "dir", "location"],
            InputKind::Email => &["mail", "correo"],
            InputKind::Password => &["pass", "clave", "pwd"],
            InputKind::Phone => &["phone", "mobile", "cell"],
            InputKind::Number => &["num", "amount", "price", "age"],
            InputKind::Date => &["fecha"],
            InputKind::Hour => &["hour"],
            InputKind::Rut => &["rut", "run", "dni"],
            InputKind::Ip => &["ip"],
            InputKind::Filepath => &["path", "file"],
            InputKind::Checkbox => &["check", "boolean", "bool"],
            InputKind::Radio => &[],
            InputKind::Gender => &["gender", "sexo"],
            InputKind::Select => &["role", "tipo"],
            InputKind::Datalist => &["list", "options"],
            InputKind::Textarea => &["description", "details", "comments"],
        }
    }

    /// Options a fresh input of this kind starts with.
    pub fn default_options(self) -> Vec<KeyValue> {
        match self {
            InputKind::Gender => vec![KeyValue::new("m", "Male"), KeyValue::new("f", "Female")],
            _ => Vec::new(),
        }
    }

    /// True for kinds validated against their option list.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            InputKind::Radio | InputKind::Gender | InputKind::Select | InputKind::Datalist
        )
    }

    pub fn default_rules(self) -> Permitted {
        let letters_digits = Permitted {
            letters: true,
            numbers: true,
            ..Default::default()
        };
        let digits = Permitted {
            numbers: true,
            ..Default::default()
        };

        match self {
            InputKind::Text => Permitted {
                tilde: true,
                ..letters_digits
            }
            .with_characters(&[' ', '.', ',', '(', ')'])
            .with_length(2, 100),
            InputKind::Address => Permitted {
                tilde: true,
                white_spaces: true,
                ..letters_digits
            }
            .with_characters(&['.', ',', '#', '-', '/', '(', ')'])
            .with_length(5, 200),
            InputKind::Email => letters_digits
                .with_characters(&['@', '.', '_', '-'])
                .with_length(5, 100),
            InputKind::Password => Permitted {
                tilde: true,
                ..letters_digits
            }
            .with_characters(&[
                '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '_', '=', '+',
            ])
            .with_length(5, 50),
            InputKind::Phone => digits
                .with_characters(&['+', ' ', '(', ')', '-'])
                .with_length(7, 15),
            InputKind::Number => digits.with_length(1, 20),
            InputKind::Date => digits.with_characters(&['-']).with_length(10, 10),
            InputKind::Hour => digits.with_characters(&[':']).with_length(5, 5),
            InputKind::Rut => digits.with_characters(&['-', 'k', 'K']).with_length(3, 12),
            InputKind::Ip => letters_digits.with_characters(&['.', ':']).with_length(7, 39),
            InputKind::Filepath => letters_digits
                .with_characters(&['.', '\\', '/', '-', '_'])
                .with_length(1, 200),
            InputKind::Checkbox
            | InputKind::Radio
            | InputKind::Gender
            | InputKind::Select
            | InputKind::Datalist => Permitted::default(),
            InputKind::Textarea => Permitted {
                tilde: true,
                break_line: true,
                ..letters_digits
            }
            .with_characters(&[
                ' ', '.', ',', '-', '_', ':', ';', '(', ')', '\r', '$', '#', '!', '?',
            ])
            .with_length(5, 2000),
        }
    }

    /// Looks a kind up by canonical name, HTML tag or default alias.
    pub fn from_name(name: &str) -> Option<InputKind> {
        let name = name.to_lowercase();
        InputKind::ALL.into_iter().find(|kind| {
            kind.as_str() == name
                || kind.html_name() == name
                || kind.default_aliases().contains(&name.as_str())
        })
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(InputKind::from_name("Rut"), Some(InputKind::Rut));
        assert_eq!(InputKind::from_name("tel"), Some(InputKind::Phone));
        assert_eq!(InputKind::from_name("correo"), Some(InputKind::Email));
        assert_eq!(InputKind::from_name("nope"), None);
    }

    #[test]
    fn test_every_kind_listed_once() {
        for kind in InputKind::ALL {
            assert_eq!(InputKind::ALL.iter().filter(|k| **k == kind).count(), 1);
        }
    }

    #[test]
    fn test_choice_kinds() {
        assert!(InputKind::Gender.is_choice());
        assert!(InputKind::Datalist.is_choice());
        assert!(!InputKind::Checkbox.is_choice());
        assert_eq!(InputKind::Gender.default_options().len(), 2);
    }
}
