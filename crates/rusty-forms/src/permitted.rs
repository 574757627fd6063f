// File: rusty-forms/src/permitted.rs
// Purpose: Character-class and length rule engine shared by every input kind

use crate::error::{CharClass, InputError};

const TAB: char = '\t';
const SPACE: char = ' ';
const NEWLINE: char = '\n';

/// Custom check run after the built-in rules pass.
pub type ExtraValidation = fn(&str) -> Result<(), InputError>;

/// Character and length rules consumed by [`Permitted::validate`].
///
/// Flags and `characters` are evaluated per character, `text_not_allowed`
/// per substring. A `minimum` or `maximum` of zero means "no limit".
#[derive(Debug, Clone, Default)]
pub struct Permitted {
    pub letters: bool,
    /// Accented vowels (á é í ó ú).
    pub tilde: bool,
    pub numbers: bool,
    pub break_line: bool,
    pub white_spaces: bool,
    pub tabulation: bool,
    pub text_not_allowed: Vec<String>,
    pub characters: Vec<char>,
    pub minimum: usize,
    pub maximum: usize,
    pub extra_validation: Option<ExtraValidation>,
}

pub(crate) fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == 'ñ' || c == 'Ñ'
}

pub(crate) fn is_tilde(c: char) -> bool {
    matches!(c, 'á' | 'é' | 'í' | 'ó' | 'ú')
}

pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

impl Permitted {
    /// Builder helper: extra allowed characters.
    pub fn with_characters(mut self, chars: &[char]) -> Self {
        self.characters = chars.to_vec();
        self
    }

    /// Builder helper: length bounds.
    pub fn with_length(mut self, minimum: usize, maximum: usize) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    pub fn min_max(&self) -> (usize, usize) {
        (self.minimum, self.maximum)
    }

    /// Validates `text`, returning the first violation found.
    ///
    /// Length is counted in characters, not bytes.
    pub fn validate(&self, text: &str) -> Result<(), InputError> {
        let len = text.chars().count();

        if self.minimum != 0 && len < self.minimum {
            return Err(InputError::TooShort { min: self.minimum });
        }

        if self.maximum != 0 && len > self.maximum {
            return Err(InputError::TooLong { max: self.maximum });
        }

        if let Some(found) = self
            .text_not_allowed
            .iter()
            .find(|banned| !banned.is_empty() && text.contains(banned.as_str()))
        {
            return Err(InputError::ForbiddenText {
                text: found.clone(),
            });
        }

        if let Some(c) = text.chars().find(|&c| !self.accepts(c)) {
            return Err(InputError::CharacterNotAllowed {
                character: c,
                class: classify(c),
            });
        }

        match self.extra_validation {
            Some(check) => check(text),
            None => Ok(()),
        }
    }

    fn accepts(&self, c: char) -> bool {
        (c == TAB && self.tabulation)
            || (c == SPACE && self.white_spaces)
            || (c == NEWLINE && self.break_line)
            || (self.letters && is_letter(c))
            || (self.tilde && is_tilde(c))
            || (self.numbers && is_digit(c))
            || self.characters.contains(&c)
    }
}

/// Most specific reason a rejected character can be reported under.
fn classify(c: char) -> CharClass {
    if c == SPACE {
        CharClass::Space
    } else if is_tilde(c) {
        CharClass::Tilde
    } else if c == TAB {
        CharClass::Tab
    } else if c == NEWLINE {
        CharClass::Newline
    } else if is_letter(c) {
        CharClass::Letter
    } else if is_digit(c) {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters_only() -> Permitted {
        Permitted {
            letters: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_length_checked_before_characters() {
        let rules = Permitted {
            numbers: true,
            ..Default::default()
        }
        .with_length(3, 5);

        assert_eq!(rules.validate("a"), Err(InputError::TooShort { min: 3 }));
        assert_eq!(rules.validate(""), Err(InputError::TooShort { min: 3 }));
        assert_eq!(rules.validate("abcdef"), Err(InputError::TooLong { max: 5 }));
        assert!(rules.validate("123").is_ok());
    }

    #[test]
    fn test_zero_bounds_mean_unlimited() {
        let rules = letters_only();
        assert!(rules.validate("").is_ok());
        assert!(rules.validate(&"a".repeat(10_000)).is_ok());
    }

    #[test]
    fn test_length_counts_characters() {
        let rules = Permitted {
            tilde: true,
            ..Default::default()
        }
        .with_length(0, 3);
        assert!(rules.validate("áéí").is_ok());
    }

    #[test]
    fn test_forbidden_text() {
        let rules = Permitted {
            text_not_allowed: vec!["drop".into()],
            ..letters_only()
        };
        assert_eq!(
            rules.validate("dropall"),
            Err(InputError::ForbiddenText { text: "drop".into() })
        );
        assert!(rules.validate("hello").is_ok());
    }

    #[test]
    fn test_rejected_character_classes() {
        let rules = Permitted {
            characters: vec!['-'],
            ..Default::default()
        };
        let class_of = |s: &str| match rules.validate(s) {
            Err(InputError::CharacterNotAllowed { class, .. }) => class,
            other => panic!("unexpected result {other:?}"),
        };

        assert_eq!(class_of(" "), CharClass::Space);
        assert_eq!(class_of("é"), CharClass::Tilde);
        assert_eq!(class_of("\t"), CharClass::Tab);
        assert_eq!(class_of("\n"), CharClass::Newline);
        assert_eq!(class_of("ñ"), CharClass::Letter);
        assert_eq!(class_of("7"), CharClass::Digit);
        assert_eq!(class_of("@"), CharClass::Other);
        assert!(rules.validate("---").is_ok());
    }

    #[test]
    fn test_first_bad_character_is_reported() {
        let rules = letters_only();
        assert_eq!(
            rules.validate("ab1 "),
            Err(InputError::CharacterNotAllowed {
                character: '1',
                class: CharClass::Digit
            })
        );
    }

    #[test]
    fn test_whitespace_flags() {
        let rules = Permitted {
            white_spaces: true,
            tabulation: true,
            break_line: true,
            ..letters_only()
        };
        assert!(rules.validate("a b\tc\nd").is_ok());
    }

    #[test]
    fn test_extra_validation_runs_last() {
        fn no_vowel_a(s: &str) -> Result<(), InputError> {
            if s.contains('a') {
                Err(InputError::ValueNotAllowed { value: s.to_string() })
            } else {
                Ok(())
            }
        }
        let rules = Permitted {
            extra_validation: Some(no_vowel_a),
            ..letters_only()
        }
        .with_length(2, 0);

        assert_eq!(rules.validate("a"), Err(InputError::TooShort { min: 2 }));
        assert!(matches!(
            rules.validate("ab"),
            Err(InputError::ValueNotAllowed { .. })
        ));
        assert!(rules.validate("bc").is_ok());
    }
}
