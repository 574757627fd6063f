// File: rusty-forms/src/record.rs
// Purpose: Compile-time field descriptors for records bound to forms

use crate::value::FieldValue;

/// Declarative per-field overrides applied by the binder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldOverrides {
    pub skip_validation: bool,
    pub required: bool,
    pub disabled: bool,
    pub readonly: bool,
    pub placeholder: Option<&'static str>,
    pub title: Option<&'static str>,
    /// `"key:label,key:label"` pairs.
    pub options: Option<&'static str>,
}

impl FieldOverrides {
    pub const NONE: FieldOverrides = FieldOverrides {
        skip_validation: false,
        required: false,
        disabled: false,
        readonly: false,
        placeholder: None,
        title: None,
        options: None,
    };
}

/// One bindable field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    /// Name resolved in the registry before the field name itself.
    pub input: Option<&'static str>,
    pub overrides: FieldOverrides,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            input: None,
            overrides: FieldOverrides::NONE,
        }
    }
}

/// A record whose fields can be bound to a form.
///
/// Usually generated with `#[derive(FormRecord)]`, which lists the `pub`
/// fields in declaration order. Hand-written impls must keep `fields()`,
/// `field_value` and `write_field` in agreement on indices.
///
/// ```
/// use rusty_forms::{FieldDescriptor, FieldType, FieldValue, FormRecord};
///
/// struct Login {
///     email: String,
///     password: String,
/// }
///
/// impl FormRecord for Login {
///     fn type_name() -> &'static str {
///         "Login"
///     }
///
///     fn fields() -> &'static [FieldDescriptor] {
///         const FIELDS: &[FieldDescriptor] =
///             &[FieldDescriptor::new("email"), FieldDescriptor::new("password")];
///         FIELDS
///     }
///
///     fn field_value(&self, index: usize) -> Option<FieldValue> {
///         match index {
///             0 => Some(self.email.to_field_value()),
///             1 => Some(self.password.to_field_value()),
///             _ => None,
///         }
///     }
///
///     fn write_field(&mut self, index: usize, values: &[String]) -> bool {
///         match index {
///             0 => String::from_values(values).map(|v| self.email = v).is_some(),
///             1 => String::from_values(values).map(|v| self.password = v).is_some(),
///             _ => false,
///         }
///     }
/// }
///
/// assert_eq!(Login::field_index("password"), Some(1));
/// ```
pub trait FormRecord {
    /// Type name used for qualified aliases (`"<type>.<field>"`).
    fn type_name() -> &'static str;

    fn fields() -> &'static [FieldDescriptor];

    /// Current value of the field at `index`, `None` if out of range.
    fn field_value(&self, index: usize) -> Option<FieldValue>;

    /// Writes `values` into the field at `index`. Returns `false` when the
    /// field's type is not written back or the index is out of range.
    fn write_field(&mut self, index: usize, values: &[String]) -> bool;

    fn field_index(name: &str) -> Option<usize> {
        Self::fields().iter().position(|field| field.name == name)
    }
}
