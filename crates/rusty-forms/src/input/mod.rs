// File: rusty-forms/src/input/mod.rs
// Purpose: The Input model shared by every field kind

mod checks;
mod kind;

pub use kind::InputKind;

use crate::error::InputError;
use crate::options::KeyValue;
use crate::permitted::Permitted;

/// A bound, validatable and renderable representation of one record field.
///
/// The `id` is computed once when the input is created or cloned and never
/// changes afterwards. `values` is always present, possibly empty.
#[derive(Debug, Clone)]
pub struct Input {
    kind: InputKind,
    id: String,
    name: String,
    aliases: Vec<String>,
    values: Vec<String>,
    options: Vec<KeyValue>,
    placeholder: String,
    title: String,
    required: bool,
    disabled: bool,
    readonly: bool,
    skip_validation: bool,
    attributes: Vec<KeyValue>,
    permitted: Permitted,
}

fn compose_id(parent_id: &str, name: &str) -> String {
    if parent_id.is_empty() {
        name.to_string()
    } else {
        format!("{parent_id}.{name}")
    }
}

impl Input {
    /// Creates an input of `kind` carrying that kind's default rules,
    /// aliases and options.
    pub fn new(kind: InputKind, parent_id: &str, name: &str) -> Self {
        let mut input = Self {
            kind,
            id: compose_id(parent_id, name),
            name: name.to_string(),
            aliases: kind
                .default_aliases()
                .iter()
                .map(|alias| alias.to_string())
                .collect(),
            values: Vec::new(),
            options: kind.default_options(),
            placeholder: name.to_string(),
            title: name.to_string(),
            required: false,
            disabled: false,
            readonly: false,
            skip_validation: false,
            attributes: Vec::new(),
            permitted: kind.default_rules(),
        };

        match kind {
            InputKind::Rut => input.placeholder = "12345678-9".to_string(),
            InputKind::Date => input.placeholder = "YYYY-MM-DD".to_string(),
            InputKind::Hour => input.title = "HH:MM".to_string(),
            _ => {}
        }

        input
    }

    /// Registry template for `kind`, named after the kind itself.
    pub fn template(kind: InputKind) -> Self {
        Self::new(kind, "", kind.as_str())
    }

    /// Fresh instance for a record field.
    ///
    /// Rules, aliases, options, flags and extension attributes come from
    /// `self`; id, name, placeholder and title are computed for the field and
    /// values start empty. `self` is left untouched.
    pub fn clone_for(&self, parent_id: &str, name: &str) -> Self {
        let fresh = Self::new(self.kind, parent_id, name);
        Self {
            aliases: self.aliases.clone(),
            options: self.options.clone(),
            required: self.required,
            disabled: self.disabled,
            readonly: self.readonly,
            skip_validation: self.skip_validation,
            attributes: self.attributes.clone(),
            permitted: self.permitted.clone(),
            ..fresh
        }
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn html_name(&self) -> &'static str {
        self.kind.html_name()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The record field name, without the parent scope.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when `field_name` equals, ignoring case, this input's HTML tag,
    /// its name or one of its aliases.
    pub fn matches(&self, field_name: &str) -> bool {
        let wanted = field_name.to_lowercase();
        self.html_name() == wanted
            || self.name.to_lowercase() == wanted
            || self.aliases.iter().any(|alias| *alias == wanted)
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Replaces the alias list. Aliases are stored lowercase.
    pub fn set_aliases<I, S>(&mut self, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.aliases = aliases
            .into_iter()
            .map(|alias| alias.as_ref().to_lowercase())
            .collect();
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_aliases(aliases);
        self
    }

    pub fn value(&self) -> &str {
        self.values.first().map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn set_values<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.values = vec![value.into()];
    }

    /// Values validation runs on: the selected (first) value, or every value
    /// when the input holds several.
    pub fn selected_values(&self) -> Vec<&str> {
        if self.values.len() > 1 {
            self.values.iter().map(String::as_str).collect()
        } else {
            vec![self.value()]
        }
    }

    pub fn options(&self) -> &[KeyValue] {
        &self.options
    }

    pub fn set_options<I, T>(&mut self, options: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<KeyValue>,
    {
        self.options = options.into_iter().map(Into::into).collect();
    }

    pub fn with_options<I, T>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<KeyValue>,
    {
        self.set_options(options);
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    pub fn skip_validation(&self) -> bool {
        self.skip_validation
    }

    pub fn set_skip_validation(&mut self, skip: bool) {
        self.skip_validation = skip;
    }

    pub fn attributes(&self) -> &[KeyValue] {
        &self.attributes
    }

    /// Adds an extension attribute, replacing an existing one with the same
    /// key.
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let attr = KeyValue::new(key, value);
        match self.attributes.iter_mut().find(|a| a.key == attr.key) {
            Some(existing) => existing.value = attr.value,
            None => self.attributes.push(attr),
        }
    }

    pub fn permitted(&self) -> &Permitted {
        &self.permitted
    }

    pub fn permitted_mut(&mut self) -> &mut Permitted {
        &mut self.permitted
    }

    pub fn with_permitted(mut self, permitted: Permitted) -> Self {
        self.permitted = permitted;
        self
    }

    /// Validates `value` with this input's rules and its kind's structural
    /// checks. Pure: reads configuration only.
    pub fn validate_field(&self, value: &str) -> Result<(), InputError> {
        match self.kind {
            InputKind::Date => checks::date(&self.permitted, value),
            InputKind::Hour => checks::hour(&self.permitted, value),
            InputKind::Rut => checks::rut(&self.permitted, value),
            InputKind::Ip => checks::ip(&self.permitted, value),
            InputKind::Filepath => checks::filepath(&self.permitted, value),
            InputKind::Checkbox => checks::checkbox(self.required, value),
            InputKind::Radio | InputKind::Gender | InputKind::Select | InputKind::Datalist => {
                checks::choice(&self.options, self.required, value)
            }
            InputKind::Text
            | InputKind::Address
            | InputKind::Email
            | InputKind::Password
            | InputKind::Phone
            | InputKind::Number
            | InputKind::Textarea => self.permitted.validate(value),
        }
    }

    /// Validates every selected value, stopping at the first failure.
    pub fn validate(&self) -> Result<(), InputError> {
        self.selected_values()
            .into_iter()
            .try_for_each(|value| self.validate_field(value))
    }
}
