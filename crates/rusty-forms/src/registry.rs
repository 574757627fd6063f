// File: rusty-forms/src/registry.rs
// Purpose: Ordered template list used to resolve a field name to an input kind

use crate::input::{Input, InputKind};

/// Ordered collection of template inputs.
///
/// Resolution walks templates in registration order and the first match
/// wins, so general aliases registered early shadow specific ones registered
/// later. Register the most specific templates first.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    templates: Vec<Input>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in kind, in [`InputKind::ALL`] order: Text, Address,
    /// Email, Password, Phone, Number, Date, Hour, Rut, Ip, Filepath,
    /// Checkbox, Radio, Gender, Select, Datalist, Textarea.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(InputKind::ALL.into_iter().map(Input::template));
        registry
    }

    /// Appends templates after the existing ones. Earlier entries are never
    /// replaced.
    pub fn register<I>(&mut self, templates: I)
    where
        I: IntoIterator<Item = Input>,
    {
        self.templates.extend(templates);
    }

    pub fn templates(&self) -> &[Input] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Finds the template for `field_name` on a record named `record_type`.
    ///
    /// Each template is tried in order against the bare field name and then
    /// against `"<record_type>.<field_name>"`, both lowercased.
    pub fn resolve(&self, field_name: &str, record_type: &str) -> Option<&Input> {
        let bare = field_name.to_lowercase();
        let qualified = format!("{}.{}", record_type.to_lowercase(), bare);

        let found = self
            .templates
            .iter()
            .find(|template| template.matches(&bare) || template.matches(&qualified));

        match found {
            Some(template) => tracing::trace!(
                field = field_name,
                record = record_type,
                kind = %template.kind(),
                "resolved input template"
            ),
            None => tracing::debug!(
                field = field_name,
                record = record_type,
                "no input template matches field"
            ),
        }
        found
    }
}
