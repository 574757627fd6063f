// File: rusty-forms/src/form.rs
// Purpose: Binding records to forms, live edits, submit and sync-back

use crate::config::FormConfig;
use crate::error::{FormError, InputError};
use crate::input::Input;
use crate::options::parse_options;
use crate::record::{FieldDescriptor, FormRecord};
use crate::registry::Registry;
use std::fmt;

/// Callback run by [`Form::submit`] after a successful validation.
pub type SubmitHandler<R> = Box<dyn Fn(&R) + Send + Sync>;

/// Registry and configuration used to bind records.
///
/// Holds no per-form state, so one context serves any number of forms.
#[derive(Debug, Clone)]
pub struct FormContext {
    registry: Registry,
    config: FormConfig,
}

impl Default for FormContext {
    fn default() -> Self {
        Self::new(Registry::builtin(), FormConfig::default())
    }
}

impl FormContext {
    pub fn new(registry: Registry, config: FormConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Binds `record` to a new form whose input ids are prefixed with
    /// `scope_id`.
    ///
    /// Every field must resolve to a registered template; the first one that
    /// doesn't aborts the bind and no form is returned.
    pub fn bind<R: FormRecord>(&self, scope_id: &str, record: R) -> Result<Form<R>, FormError> {
        let record_type = R::type_name();
        let fields = R::fields();
        let mut inputs = Vec::with_capacity(fields.len());
        let mut field_indices = Vec::with_capacity(fields.len());

        for (index, field) in fields.iter().enumerate() {
            let template = self.template_for(field, record_type)?;
            let mut input = template.clone_for(scope_id, field.name);
            self.apply_overrides(&mut input, field);

            let value = record
                .field_value(index)
                .ok_or_else(|| FormError::FieldIndex {
                    field: field.name.to_string(),
                    index,
                })?;
            input.set_values(value.into_values());

            inputs.push(input);
            field_indices.push(Some(index));
        }

        tracing::debug!(
            scope = scope_id,
            record = record_type,
            inputs = inputs.len(),
            "bound record to form"
        );

        Ok(Form {
            id: scope_id.to_string(),
            config: self.config.clone(),
            inputs,
            field_indices,
            record,
            on_submit: None,
        })
    }

    fn template_for(
        &self,
        field: &FieldDescriptor,
        record_type: &'static str,
    ) -> Result<&Input, FormError> {
        field
            .input
            .and_then(|hint| self.registry.resolve(hint, record_type))
            .or_else(|| self.registry.resolve(field.name, record_type))
            .ok_or_else(|| {
                tracing::warn!(record = record_type, field = field.name, "unmatched field");
                FormError::FieldUnmatched {
                    record: record_type,
                    field: field.name.to_string(),
                }
            })
    }

    fn apply_overrides(&self, input: &mut Input, field: &FieldDescriptor) {
        let overrides = &field.overrides;

        if overrides.skip_validation {
            input.set_skip_validation(true);
        }
        if overrides.required {
            input.set_required(true);
        }
        if overrides.disabled {
            input.set_disabled(true);
        }
        if overrides.readonly {
            input.set_readonly(true);
        }
        if let Some(placeholder) = overrides.placeholder {
            input.set_placeholder(placeholder);
        }
        if let Some(title) = overrides.title {
            input.set_title(title);
        }
        if let Some(raw) = overrides.options {
            input.set_options(parse_options(raw));
        }
        if let Some(class) = &self.config.input_class {
            input.add_attribute("class", class.as_str());
        }
    }
}

/// A record together with the inputs bound to its fields.
///
/// `inputs` and `field_indices` are parallel: entry `i` of `field_indices`
/// is the record field behind input `i`, or `None` for inputs added with
/// [`Form::add_input`].
pub struct Form<R> {
    pub(crate) id: String,
    pub(crate) config: FormConfig,
    pub(crate) inputs: Vec<Input>,
    pub(crate) field_indices: Vec<Option<usize>>,
    pub(crate) record: R,
    on_submit: Option<SubmitHandler<R>>,
}

impl<R: fmt::Debug> fmt::Debug for Form<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("id", &self.id)
            .field("inputs", &self.inputs)
            .field("field_indices", &self.field_indices)
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

pub(crate) fn invalid(input: &Input, source: InputError) -> FormError {
    tracing::debug!(id = input.id(), error = %source, "input failed validation");
    FormError::Invalid {
        field: input.name().to_string(),
        id: input.id().to_string(),
        source,
    }
}

impl<R> Form<R> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn is_ssr(&self) -> bool {
        self.config.ssr
    }

    pub fn set_ssr(&mut self, ssr: bool) {
        self.config.ssr = ssr;
    }

    pub fn set_action(&mut self, action: impl Into<String>) {
        self.config.action = Some(action.into());
    }

    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    pub fn field_indices(&self) -> &[Option<usize>] {
        &self.field_indices
    }

    /// Input bound to the record field `field`.
    pub fn input(&self, field: &str) -> Option<&Input> {
        self.inputs.iter().find(|input| input.name() == field)
    }

    pub fn input_mut(&mut self, field: &str) -> Option<&mut Input> {
        self.inputs.iter_mut().find(|input| input.name() == field)
    }

    pub fn input_by_id(&self, id: &str) -> Option<&Input> {
        self.inputs.iter().find(|input| input.id() == id)
    }

    /// Appends an input that is not backed by a record field. It renders and
    /// validates with the form but is never synced back.
    pub fn add_input(&mut self, input: Input) {
        self.inputs.push(input);
        self.field_indices.push(None);
    }

    /// Replaces the values of the input bound to `field`.
    pub fn set_values<I, S>(&mut self, field: &str, values: I) -> Result<(), FormError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let input = self
            .input_mut(field)
            .ok_or_else(|| FormError::UnknownInput {
                id: field.to_string(),
            })?;
        input.set_values(values);
        Ok(())
    }

    /// Live edit: sets the value of the input with `id` and validates it.
    ///
    /// The value is stored even when it fails validation.
    pub fn handle_input(&mut self, id: &str, value: impl Into<String>) -> Result<(), FormError> {
        let input = self
            .inputs
            .iter_mut()
            .find(|input| input.id() == id)
            .ok_or_else(|| FormError::UnknownInput { id: id.to_string() })?;

        input.set_value(value);
        if input.skip_validation() {
            return Ok(());
        }
        input.validate().map_err(|err| invalid(input, err))
    }

    pub fn on_submit(mut self, handler: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.on_submit = Some(Box::new(handler));
        self
    }

    pub fn set_on_submit(&mut self, handler: impl Fn(&R) + Send + Sync + 'static) {
        self.on_submit = Some(Box::new(handler));
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut R {
        &mut self.record
    }

    pub fn into_record(self) -> R {
        self.record
    }
}

impl<R: FormRecord> Form<R> {
    /// Writes input values back into the bound record.
    ///
    /// String fields receive the first value (or `""`), string lists every
    /// value and optional strings the first value or `None`. Fields of other
    /// types are left untouched.
    pub fn sync_back(&mut self) -> Result<(), FormError> {
        let field_count = R::fields().len();

        for (input, slot) in self.inputs.iter().zip(&self.field_indices) {
            let Some(index) = *slot else {
                continue;
            };
            if index >= field_count {
                return Err(FormError::FieldIndex {
                    field: input.name().to_string(),
                    index,
                });
            }
            if !self.record.write_field(index, input.values()) {
                tracing::trace!(field = input.name(), "field type is not written back");
            }
        }

        tracing::debug!(form = %self.id, "synced inputs back to record");
        Ok(())
    }

    /// Syncs, validates and then hands the record to the submit handler.
    ///
    /// The handler only runs when validation succeeds.
    pub fn submit(&mut self) -> Result<(), FormError> {
        self.sync_back()?;
        self.validate()?;

        if let Some(handler) = &self.on_submit {
            handler(&self.record);
        }
        Ok(())
    }
}
