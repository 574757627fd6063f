// rusty-forms procedural macros

use proc_macro::TokenStream;

use syn::{parse_macro_input, DeriveInput};

mod record;

/// Derive macro for binding a struct to a form
///
/// Generates a `rusty_forms::FormRecord` implementation listing the
/// struct's `pub` fields in declaration order. Private fields are not bound.
///
/// # Example
///
/// ```ignore
/// use rusty_forms::FormRecord;
///
/// #[derive(FormRecord)]
/// pub struct Signup {
///     pub name: String,
///
///     #[form(input = "email", required)]
///     pub contact: String,
///
///     #[form(options = "admin:Admin,user:User", title = "Role")]
///     pub role: String,
///
///     #[form(skip)]
///     pub created_at: String,
/// }
/// ```
///
/// # Field attributes
///
/// - `#[form(skip)]` - Don't bind this field
/// - `#[form(skip_validation)]` - Bind but never validate
/// - `#[form(required)]`, `#[form(disabled)]`, `#[form(readonly)]`
/// - `#[form(placeholder = "...")]`, `#[form(title = "...")]`
/// - `#[form(options = "key:label,key:label")]` - Choice options
/// - `#[form(input = "rut")]` - Resolve this name before the field name
///
#[proc_macro_derive(FormRecord, attributes(form))]
pub fn derive_form_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::impl_form_record(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
