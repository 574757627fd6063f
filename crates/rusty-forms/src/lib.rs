//! # rusty-forms
//!
//! Binds plain Rust records to HTML form inputs, validates them with
//! per-kind character and format rules, and renders them with maud.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_forms::{FormContext, FormRecord};
//!
//! #[derive(FormRecord)]
//! pub struct Signup {
//!     pub name: String,
//!     pub email: String,
//!     #[form(options = "admin:Admin,user:User")]
//!     pub role: String,
//! }
//!
//! let ctx = FormContext::default();
//! let signup = Signup {
//!     name: "Juan Pérez".into(),
//!     email: "juan@example.com".into(),
//!     role: "user".into(),
//! };
//!
//! let mut form = ctx.bind("signup", signup).unwrap();
//! assert!(form.validate().is_ok());
//!
//! form.handle_input("signup.email", "bad").unwrap_err();
//! ```
//!
//! ## Field resolution
//!
//! Each `pub` field is matched, ignoring case, against the registered
//! templates by field name, HTML tag or alias (`email`, `mail`, `correo` all
//! become an email input). Qualified aliases such as `"signup.code"` target
//! one field of one record type. `#[form(input = "rut")]` names the kind
//! explicitly.
//!
//! ## Configuration
//!
//! [`FormConfig`] is read from `forms.toml`:
//!
//! ```toml
//! input_class = "form-control"
//! ssr = true
//! action = "/signup"
//! submit_label = "Create account"
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod options;
pub mod permitted;
pub mod record;
pub mod registry;
pub mod render;
pub mod validate;
pub mod value;

pub use config::FormConfig;
pub use error::{CharClass, FormError, FormatIssue, InputError};
pub use form::{Form, FormContext, SubmitHandler};
pub use input::{Input, InputKind};
pub use options::{parse_options, KeyValue};
pub use permitted::{ExtraValidation, Permitted};
pub use record::{FieldDescriptor, FieldOverrides, FormRecord};
pub use registry::Registry;
pub use validate::Action;
pub use value::{FieldType, FieldValue};

// Derive macro shares the trait's name, like serde's Serialize.
pub use rusty_forms_derive::FormRecord;

pub use maud::Render;
