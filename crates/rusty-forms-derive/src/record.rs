// File: rusty-forms-derive/src/record.rs
// Purpose: FormRecord derive and #[form(...)] attribute processing

use proc_macro2::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Data, DeriveInput, Field, Fields, LitStr, Visibility};

/// Overrides collected from `#[form(...)]` on one field
#[derive(Debug, Default, PartialEq)]
pub struct FieldAttrs {
    pub skip: bool,
    pub skip_validation: bool,
    pub required: bool,
    pub disabled: bool,
    pub readonly: bool,
    pub placeholder: Option<String>,
    pub title: Option<String>,
    pub options: Option<String>,
    pub input: Option<String>,
}

fn string_value(meta: &ParseNestedMeta) -> syn::Result<String> {
    let lit: LitStr = meta.value()?.parse()?;
    Ok(lit.value())
}

/// Parse form attributes from a field
pub fn extract_form_attrs(attrs: &[syn::Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("form")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                parsed.skip = true;
            } else if meta.path.is_ident("skip_validation") {
                parsed.skip_validation = true;
            } else if meta.path.is_ident("required") {
                parsed.required = true;
            } else if meta.path.is_ident("disabled") {
                parsed.disabled = true;
            } else if meta.path.is_ident("readonly") {
                parsed.readonly = true;
            } else if meta.path.is_ident("placeholder") {
                parsed.placeholder = Some(string_value(&meta)?);
            } else if meta.path.is_ident("title") {
                parsed.title = Some(string_value(&meta)?);
            } else if meta.path.is_ident("options") {
                parsed.options = Some(string_value(&meta)?);
            } else if meta.path.is_ident("input") {
                parsed.input = Some(string_value(&meta)?);
            } else {
                return Err(meta.error("unsupported form attribute"));
            }
            Ok(())
        })?;
    }

    Ok(parsed)
}

fn optional_str(value: &Option<String>) -> TokenStream {
    match value {
        Some(s) => quote! { ::core::option::Option::Some(#s) },
        None => quote! { ::core::option::Option::None },
    }
}

fn descriptor(name: &str, attrs: &FieldAttrs) -> TokenStream {
    let FieldAttrs {
        skip_validation,
        required,
        disabled,
        readonly,
        ..
    } = attrs;
    let input = optional_str(&attrs.input);
    let placeholder = optional_str(&attrs.placeholder);
    let title = optional_str(&attrs.title);
    let options = optional_str(&attrs.options);

    quote! {
        ::rusty_forms::FieldDescriptor {
            name: #name,
            input: #input,
            overrides: ::rusty_forms::FieldOverrides {
                skip_validation: #skip_validation,
                required: #required,
                disabled: #disabled,
                readonly: #readonly,
                placeholder: #placeholder,
                title: #title,
                options: #options,
            },
        }
    }
}

/// Fields that become form inputs: `pub`, named, not skipped
fn bound_fields(input: &DeriveInput) -> syn::Result<Vec<(&Field, FieldAttrs)>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "FormRecord only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "FormRecord only supports structs",
            ))
        }
    };

    let mut bound = Vec::new();
    for field in fields {
        let attrs = extract_form_attrs(&field.attrs)?;
        if attrs.skip || !matches!(field.vis, Visibility::Public(_)) {
            continue;
        }
        bound.push((field, attrs));
    }
    Ok(bound)
}

/// Generate the FormRecord implementation for a struct
pub fn impl_form_record(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = bound_fields(input)?;

    let mut descriptors = Vec::new();
    let mut read_arms = Vec::new();
    let mut write_arms = Vec::new();

    for (index, (field, attrs)) in fields.iter().enumerate() {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let ty = &field.ty;

        descriptors.push(descriptor(&ident.to_string(), attrs));

        read_arms.push(quote! {
            #index => ::core::option::Option::Some(
                <#ty as ::rusty_forms::FieldType>::to_field_value(&self.#ident)
            ),
        });

        write_arms.push(quote! {
            #index => match <#ty as ::rusty_forms::FieldType>::from_values(values) {
                ::core::option::Option::Some(value) => {
                    self.#ident = value;
                    true
                }
                ::core::option::Option::None => false,
            },
        });
    }

    Ok(quote! {
        impl #impl_generics ::rusty_forms::FormRecord for #name #ty_generics #where_clause {
            fn type_name() -> &'static str {
                #name_str
            }

            fn fields() -> &'static [::rusty_forms::FieldDescriptor] {
                const FIELDS: &[::rusty_forms::FieldDescriptor] = &[#(#descriptors),*];
                FIELDS
            }

            fn field_value(&self, index: usize) -> ::core::option::Option<::rusty_forms::FieldValue> {
                match index {
                    #(#read_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            #[allow(unused_variables)]
            fn write_field(&mut self, index: usize, values: &[::std::string::String]) -> bool {
                match index {
                    #(#write_arms)*
                    _ => false,
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use syn::parse_quote;

    #[test]
    fn test_extract_form_attrs() {
        let field: Field = parse_quote! {
            #[form(required, placeholder = "you@example.com", input = "email")]
            pub contact: String
        };
        let attrs = extract_form_attrs(&field.attrs).unwrap();
        assert_eq!(
            attrs,
            FieldAttrs {
                required: true,
                placeholder: Some("you@example.com".to_string()),
                input: Some("email".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_unknown_attribute_is_an_error() {
        let field: Field = parse_quote! {
            #[form(colour = "red")]
            pub name: String
        };
        let err = extract_form_attrs(&field.attrs).unwrap_err();
        assert_eq!(err.to_string(), "unsupported form attribute");
    }

    #[test]
    fn test_only_public_unskipped_fields_are_bound() {
        let input: DeriveInput = parse_quote! {
            pub struct User {
                pub name: String,
                secret: String,
                #[form(skip)]
                pub created: String,
                pub email: String,
            }
        };
        let names: Vec<String> = bound_fields(&input)
            .unwrap()
            .iter()
            .filter_map(|(field, _)| field.ident.as_ref().map(ToString::to_string))
            .collect();
        assert_eq!(names, vec!["name", "email"]);
    }

    #[test]
    fn test_tuple_struct_rejected() {
        let input: DeriveInput = parse_quote! {
            pub struct Pair(pub String, pub String);
        };
        assert!(impl_form_record(&input).is_err());
    }

    #[test]
    fn test_generated_impl_names_record() {
        let input: DeriveInput = parse_quote! {
            pub struct Login {
                pub email: String,
            }
        };
        let tokens = impl_form_record(&input).unwrap().to_string();
        assert!(tokens.contains("impl :: rusty_forms :: FormRecord for Login"));
        assert!(tokens.contains("\"Login\""));
    }
}
