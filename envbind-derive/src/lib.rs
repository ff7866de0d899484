//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{quote, ToTokens};
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, PathArguments, Type};

mod attrs;

use attrs::FieldAttrs;

/// Primitive types the binder converts into, by their Rust spelling, paired
/// with the shared `FieldKind` / `Value` variant name.
const SUPPORTED: &[(&str, &str)] = &[
    ("bool", "Bool"),
    ("i8", "I8"),
    ("i16", "I16"),
    ("i32", "I32"),
    ("i64", "I64"),
    ("isize", "Isize"),
    ("u8", "U8"),
    ("u16", "U16"),
    ("u32", "U32"),
    ("u64", "U64"),
    ("usize", "Usize"),
    ("f32", "F32"),
    ("f64", "F64"),
    ("String", "String"),
];

/// Variant name for a supported field type.
///
/// Primitives qualify as a bare ident or through `std::primitive` /
/// `core::primitive`. `String` qualifies bare or as `std::string::String` /
/// `alloc::string::String`. Any other path, such as `my::String`, and any
/// segment with generic arguments falls through to `None`.
fn supported_variant(ty: &Type) -> Option<&'static str> {
    match ty {
        Type::Group(group) => supported_variant(&group.elem),
        Type::Paren(paren) => supported_variant(&paren.elem),
        Type::Path(type_path) if type_path.qself.is_none() => {
            let segments = &type_path.path.segments;
            if segments
                .iter()
                .any(|seg| !matches!(seg.arguments, PathArguments::None))
            {
                return None;
            }
            let idents: Vec<String> = segments.iter().map(|seg| seg.ident.to_string()).collect();
            let (last, parents) = idents.split_last()?;
            let (name, variant) = SUPPORTED.iter().find(|(name, _)| last == name)?;

            let qualified = match parents {
                [] => type_path.path.leading_colon.is_none(),
                [root, module] if *name == "String" => {
                    (root == "std" || root == "alloc") && module == "string"
                }
                [root, module] if *name != "String" => {
                    (root == "std" || root == "core") && module == "primitive"
                }
                _ => false,
            };
            qualified.then_some(*variant)
        }
        _ => None,
    }
}

/// Human-readable spelling of a type, e.g. `Vec<String>`.
fn type_name(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
}

fn optional_str(value: Option<String>) -> TokenStream2 {
    match value {
        Some(value) => quote!(::core::option::Option::Some(#value)),
        None => quote!(::core::option::Option::None),
    }
}

/// `EnvRecord` derive macro
///
/// Implements `envbind::EnvRecord` for a struct with named fields (or a unit
/// struct), describing every field to the binder in declaration order.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env(key = "NAME")]`: Look up `NAME` instead of the field identifier
/// - `#[env(default = "value")]`: Raw value used when the variable is not set
/// - `#[env(required)]`: Fail when the variable is not set and there is no default
///
/// Fields of types other than `bool`, the integer and float primitives and
/// `String` are accepted here and reported as unsupported when bound.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(EnvRecord, attributes(env))]
pub fn derive_env_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Extract fields
    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvRecord only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvRecord only supports structs",
            ));
        }
    };

    let mut specs = Vec::with_capacity(fields.len());
    let mut assign_arms = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let attrs = FieldAttrs::from_field(field)?;
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let name = ident.unraw().to_string();
        let key = optional_str(attrs.key);
        let default = optional_str(attrs.default);
        let required = attrs.required;

        let kind = match supported_variant(&field.ty) {
            Some(variant) => {
                let variant = Ident::new(variant, Span::call_site());
                assign_arms.push(quote! {
                    (#index, ::envbind::Value::#variant(value)) => self.#ident = value,
                });
                quote!(::envbind::FieldKind::#variant)
            }
            None => {
                let unsupported = type_name(&field.ty);
                quote!(::envbind::FieldKind::Unsupported(#unsupported))
            }
        };

        specs.push(quote! {
            ::envbind::FieldSpec {
                name: #name,
                kind: #kind,
                key: #key,
                default: #default,
                required: #required,
            }
        });
    }

    let assign_body = if assign_arms.is_empty() {
        quote! {
            let _ = (index, value);
        }
    } else {
        quote! {
            match (index, value) {
                #(#assign_arms)*
                _ => {}
            }
        }
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::envbind::EnvRecord for #struct_name #ty_generics #where_clause {
            fn shape(&self) -> ::envbind::Shape {
                const FIELDS: &[::envbind::FieldSpec] = &[#(#specs),*];
                ::envbind::Shape::Record(FIELDS)
            }

            fn assign(&mut self, index: usize, value: ::envbind::Value) {
                #assign_body
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_supported_primitives() {
        let ty: Type = parse_quote!(u16);
        assert_eq!(supported_variant(&ty), Some("U16"));

        let ty: Type = parse_quote!(bool);
        assert_eq!(supported_variant(&ty), Some("Bool"));

        let ty: Type = parse_quote!(std::string::String);
        assert_eq!(supported_variant(&ty), Some("String"));

        let ty: Type = parse_quote!(::alloc::string::String);
        assert_eq!(supported_variant(&ty), Some("String"));

        let ty: Type = parse_quote!(core::primitive::u8);
        assert_eq!(supported_variant(&ty), Some("U8"));
    }

    #[test]
    fn test_user_types_named_like_primitives() {
        let types: [Type; 5] = [
            parse_quote!(my::String),
            parse_quote!(crate::types::u8),
            parse_quote!(std::primitive::String),
            parse_quote!(std::string::u16),
            parse_quote!(::String),
        ];
        for ty in types {
            assert_eq!(supported_variant(&ty), None, "{}", type_name(&ty));
        }
    }

    #[test]
    fn test_unsupported_types() {
        let types: [Type; 6] = [
            parse_quote!(Vec<String>),
            parse_quote!(Option<u8>),
            parse_quote!(&'static str),
            parse_quote!(Inner),
            parse_quote!([u8; 4]),
            parse_quote!(u128),
        ];
        for ty in types {
            assert_eq!(supported_variant(&ty), None, "{}", type_name(&ty));
        }
    }

    #[test]
    fn test_type_name_is_compact() {
        let ty: Type = parse_quote!(Vec<String>);
        assert_eq!(type_name(&ty), "Vec<String>");

        let ty: Type = parse_quote!(std::collections::HashMap<String, u8>);
        assert_eq!(type_name(&ty), "std::collections::HashMap<String, u8>");

        let ty: Type = parse_quote!(&'static str);
        assert_eq!(type_name(&ty), "&'static str");
    }

    #[test]
    fn test_expand_rejects_enum() {
        let input: DeriveInput = parse_quote! {
            enum Config { A, B }
        };
        let err = expand(&input).unwrap_err();
        assert!(err.to_string().contains("only supports structs"));
    }

    #[test]
    fn test_expand_rejects_tuple_struct() {
        let input: DeriveInput = parse_quote! {
            struct Config(String);
        };
        let err = expand(&input).unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn test_expand_reports_attribute_errors() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[env(name = "PORT")]
                port: u16,
            }
        };
        assert!(expand(&input).is_err());
    }

    #[test]
    fn test_expand_uses_unraw_field_name() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                r#type: String,
            }
        };
        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("name : \"type\""));
    }
}
