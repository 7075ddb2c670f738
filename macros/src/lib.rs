use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input, parse_quote};

/// Derive `typed_env::EnvValue` for a type
///
/// A struct with exactly one field is treated as a wrapper over that field:
/// it is parsed as the inner type and wrapped again, so the result keeps the
/// wrapper's own methods.
///
/// ```rust,ignore
/// #[derive(EnvValue)]
/// struct Port(u16);
/// ```
///
/// Any other struct is a record, which can be used as a default but never
/// parses (the lookup reports an unsupported kind).
#[proc_macro_derive(EnvValue)]
pub fn derive_env_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_env_value(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_env_value(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let mut generics = input.generics.clone();

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvValue can only be derived for structs",
            ));
        }
    };

    let body = match wrapped_field(fields) {
        Some(field) => {
            let inner_type = &field.ty;
            // Generic wrappers need the inner type to be readable
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(#inner_type: ::typed_env::EnvValue));

            let construct = match &field.ident {
                Some(ident) => quote! { Self { #ident: inner } },
                None => quote! { Self(inner) },
            };

            quote! {
                const KIND: ::typed_env::Kind = <#inner_type as ::typed_env::EnvValue>::KIND;

                fn from_scalar(scalar: ::typed_env::Scalar) -> ::core::option::Option<Self> {
                    <#inner_type as ::typed_env::EnvValue>::from_scalar(scalar)
                        .map(|inner| #construct)
                }
            }
        }
        None => quote! {
            const KIND: ::typed_env::Kind = ::typed_env::Kind::Record;

            fn from_scalar(_: ::typed_env::Scalar) -> ::core::option::Option<Self> {
                ::core::option::Option::None
            }
        },
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::typed_env::EnvValue for #name #ty_generics #where_clause {
            #body
        }
    })
}

/// The single field of a wrapper struct, `None` for records
fn wrapped_field(fields: &Fields) -> Option<&syn::Field> {
    let mut iter = fields.iter();
    match (iter.next(), iter.next()) {
        (Some(field), None) => Some(field),
        _ => None,
    }
}
