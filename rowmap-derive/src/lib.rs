use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, Type, parse_macro_input};

/// Derive macro for `FromRow` trait.
///
/// Generates an implementation that takes each struct field from the row
/// column with the same label.
///
/// # Example
///
/// ```ignore
/// #[derive(FromRow)]
/// struct User {
///     id: i64,
///     #[from_row(rename = "user_name")]
///     name: String,
///     email: Option<String>,
/// }
/// ```
///
/// `Option<T>` fields decode a missing column as `None`; any other field
/// reports `MissingColumn`.
///
/// # Strict Mode
///
/// By default, columns without a matching field are ignored. Use
/// `#[from_row(strict)]` to error on them instead.
#[proc_macro_derive(FromRow, attributes(from_row))]
pub fn derive_from_row(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut strict = false;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("from_row")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("strict") {
                strict = true;
                Ok(())
            } else {
                Err(meta.error("expected `strict`"))
            }
        })?;
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "FromRow only supports structs with named fields",
                ));
            }
        },
        _ => return Err(syn::Error::new_spanned(name, "FromRow only supports structs")),
    };

    let mut takes = Vec::with_capacity(fields.len());
    let mut idents = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let ty = &field.ty;

        let mut label = ident.to_string();
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("from_row")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    label = meta.value()?.parse::<LitStr>()?.value();
                    Ok(())
                } else {
                    Err(meta.error("expected `rename = \"...\"`"))
                }
            })?;
        }

        if is_option(ty) {
            takes.push(quote! {
                let #ident: #ty = if __row.contains(#label) {
                    __row.take(#label)?
                } else {
                    ::core::option::Option::None
                };
            });
        } else {
            takes.push(quote! {
                let #ident: #ty = __row.take(#label)?;
            });
        }
        idents.push(ident);
    }

    let leftover_check = if strict {
        quote! {
            if let ::core::option::Option::Some(__unknown) = __row.labels().next() {
                return ::core::result::Result::Err(
                    ::rowmap::error::Error::UnknownColumn(__unknown.to_string()),
                );
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        impl #impl_generics ::rowmap::row::FromRow for #name #ty_generics #where_clause {
            fn from_row(mut __row: ::rowmap::row::Row) -> ::rowmap::error::Result<Self> {
                #(#takes)*
                #leftover_check
                ::core::result::Result::Ok(Self { #(#idents),* })
            }
        }
    })
}

fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option"),
        _ => false,
    }
}
