//! Entity derive macro implementation

use heck::ToShoutySnakeCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Result};

use crate::attrs::{column_name, container_attrs, field_attrs};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let container = container_attrs(&input)?;
    let entity_name = container
        .name
        .clone()
        .unwrap_or_else(|| name.unraw().to_string());

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Entity can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Entity can only be derived for structs",
            ));
        }
    };

    let mut columns = Vec::new();
    let mut consts = Vec::new();
    for field in fields {
        let attrs = field_attrs(field)?;
        if attrs.excluded {
            continue;
        }
        let column = column_name(field, &attrs, container.rename_all);
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let const_name = format_ident!(
            "COL_{}",
            ident.unraw().to_string().to_shouty_snake_case()
        );
        let doc = format!("Column `{column}`.");
        consts.push(quote! {
            #[doc = #doc]
            pub const #const_name: querykit::Column<Self> = querykit::Column::new(#column);
        });
        columns.push(column);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics querykit::Entity for #name #ty_generics #where_clause {
            const NAME: &'static str = #entity_name;
            const FIELDS: &'static [&'static str] = &[#(#columns),*];
        }

        impl #impl_generics #name #ty_generics #where_clause {
            #(#consts)*
        }
    })
}
