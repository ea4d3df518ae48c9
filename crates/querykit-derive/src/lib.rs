//! Derive macros for querykit
//!
//! Provides `#[derive(Entity)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod entity;

/// Derive `Entity` metadata for a struct.
///
/// # Example
///
/// ```ignore
/// use querykit::Entity;
/// use serde::Serialize;
///
/// #[derive(Entity, Serialize)]
/// #[serde(rename_all = "PascalCase")]
/// struct User {
///     id: i32,
///     user_name: String,
/// }
///
/// assert_eq!(User::NAME, "User");
/// assert_eq!(User::FIELDS, &["Id", "UserName"]);
/// ```
///
/// # Generated
///
/// - `impl querykit::Entity` with `NAME` and `FIELDS`
/// - `COL_*: querykit::Column<Self>` - one constant per column
///
/// # Attributes
///
/// - `#[orm(name = "Name")]` - Override the entity name used for the table
/// - `#[serde(rename_all = "...")]`, `#[serde(rename = "...")]` - Column names follow serde
/// - `#[serde(skip)]`, `#[serde(skip_serializing)]`, `#[serde(flatten)]` - Not a column
#[proc_macro_derive(Entity, attributes(orm, serde))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    entity::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
